//! Directed-cycle detection.
//!
//! Depth-first search with an additional "on the current recursion path"
//! marker. A neighbor that is both visited and on the current path closes a
//! cycle, which is reconstructed by walking traversal-tree parents back to
//! that neighbor. Detection stops at the first cycle found; every vertex is
//! tried as a starting point, in index order, so cycles reachable only from
//! late sources are still found.

use crate::graph::Adjacent;

/// Detects a directed cycle, if one exists.
///
/// The reported cycle is a vertex sequence whose consecutive elements are all
/// edges of the graph and whose first and last elements coincide. For a
/// self-loop on `v` the sequence is `[v, v]`.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::DirectedCycle;
/// use gryph::{Graph, Orientation};
///
/// let mut graph = Graph::new(3, Orientation::Directed);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 0);
///
/// let detector = DirectedCycle::new(&graph);
/// assert!(detector.has_cycle());
/// assert_eq!(detector.cycle(), Some(&[0, 1, 2, 0][..]));
/// ```
#[derive(Debug)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    /// Searches the graph for a directed cycle, stopping at the first one
    /// found.
    pub fn new<G: Adjacent>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut marked = vec![false; n];
        let mut on_path = vec![false; n];
        let mut edge_to: Vec<Option<usize>> = vec![None; n];
        let mut cycle = None;

        for v in 0..n {
            if cycle.is_some() {
                break;
            }
            if !marked[v] {
                explore(graph, v, &mut marked, &mut on_path, &mut edge_to, &mut cycle);
            }
        }

        if let Some(found) = &cycle {
            tracing::debug!(length = found.len(), "directed cycle found");
        }
        DirectedCycle { cycle }
    }

    /// Returns `true` if the graph contains a directed cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the detected cycle, first and last vertex coinciding, or
    /// `None` for an acyclic graph.
    #[must_use]
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}

/// Iterative DFS from one root; fills `cycle` and returns as soon as a
/// neighbor on the current path is seen.
fn explore<G: Adjacent>(
    graph: &G,
    root: usize,
    marked: &mut [bool],
    on_path: &mut [bool],
    edge_to: &mut [Option<usize>],
    cycle: &mut Option<Vec<usize>>,
) {
    marked[root] = true;
    on_path[root] = true;
    let mut stack = vec![(root, graph.neighbors(root))];

    loop {
        let Some(frame) = stack.last_mut() else {
            break;
        };
        let v = frame.0;
        let advanced = frame.1.next();

        match advanced {
            Some(w) if !marked[w] => {
                marked[w] = true;
                on_path[w] = true;
                edge_to[w] = Some(v);
                stack.push((w, graph.neighbors(w)));
            }
            Some(w) if on_path[w] => {
                *cycle = Some(reconstruct(v, w, edge_to));
                return;
            }
            Some(_) => {}
            None => {
                // Leaving v: it is no longer on the recursion path
                on_path[v] = false;
                stack.pop();
            }
        }
    }
}

/// Builds the cycle `w -> ... -> v -> w` by walking parents from `v` up to
/// `w`, then closing the loop.
fn reconstruct(v: usize, w: usize, edge_to: &[Option<usize>]) -> Vec<usize> {
    let mut path = vec![v];
    let mut current = v;
    while current != w {
        match edge_to[current] {
            Some(parent) => {
                path.push(parent);
                current = parent;
            }
            // w is an ancestor on the recursion path, so the chain is intact
            None => break,
        }
    }
    path.reverse();
    path.push(w);
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, Orientation};

    #[test]
    fn test_dag_has_no_cycle() {
        let mut graph = Graph::new(4, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);

        let detector = DirectedCycle::new(&graph);
        assert!(!detector.has_cycle());
        assert_eq!(detector.cycle(), None);
    }

    #[test]
    fn test_triangle_cycle() {
        let mut graph = Graph::new(3, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);

        let detector = DirectedCycle::new(&graph);
        let cycle = detector.cycle().unwrap();

        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            assert!(graph.adjacent_to(pair[0]).contains(&pair[1]));
        }
    }

    #[test]
    fn test_self_loop_cycle() {
        let mut graph = Graph::new(2, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 1);

        let detector = DirectedCycle::new(&graph);
        assert_eq!(detector.cycle(), Some(&[1, 1][..]));
    }

    #[test]
    fn test_cycle_reachable_only_from_late_source() {
        // The scan must keep going past vertices already visited from
        // earlier sources: the only cycle here starts at vertex 2.
        let mut graph = Graph::new(4, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(2, 3);
        graph.add_edge(3, 2);

        let detector = DirectedCycle::new(&graph);
        assert!(detector.has_cycle());

        let cycle = detector.cycle().unwrap();
        assert_eq!(cycle.first(), cycle.last());
        assert!(cycle.contains(&2));
        assert!(cycle.contains(&3));
    }

    #[test]
    fn test_cross_edge_is_not_a_cycle() {
        // 3 is visited twice but never while on the recursion path
        let mut graph = Graph::new(4, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);

        assert!(!DirectedCycle::new(&graph).has_cycle());
    }

    #[test]
    fn test_back_edge_deep_in_graph() {
        // 0 -> 1 -> 2 -> 3 -> 1
        let mut graph = Graph::new(4, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 1);

        let detector = DirectedCycle::new(&graph);
        assert_eq!(detector.cycle(), Some(&[1, 2, 3, 1][..]));
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new(0, Orientation::Directed);
        assert!(!DirectedCycle::new(&graph).has_cycle());
    }
}

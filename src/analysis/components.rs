//! Connected and strongly connected components.
//!
//! Undirected connectivity is a single labeling scan: a depth-first traversal
//! from every unvisited vertex in index order, stamping each discovered vertex
//! with the running component counter. Strong connectivity (Kosaraju-Sharir)
//! is the same scan run on the original graph, but with the sources visited in
//! the topological order of the *reversed* graph - that ordering is what makes
//! the labeling partition directed graphs into maximal mutually-reachable
//! sets.

use crate::analysis::topological_order;
use crate::graph::{Adjacent, Graph};

/// Component labeling for an undirected graph.
///
/// Each vertex is assigned the id of its component; two vertices are connected
/// exactly when their ids are equal.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::ConnectedComponents;
/// use gryph::{Graph, Orientation};
///
/// let mut graph = Graph::new(5, Orientation::Undirected);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// graph.add_edge(3, 4);
///
/// let components = ConnectedComponents::new(&graph);
/// assert_eq!(components.count(), 2);
/// assert!(components.connected(0, 2));
/// assert!(!components.connected(0, 3));
/// ```
#[derive(Debug)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    count: usize,
}

impl ConnectedComponents {
    /// Labels components by scanning vertices in index order.
    pub fn new<G: Adjacent>(graph: &G) -> Self {
        let every_vertex: Vec<usize> = (0..graph.vertex_count()).collect();
        Self::with_order(graph, &every_vertex)
    }

    /// Labels components by scanning candidate sources in the given order.
    ///
    /// The order decides only where each labeling traversal starts; every
    /// vertex reachable from a start shares its component id. Visiting in the
    /// topological order of the reversed graph is what turns this scan into
    /// the second phase of Kosaraju-Sharir.
    ///
    /// # Panics
    ///
    /// Panics if a vertex in `order` is outside `0..V`.
    pub fn with_order<G: Adjacent>(graph: &G, order: &[usize]) -> Self {
        let n = graph.vertex_count();
        let mut id = vec![0; n];
        let mut marked = vec![false; n];
        let mut count = 0;

        for &source in order {
            if marked[source] {
                continue;
            }

            // Label one whole component, depth-first
            marked[source] = true;
            id[source] = count;
            let mut stack = vec![(source, graph.neighbors(source))];
            loop {
                let Some(frame) = stack.last_mut() else {
                    break;
                };
                let advanced = frame.1.next();
                match advanced {
                    Some(w) if !marked[w] => {
                        marked[w] = true;
                        id[w] = count;
                        stack.push((w, graph.neighbors(w)));
                    }
                    Some(_) => {}
                    None => {
                        stack.pop();
                    }
                }
            }
            count += 1;
        }

        ConnectedComponents { id, count }
    }

    /// Tests whether two vertices share a component.
    #[must_use]
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }

    /// Returns the component id of `v`, in `0..count`.
    #[must_use]
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Returns the number of components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Strongly connected components of a directed graph (Kosaraju-Sharir).
///
/// Two vertices are strongly connected when each is reachable from the other;
/// strong connectivity partitions the graph into maximal equivalence classes.
/// The partition is computed by reusing the two mid-level analyses: the
/// topological order of the reversed graph picks the scan order, and the
/// component labeling scan runs on the original graph in that order.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::StrongComponents;
/// use gryph::{Graph, Orientation};
///
/// let mut graph = Graph::new(4, Orientation::Directed);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 0);
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 3);
///
/// let strong = StrongComponents::new(&graph);
/// assert_eq!(strong.count(), 3);
/// assert!(strong.strongly_connected(0, 1));
/// assert!(!strong.strongly_connected(1, 2));
/// ```
#[derive(Debug)]
pub struct StrongComponents {
    components: ConnectedComponents,
}

impl StrongComponents {
    /// Computes the strong components of a directed graph.
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &Graph) -> Self {
        let scan_order = topological_order(&graph.reverse());
        let components = ConnectedComponents::with_order(graph, &scan_order);
        tracing::debug!(count = components.count(), "strong components labeled");
        StrongComponents { components }
    }

    /// Tests whether each of two vertices is reachable from the other.
    #[must_use]
    pub fn strongly_connected(&self, v: usize, w: usize) -> bool {
        self.components.connected(v, w)
    }

    /// Returns the strong-component id of `v`, in `0..count`.
    #[must_use]
    pub fn id(&self, v: usize) -> usize {
        self.components.id(v)
    }

    /// Returns the number of strong components.
    #[must_use]
    pub fn count(&self) -> usize {
        self.components.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;

    #[test]
    fn test_single_component() {
        let mut graph = Graph::new(4, Orientation::Undirected);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        let components = ConnectedComponents::new(&graph);
        assert_eq!(components.count(), 1);
        assert!(components.connected(0, 3));
    }

    #[test]
    fn test_isolated_vertices_are_components() {
        let graph = Graph::new(3, Orientation::Undirected);
        let components = ConnectedComponents::new(&graph);

        assert_eq!(components.count(), 3);
        assert!(!components.connected(0, 1));
        assert!(components.connected(2, 2));
    }

    #[test]
    fn test_component_ids_are_dense() {
        let mut graph = Graph::new(6, Orientation::Undirected);
        graph.add_edge(0, 1);
        graph.add_edge(2, 3);
        graph.add_edge(4, 5);

        let components = ConnectedComponents::new(&graph);
        assert_eq!(components.count(), 3);
        for v in 0..6 {
            assert!(components.id(v) < components.count());
        }
        assert_eq!(components.id(0), components.id(1));
        assert_ne!(components.id(1), components.id(2));
    }

    #[test]
    fn test_strong_two_cycles_bridged() {
        // (0 <-> 1) -> (2 <-> 3)
        let mut graph = Graph::new(4, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 0);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 2);

        let strong = StrongComponents::new(&graph);
        assert_eq!(strong.count(), 2);
        assert!(strong.strongly_connected(0, 1));
        assert!(strong.strongly_connected(2, 3));
        assert!(!strong.strongly_connected(1, 2));
    }

    #[test]
    fn test_strong_dag_is_all_singletons() {
        let mut graph = Graph::new(4, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        let strong = StrongComponents::new(&graph);
        assert_eq!(strong.count(), 4);
        for v in 0..4 {
            for w in 0..4 {
                assert_eq!(strong.strongly_connected(v, w), v == w);
            }
        }
    }

    #[test]
    fn test_strong_one_way_pair_not_merged() {
        // Reachability one way only is not strong connectivity
        let mut graph = Graph::new(2, Orientation::Directed);
        graph.add_edge(0, 1);

        let strong = StrongComponents::new(&graph);
        assert_eq!(strong.count(), 2);
        assert!(!strong.strongly_connected(0, 1));
    }

    #[test]
    fn test_strong_whole_graph_cycle() {
        let mut graph = Graph::new(5, Orientation::Directed);
        for v in 0..5 {
            graph.add_edge(v, (v + 1) % 5);
        }

        let strong = StrongComponents::new(&graph);
        assert_eq!(strong.count(), 1);
        assert!(strong.strongly_connected(0, 4));
    }

    #[test]
    fn test_strong_self_loop_vertex() {
        let mut graph = Graph::new(2, Orientation::Directed);
        graph.add_edge(0, 0);
        graph.add_edge(0, 1);

        let strong = StrongComponents::new(&graph);
        assert_eq!(strong.count(), 2);
    }
}

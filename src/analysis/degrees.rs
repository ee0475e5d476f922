//! Per-vertex degree statistics.

use crate::graph::Adjacent;

/// In- and out-degrees, sources and sinks.
///
/// Out-degree is a vertex's adjacency size; in-degree is accumulated by
/// iterating every adjacency and crediting the neighbor. Sources are vertices
/// with in-degree zero, sinks those with out-degree zero. For an undirected
/// graph the two degrees coincide.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::Degrees;
/// use gryph::{Graph, Orientation};
///
/// let mut graph = Graph::new(3, Orientation::Directed);
/// graph.add_edge(0, 1);
/// graph.add_edge(0, 2);
/// graph.add_edge(1, 2);
///
/// let degrees = Degrees::new(&graph);
/// assert_eq!(degrees.out_degree(0), 2);
/// assert_eq!(degrees.in_degree(2), 2);
/// assert_eq!(degrees.sources(), &[0]);
/// assert_eq!(degrees.sinks(), &[2]);
/// ```
#[derive(Debug)]
pub struct Degrees {
    in_degree: Vec<usize>,
    out_degree: Vec<usize>,
    sources: Vec<usize>,
    sinks: Vec<usize>,
}

impl Degrees {
    /// Accumulates degree statistics over every adjacency list.
    pub fn new<G: Adjacent>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut in_degree = vec![0; n];
        let mut out_degree = vec![0; n];

        for v in 0..n {
            for w in graph.neighbors(v) {
                out_degree[v] += 1;
                in_degree[w] += 1;
            }
        }

        let sources = (0..n).filter(|&v| in_degree[v] == 0).collect();
        let sinks = (0..n).filter(|&v| out_degree[v] == 0).collect();

        Degrees {
            in_degree,
            out_degree,
            sources,
            sinks,
        }
    }

    /// Returns the number of edges entering `v`.
    #[must_use]
    pub fn in_degree(&self, v: usize) -> usize {
        self.in_degree[v]
    }

    /// Returns the number of edges leaving `v`.
    #[must_use]
    pub fn out_degree(&self, v: usize) -> usize {
        self.out_degree[v]
    }

    /// Returns the vertices with in-degree zero, ascending.
    #[must_use]
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Returns the vertices with out-degree zero, ascending.
    #[must_use]
    pub fn sinks(&self) -> &[usize] {
        &self.sinks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, Orientation};

    #[test]
    fn test_directed_degrees() {
        let mut graph = Graph::new(4, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);

        let degrees = Degrees::new(&graph);
        assert_eq!(degrees.out_degree(0), 2);
        assert_eq!(degrees.in_degree(0), 0);
        assert_eq!(degrees.in_degree(2), 2);
        assert_eq!(degrees.out_degree(3), 0);
    }

    #[test]
    fn test_sources_and_sinks() {
        let mut graph = Graph::new(5, Orientation::Directed);
        graph.add_edge(0, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(2, 4);

        let degrees = Degrees::new(&graph);
        assert_eq!(degrees.sources(), &[0, 1]);
        assert_eq!(degrees.sinks(), &[3, 4]);
    }

    #[test]
    fn test_undirected_degrees_symmetric() {
        let mut graph = Graph::new(3, Orientation::Undirected);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);

        let degrees = Degrees::new(&graph);
        for v in 0..3 {
            assert_eq!(degrees.in_degree(v), degrees.out_degree(v));
        }
        assert_eq!(degrees.in_degree(1), 2);
    }

    #[test]
    fn test_self_loop_counts_both_ways() {
        let mut graph = Graph::new(1, Orientation::Directed);
        graph.add_edge(0, 0);

        let degrees = Degrees::new(&graph);
        assert_eq!(degrees.in_degree(0), 1);
        assert_eq!(degrees.out_degree(0), 1);
        assert!(degrees.sources().is_empty());
        assert!(degrees.sinks().is_empty());
    }

    #[test]
    fn test_isolated_vertex_is_source_and_sink() {
        let graph = Graph::new(1, Orientation::Directed);
        let degrees = Degrees::new(&graph);
        assert_eq!(degrees.sources(), &[0]);
        assert_eq!(degrees.sinks(), &[0]);
    }
}

//! Topological ordering of directed acyclic graphs.
//!
//! The topological order of a DAG is the reverse-post order of a depth-first
//! traversal seeded from every vertex. [`TopologicalSort`] composes cycle
//! detection with that order: a cyclic graph is reported not sortable instead
//! of being handed a meaningless permutation.

use crate::analysis::{DepthFirst, DfsOrder, DirectedCycle};
use crate::graph::Adjacent;

/// Computes the reverse-post depth-first order seeded from every vertex in
/// index order.
///
/// For a DAG this is a topological order: for every edge `v -> w`, `v`
/// precedes `w` in the result. For a cyclic graph the result is still a
/// permutation of all vertices, but carries no ordering guarantee; use
/// [`TopologicalSort`] when acyclicity is not already known.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::topological_order;
/// use gryph::{Graph, Orientation};
///
/// let mut graph = Graph::new(3, Orientation::Directed);
/// graph.add_edge(2, 0);
/// graph.add_edge(0, 1);
///
/// assert_eq!(topological_order(&graph), vec![2, 0, 1]);
/// ```
#[must_use]
pub fn topological_order<G: Adjacent>(graph: &G) -> Vec<usize> {
    let every_vertex: Vec<usize> = (0..graph.vertex_count()).collect();
    DepthFirst::new(graph, &every_vertex, DfsOrder::ReversePost).into_order()
}

/// Topological sort with an acyclicity check.
///
/// Runs cycle detection first; only when no cycle exists is the topological
/// order computed and exposed.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::TopologicalSort;
/// use gryph::{Graph, Orientation};
///
/// let mut dag = Graph::new(3, Orientation::Directed);
/// dag.add_edge(0, 1);
/// dag.add_edge(1, 2);
///
/// let sort = TopologicalSort::new(&dag);
/// assert!(sort.is_dag());
/// assert_eq!(sort.order(), Some(&[0, 1, 2][..]));
/// ```
#[derive(Debug)]
pub struct TopologicalSort {
    order: Option<Vec<usize>>,
}

impl TopologicalSort {
    /// Checks the graph for cycles and, if it is a DAG, computes its
    /// topological order.
    pub fn new<G: Adjacent>(graph: &G) -> Self {
        if DirectedCycle::new(graph).has_cycle() {
            TopologicalSort { order: None }
        } else {
            TopologicalSort {
                order: Some(topological_order(graph)),
            }
        }
    }

    /// Returns `true` if the graph was acyclic and therefore sortable.
    #[must_use]
    pub fn is_dag(&self) -> bool {
        self.order.is_some()
    }

    /// Returns the topological order, or `None` for a cyclic graph.
    #[must_use]
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }
}

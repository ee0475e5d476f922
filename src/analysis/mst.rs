//! Minimum spanning tree via Kruskal's algorithm.
//!
//! Composes the two supporting structures: every edge goes into a min-ordered
//! priority queue keyed by weight, and a union-find over the vertex set
//! rejects edges whose endpoints are already connected. Accepted edges form
//! the tree; for a disconnected graph the result is a minimum spanning forest
//! with fewer than V-1 edges.

use crate::collections::{Heap, UnionFind};
use crate::graph::{Edge, EdgeWeightedGraph};
use crate::Result;

/// Minimum spanning tree (or forest) of an edge-weighted undirected graph.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::KruskalMst;
/// use gryph::{Edge, EdgeWeightedGraph};
///
/// let mut graph = EdgeWeightedGraph::new(3);
/// graph.add_edge(Edge::new(0, 1, 1.0)?);
/// graph.add_edge(Edge::new(1, 2, 2.0)?);
/// graph.add_edge(Edge::new(0, 2, 4.0)?);
///
/// let mst = KruskalMst::new(&graph)?;
/// assert_eq!(mst.edges().len(), 2);
/// assert_eq!(mst.weight(), 3.0);
/// # Ok::<(), gryph::Error>(())
/// ```
#[derive(Debug)]
pub struct KruskalMst {
    edges: Vec<Edge>,
    weight: f64,
}

impl KruskalMst {
    /// Builds the spanning tree by repeatedly extracting the lightest
    /// remaining edge and accepting it unless it would close a cycle.
    ///
    /// Stops once V-1 edges are accepted or the queue is exhausted,
    /// whichever comes first.
    ///
    /// # Errors
    ///
    /// Union-find errors cannot occur for edges produced by a well-formed
    /// graph; the `Result` propagates them rather than masking them.
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn new(graph: &EdgeWeightedGraph) -> Result<Self> {
        let mut queue = Heap::min_by(|a: &Edge, b: &Edge| a.weight().total_cmp(&b.weight()));
        for edge in graph.edges() {
            queue.insert(edge);
        }

        let mut components = UnionFind::new(graph.vertex_count());
        let mut edges = Vec::new();
        let mut weight = 0.0;
        let target = graph.vertex_count().saturating_sub(1);

        while edges.len() < target {
            let Ok(edge) = queue.pop() else {
                // Queue exhausted before V-1 edges: spanning forest
                break;
            };
            let v = edge.either();
            let w = edge.other(v);

            if components.connected(v, w)? {
                // Both endpoints already in the tree: the edge would close a cycle
                continue;
            }
            components.union(v, w)?;
            weight += edge.weight();
            edges.push(edge);
        }

        tracing::debug!(accepted = edges.len(), weight, "spanning tree built");
        Ok(KruskalMst { edges, weight })
    }

    /// Returns the accepted edges, in ascending weight order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the total weight of the accepted edges.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

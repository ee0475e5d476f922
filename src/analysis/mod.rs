//! Graph traversal and derived analyses.
//!
//! This module provides the traversal core and everything built on top of it.
//! Every analysis is query-scoped: it is constructed against an immutable
//! graph, computes its result eagerly in the constructor, and is then read
//! through accessors. No analysis ever mutates the graph it was given.
//!
//! # Available Analyses
//!
//! ## Traversal
//!
//! - [`DepthFirst`] - Iterative depth-first traversal with selectable
//!   pre/post/reverse-post visitation order
//! - [`BreadthFirst`] - Multi-source breadth-first traversal with
//!   edge-minimal parent paths
//!
//! ## Ordering and Cycles
//!
//! - [`DirectedCycle`] - First directed cycle, if any
//! - [`topological_order`] / [`TopologicalSort`] - DAG vertex ordering
//!
//! ## Connectivity
//!
//! - [`ConnectedComponents`] - Component labeling for undirected graphs
//! - [`StrongComponents`] - Kosaraju-Sharir strong components for directed
//!   graphs
//!
//! ## Composite Queries
//!
//! - [`Degrees`] - In/out degrees, sources and sinks
//! - [`ShortestAncestralPath`] - Minimal-total-distance common ancestors
//! - [`KruskalMst`] - Minimum spanning tree / forest
//!
//! # Algorithm Selection
//!
//! | Analysis | Time Complexity | Built On |
//! |----------|-----------------|----------|
//! | DFS/BFS | O(V + E) | adjacency |
//! | Cycle detection | O(V + E) | DFS with an on-path marker |
//! | Topological sort | O(V + E) | cycle detection + reverse-post order |
//! | Strong components | O(V + E) | reversal + topological order + labeling |
//! | Shortest ancestral path | O(V + E) per query | two BFS passes |
//! | Kruskal MST | O(E log E) | priority queue + union-find |
//!
//! # Examples
//!
//! ```rust
//! use gryph::analysis::{DepthFirst, DfsOrder};
//! use gryph::{Graph, Orientation};
//!
//! let mut graph = Graph::new(4, Orientation::Directed);
//! graph.add_edge(0, 1);
//! graph.add_edge(1, 2);
//!
//! let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Pre);
//! assert!(dfs.marked(2));
//! assert!(!dfs.marked(3));
//! ```

mod components;
mod cycle;
mod degrees;
mod mst;
mod sap;
mod topological;
mod traversal;

pub use components::{ConnectedComponents, StrongComponents};
pub use cycle::DirectedCycle;
pub use degrees::Degrees;
pub use mst::KruskalMst;
pub use sap::{Ancestor, ShortestAncestralPath};
pub use topological::{topological_order, TopologicalSort};
pub use traversal::{BreadthFirst, DepthFirst, DfsOrder, Traversal};

//! # gryph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the gryph library. Import this module to get quick access to the essential types
//! for graph construction and analysis.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all gryph operations
pub use crate::Error;

/// The result type used throughout gryph
pub use crate::Result;

// ================================================================================================
// Graph Representations
// ================================================================================================

/// Unweighted graph over integer-indexed vertices
pub use crate::graph::{Graph, Orientation};

/// Edge-weighted undirected graph and its edge type
pub use crate::graph::{Edge, EdgeWeightedGraph};

/// Adjacency abstraction the traversal core is generic over
pub use crate::graph::Adjacent;

// ================================================================================================
// Traversal Core
// ================================================================================================

/// Depth-first traversal with selectable visitation order
pub use crate::analysis::{DepthFirst, DfsOrder};

/// Multi-source breadth-first traversal
pub use crate::analysis::BreadthFirst;

// ================================================================================================
// Derived Analyses
// ================================================================================================

/// Directed-cycle detection
pub use crate::analysis::DirectedCycle;

/// Topological ordering of a directed acyclic graph
pub use crate::analysis::{topological_order, TopologicalSort};

/// Connectivity analyses
pub use crate::analysis::{ConnectedComponents, StrongComponents};

/// Per-vertex degree statistics
pub use crate::analysis::Degrees;

/// Shortest-ancestral-path queries
pub use crate::analysis::{Ancestor, ShortestAncestralPath};

/// Minimum spanning tree via Kruskal's algorithm
pub use crate::analysis::KruskalMst;

// ================================================================================================
// Supporting Structures
// ================================================================================================

/// Binary-heap priority queues
pub use crate::collections::{Heap, IndexHeap, OrderingMode};

/// Weighted quick-union union-find
pub use crate::collections::UnionFind;

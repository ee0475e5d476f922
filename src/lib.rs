// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # gryph
//!
//! A small, self-contained engine for analyzing in-memory graphs over integer-indexed
//! vertices. `gryph` provides vertex-indexed graph representations, depth- and breadth-first
//! traversal, and the derived analyses built on top of them: connectivity, strong
//! connectivity, cycle detection, topological ordering, degree statistics, shortest
//! ancestral paths and minimum spanning trees.
//!
//! ## Features
//!
//! - **Compact representations** - Adjacency-list graphs (undirected, directed,
//!   edge-weighted) with self-loops and parallel edges permitted
//! - **Iterative traversal core** - Depth-first search with an explicit work stack
//!   (no recursion-depth limits) and multi-source breadth-first search with
//!   edge-minimal parent paths
//! - **Composable analyses** - Strongly connected components reuse reversal and
//!   topological ordering; the spanning tree reuses the priority queue and union-find
//! - **Supporting structures** - A resizable binary heap (plain and index-addressable)
//!   and a weighted quick-union union-find
//! - **Eager validation** - Structural violations are reported at the point of
//!   construction or mutation, never deferred
//!
//! ## Quick Start
//!
//! Add `gryph` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gryph = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use gryph::prelude::*;
//!
//! let mut graph = Graph::new(6, Orientation::Undirected);
//! for (v, w) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)] {
//!     graph.add_edge(v, w);
//! }
//!
//! let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Pre);
//! assert_eq!(dfs.path_to(5), Some(vec![0, 1, 2, 3, 4, 5]));
//! ```
//!
//! ### Parsing the Text Format
//!
//! Graphs can be built incrementally via [`Graph::add_edge`] or parsed from the
//! whitespace-separated text format (vertex count, edge count, one edge per line):
//!
//! ```rust
//! use gryph::{Graph, Orientation};
//!
//! let graph = Graph::parse("3\n2\n0 1\n1 2\n", Orientation::Directed)?;
//! assert_eq!(graph.vertex_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//! # Ok::<(), gryph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! `gryph` is organized into three layers with strictly downward data flow:
//!
//! - [`collections`] - Leaf structures: [`collections::Heap`], [`collections::IndexHeap`]
//!   and [`collections::UnionFind`]
//! - [`graph`] - Representations: [`Graph`], [`EdgeWeightedGraph`] and the [`Adjacent`]
//!   trait the analyses are generic over
//! - [`analysis`] - The traversal core and everything derived from it
//!
//! Graphs are built once and thereafter only read; every analysis is query-scoped:
//! constructed, computed eagerly, queried via read accessors, then discarded. Because no
//! analysis ever mutates the graph it was given, any number of analyses may be run over
//! one shared graph concurrently without locking.
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, Error>`](Result):
//!
//! ```rust
//! use gryph::{Error, Graph, Orientation};
//!
//! match Graph::parse("4\n2\n0 1\n", Orientation::Undirected) {
//!     Ok(graph) => println!("parsed {} edges", graph.edge_count()),
//!     Err(Error::ReadFormat { message, .. }) => println!("malformed input: {}", message),
//!     Err(e) => println!("other error: {}", e),
//! }
//! ```

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use gryph::prelude::*;
///
/// let graph = Graph::new(3, Orientation::Directed);
/// assert_eq!(graph.vertex_count(), 3);
/// ```
pub mod prelude;

/// Supporting structures the analyses are composed from.
///
/// - [`collections::Heap`] - Resizable binary-heap priority queue with configurable
///   min/max ordering and optional comparator
/// - [`collections::IndexHeap`] - Index-addressable variant over a fixed universe
///   of identifiers
/// - [`collections::UnionFind`] - Weighted quick-union over a fixed universe
pub mod collections;

/// Vertex-indexed graph representations.
///
/// - [`graph::Graph`] - Unweighted graph, undirected or directed via [`Orientation`]
/// - [`graph::EdgeWeightedGraph`] - Undirected graph whose adjacency holds incident
///   weighted [`Edge`]s
/// - [`graph::Adjacent`] - The adjacency abstraction the traversal core is generic over
pub mod graph;

/// Traversal core and derived analyses.
///
/// Mid-level components consume graph representations ([`analysis::DepthFirst`],
/// [`analysis::BreadthFirst`], [`analysis::DirectedCycle`],
/// [`analysis::TopologicalSort`]); top-level components compose mid-level results
/// ([`analysis::StrongComponents`], [`analysis::ShortestAncestralPath`],
/// [`analysis::KruskalMst`]).
pub mod analysis;

/// `gryph` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always
/// [`Error`]. This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use gryph::{Graph, Orientation, Result};
///
/// fn load_graph(text: &str) -> Result<Graph> {
///     Graph::parse(text, Orientation::Undirected)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `gryph` Error type
///
/// The main error type for all operations in this crate. Provides detailed error
/// information for text-format parsing and priority-queue / union-find mutation.
///
/// # Examples
///
/// ```rust
/// use gryph::{Error, Graph, Orientation};
///
/// match Graph::parse("not a graph", Orientation::Undirected) {
///     Ok(_) => unreachable!(),
///     Err(Error::ReadFormat { message, .. }) => println!("malformed: {}", message),
///     Err(e) => println!("error: {}", e),
/// }
/// ```
pub use error::Error;

/// Unweighted graph representation, undirected or directed.
///
/// See [`graph::Graph`] for construction, parsing and adjacency access.
pub use graph::{Graph, Orientation};

/// Edge-weighted undirected graph and its weighted edge type.
///
/// See [`graph::EdgeWeightedGraph`] for construction and [`analysis::KruskalMst`]
/// for the spanning-tree analysis built on top of it.
pub use graph::{Edge, EdgeWeightedGraph};

/// The adjacency abstraction implemented by every graph representation.
///
/// Traversals and analyses are generic over this trait, never over a concrete
/// representation.
pub use graph::Adjacent;

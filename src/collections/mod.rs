//! Supporting structures for the graph analyses.
//!
//! This module provides the two structures with real mutation lifecycles: the
//! binary-heap priority queue (plain and index-addressable) and the weighted
//! quick-union union-find. Everything else in the crate is built once and then
//! only read; these are the structures an analysis inserts into and removes
//! from while it runs.
//!
//! # Available Structures
//!
//! - [`Heap`] - Resizable binary heap with configurable min/max ordering and
//!   optional comparator
//! - [`IndexHeap`] - Heap over a fixed universe of identifiers, addressable by
//!   identifier for key replacement and removal
//! - [`UnionFind`] - Weighted quick-union over a fixed universe, no path
//!   compression
//!
//! # Ownership
//!
//! Instances are exclusively owned by a single analysis. They are not
//! internally synchronized and must not be shared across concurrent callers
//! without external locking.

mod heap;
mod index_heap;
mod union_find;

pub use heap::{Heap, OrderingMode};
pub use index_heap::IndexHeap;
pub use union_find::UnionFind;

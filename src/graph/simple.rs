//! Unweighted graph representation.
//!
//! This module provides [`Graph`], a single adjacency-list structure covering
//! both undirected and directed graphs. The two differ only in how an edge is
//! recorded: undirected insertion writes both endpoint lists, directed
//! insertion writes the tail's list only. That difference is captured by the
//! [`Orientation`] value fixed at construction rather than by separate types.

use std::fmt;

use crate::graph::parse::{parse_count, parse_vertex};
use crate::graph::Adjacent;
use crate::Result;

/// Whether edges are unordered pairs or ordered arcs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Orientation {
    /// `add_edge(v, w)` connects both directions; adjacency is symmetric.
    #[strum(serialize = "undirected")]
    Undirected,
    /// `add_edge(v, w)` records the arc `v -> w` only.
    #[strum(serialize = "directed")]
    Directed,
}

/// An unweighted graph over vertices `0..V`.
///
/// The vertex count is fixed at construction and the edge count only grows.
/// Adjacency is a per-vertex unordered multiset: self-loops and parallel
/// edges are stored as given. For an undirected graph the symmetry invariant
/// holds after every insertion: `w` appears in `adjacent_to(v)` exactly as
/// often as `v` appears in `adjacent_to(w)`.
///
/// Graphs are built once, either incrementally via [`add_edge`](Graph::add_edge)
/// or from the text format via [`parse`](Graph::parse), and thereafter only
/// read. No analysis mutates the graph it was given, so one graph can back any
/// number of concurrent analyses.
///
/// # Examples
///
/// ```rust
/// use gryph::{Graph, Orientation};
///
/// let mut graph = Graph::new(3, Orientation::Undirected);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
///
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adjacent_to(1), &[0, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    orientation: Orientation,
    /// Number of edges added so far
    edges: usize,
    /// Adjacency multiset per vertex
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `vertices` vertices and no edges.
    #[must_use]
    pub fn new(vertices: usize, orientation: Orientation) -> Self {
        Graph {
            orientation,
            edges: 0,
            adj: vec![Vec::new(); vertices],
        }
    }

    /// Parses a graph from the whitespace-separated text format.
    ///
    /// The format is: vertex count on the first line, edge count on the
    /// second, then one `v w` pair per line. Blank lines are ignored. After
    /// all listed edges are added, the parsed edge count must equal the
    /// declared one.
    ///
    /// # Arguments
    ///
    /// * `text` - The already-materialized input text
    /// * `orientation` - Whether each `v w` line is an unordered pair or an
    ///   arc `v -> w`
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadFormat`](crate::Error::ReadFormat) when a count or
    /// edge line is malformed, an endpoint lies outside `0..V`, or the
    /// declared edge count does not match the number of edges parsed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use gryph::{Graph, Orientation};
    ///
    /// let graph = Graph::parse("4\n3\n0 1\n1 2\n2 3\n", Orientation::Directed)?;
    /// assert_eq!(graph.vertex_count(), 4);
    /// assert_eq!(graph.edge_count(), 3);
    /// # Ok::<(), gryph::Error>(())
    /// ```
    pub fn parse(text: &str, orientation: Orientation) -> Result<Self> {
        let mut lines = text.lines().map(str::trim).filter(|line| !line.is_empty());

        let vertices = parse_count(lines.next(), "vertex count")?;
        let declared = parse_count(lines.next(), "edge count")?;

        let mut graph = Graph::new(vertices, orientation);
        for line in lines {
            let mut fields = line.split_whitespace();
            let v = parse_vertex(fields.next(), vertices, line)?;
            let w = parse_vertex(fields.next(), vertices, line)?;
            if fields.next().is_some() {
                return Err(read_format_error!("trailing fields in edge line '{}'", line));
            }
            graph.add_edge(v, w);
        }

        if graph.edges != declared {
            return Err(read_format_error!(
                "declared {} edges but parsed {}",
                declared,
                graph.edges
            ));
        }
        Ok(graph)
    }

    /// Adds an edge between `v` and `w`, increasing the edge count by exactly
    /// one. For an undirected graph both adjacency lists are extended; for a
    /// directed graph only `v`'s list is.
    ///
    /// # Panics
    ///
    /// Panics if `v` or `w` is outside `0..V`.
    pub fn add_edge(&mut self, v: usize, w: usize) {
        match self.orientation {
            Orientation::Undirected => {
                self.adj[v].push(w);
                self.adj[w].push(v);
            }
            Orientation::Directed => {
                // Touch w's slot so out-of-range heads fail as loudly as tails
                assert!(w < self.adj.len(), "vertex {w} is outside the graph");
                self.adj[v].push(w);
            }
        }
        self.edges += 1;
    }

    /// Returns the vertices adjacent to `v`, with multiplicity.
    ///
    /// # Panics
    ///
    /// Panics if `v` is outside `0..V`.
    #[must_use]
    pub fn adjacent_to(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Returns the fixed vertex count `V`.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Returns the number of edges added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Returns the orientation fixed at construction.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the graph with every arc flipped.
    ///
    /// For a directed graph the result contains the arc `w -> v` for every arc
    /// `v -> w`. An undirected graph is its own reversal and is returned as a
    /// plain clone.
    #[must_use]
    pub fn reverse(&self) -> Graph {
        match self.orientation {
            Orientation::Undirected => self.clone(),
            Orientation::Directed => {
                let mut reversed = Graph::new(self.vertex_count(), Orientation::Directed);
                for v in 0..self.vertex_count() {
                    for &w in &self.adj[v] {
                        reversed.add_edge(w, v);
                    }
                }
                reversed
            }
        }
    }
}

impl Adjacent for Graph {
    type Neighbors<'a> = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors(&self, v: usize) -> Self::Neighbors<'_> {
        self.adj[v].iter().copied()
    }
}

impl fmt::Display for Graph {
    /// Formats the graph as one adjacency line per vertex, headed by the
    /// vertex and edge counts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} graph: {} vertices, {} edges",
            self.orientation,
            self.vertex_count(),
            self.edges
        )?;
        for (v, neighbors) in self.adj.iter().enumerate() {
            write!(f, "{v} :")?;
            for w in neighbors {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Shortest-ancestral-path queries over a directed graph.
//!
//! An *ancestor* of a query point is any vertex reachable from it along
//! forward edges; the query point itself is an ancestor at distance zero. A
//! shortest ancestral path between two query points runs through the common
//! ancestor minimizing the sum of the two distances, where the distance to a
//! vertex set is the distance to its nearest member.
//!
//! Each query runs two multi-source breadth-first passes: the first records
//! the distance to every ancestor of the first query point, the second walks
//! the ancestors of the second point and minimizes the combined distance over
//! the vertices both passes reached. Results are memoized per exact query, so
//! repeating a query does not traverse again and overlapping-but-different
//! queries can never observe each other's results.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::graph::Adjacent;

/// A common ancestor found by a shortest-ancestral-path query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ancestor {
    /// The minimizing common ancestor.
    pub vertex: usize,
    /// Total distance through it: first-point distance plus second-point
    /// distance.
    pub length: usize,
}

/// Shortest-ancestral-path query engine over one directed graph.
///
/// The engine borrows the graph for its lifetime and keeps two memo maps, one
/// per query shape: single-vertex pairs and vertex-set pairs. Queries take
/// `&mut self` only to feed the memo; the graph itself is never touched.
///
/// `None` means the two query points have no common ancestor (or a query set
/// was empty).
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::{Ancestor, ShortestAncestralPath};
/// use gryph::{Graph, Orientation};
///
/// // Two leaves under a common root: 1 -> 0 <- 2
/// let mut graph = Graph::new(3, Orientation::Directed);
/// graph.add_edge(1, 0);
/// graph.add_edge(2, 0);
///
/// let mut sap = ShortestAncestralPath::new(&graph);
/// assert_eq!(sap.between(1, 2), Some(Ancestor { vertex: 0, length: 2 }));
/// assert_eq!(sap.between(1, 1), Some(Ancestor { vertex: 1, length: 0 }));
/// ```
#[derive(Debug)]
pub struct ShortestAncestralPath<'g, G: Adjacent> {
    graph: &'g G,
    pair_memo: HashMap<(usize, usize), Option<Ancestor>>,
    set_memo: HashMap<(Vec<usize>, Vec<usize>), Option<Ancestor>>,
}

impl<'g, G: Adjacent> ShortestAncestralPath<'g, G> {
    /// Creates a query engine over the graph.
    pub fn new(graph: &'g G) -> Self {
        ShortestAncestralPath {
            graph,
            pair_memo: HashMap::new(),
            set_memo: HashMap::new(),
        }
    }

    /// Finds the common ancestor of two vertices minimizing total distance.
    ///
    /// `between(v, v)` is distance zero with `v` as its own ancestor. Returns
    /// `None` when the vertices have no common ancestor.
    ///
    /// # Panics
    ///
    /// Panics if either vertex is outside `0..V`.
    pub fn between(&mut self, v: usize, w: usize) -> Option<Ancestor> {
        if let Some(&memoized) = self.pair_memo.get(&(v, w)) {
            return memoized;
        }
        let result = self.search(&[v], &[w]);
        self.pair_memo.insert((v, w), result);
        result
    }

    /// Finds the common ancestor of two vertex sets minimizing total
    /// distance, where distance to a set is distance to its nearest member.
    ///
    /// Sets sharing a member have distance zero with the shared member as
    /// ancestor. Returns `None` when either set is empty or no common
    /// ancestor exists.
    ///
    /// # Panics
    ///
    /// Panics if any vertex is outside `0..V`.
    pub fn between_sets(&mut self, first: &[usize], second: &[usize]) -> Option<Ancestor> {
        if first.is_empty() || second.is_empty() {
            return None;
        }

        let key = (normalize(first), normalize(second));
        if let Some(&memoized) = self.set_memo.get(&key) {
            return memoized;
        }
        let result = self.search(&key.0, &key.1);
        self.set_memo.insert(key, result);
        result
    }

    /// Convenience accessor for the distance of [`between`](Self::between).
    pub fn length(&mut self, v: usize, w: usize) -> Option<usize> {
        self.between(v, w).map(|ancestor| ancestor.length)
    }

    /// Convenience accessor for the vertex of [`between`](Self::between).
    pub fn ancestor(&mut self, v: usize, w: usize) -> Option<usize> {
        self.between(v, w).map(|ancestor| ancestor.vertex)
    }

    /// Two-pass breadth-first search for the minimizing common ancestor.
    #[tracing::instrument(skip(self), level = "debug")]
    fn search(&self, first: &[usize], second: &[usize]) -> Option<Ancestor> {
        // A shared member is a zero-distance ancestor; no traversal needed
        let first_seeds: HashSet<usize> = first.iter().copied().collect();
        if let Some(&shared) = second.iter().find(|&&s| first_seeds.contains(&s)) {
            return Some(Ancestor {
                vertex: shared,
                length: 0,
            });
        }

        // Pass 1: distance from the first query point to each of its ancestors
        let from_first = self.distances(first);

        // Pass 2: walk the second point's ancestors, minimizing the combined
        // distance over every vertex the first pass also reached
        let mut best: Option<Ancestor> = None;
        let mut from_second: HashMap<usize, usize> = HashMap::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        for &seed in second {
            if !from_second.contains_key(&seed) {
                from_second.insert(seed, 0);
                queue.push_back(seed);
            }
        }

        while let Some(v) = queue.pop_front() {
            let distance = from_second[&v];
            if let Some(&first_distance) = from_first.get(&v) {
                let total = first_distance + distance;
                if best.is_none_or(|b| total < b.length) {
                    best = Some(Ancestor {
                        vertex: v,
                        length: total,
                    });
                }
            }
            for w in self.graph.neighbors(v) {
                if !from_second.contains_key(&w) {
                    from_second.insert(w, distance + 1);
                    queue.push_back(w);
                }
            }
        }

        best
    }

    /// Multi-source BFS recording the distance to every reached vertex.
    fn distances(&self, seeds: &[usize]) -> HashMap<usize, usize> {
        let mut distance: HashMap<usize, usize> = HashMap::new();
        let mut queue: VecDeque<usize> = VecDeque::new();
        for &seed in seeds {
            if !distance.contains_key(&seed) {
                distance.insert(seed, 0);
                queue.push_back(seed);
            }
        }

        while let Some(v) = queue.pop_front() {
            let d = distance[&v];
            for w in self.graph.neighbors(v) {
                if !distance.contains_key(&w) {
                    distance.insert(w, d + 1);
                    queue.push_back(w);
                }
            }
        }
        distance
    }
}

/// Sorts and dedups a query set so semantically identical sets share one memo
/// entry.
fn normalize(set: &[usize]) -> Vec<usize> {
    let mut normalized = set.to_vec();
    normalized.sort_unstable();
    normalized.dedup();
    normalized
}

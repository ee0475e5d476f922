//! Depth-first and breadth-first traversal.
//!
//! Both traversals share one state abstraction: a per-vertex visited flag and
//! the parent in the traversal tree, created once per query and populated by
//! exactly one pass. A vertex moves from unvisited to visited exactly once,
//! triggered by discovery from an already-visited vertex (or by being a
//! source), and never moves back.
//!
//! Depth-first traversal is iterative: an explicit work stack holds one frame
//! per open vertex, each frame pairing the vertex with its partially-consumed
//! neighbor iterator. This preserves recursive discovery-order semantics while
//! keeping stack depth off the call stack, so deep path-shaped graphs cannot
//! exhaust it. Breadth-first traversal seeds every source at level 0
//! simultaneously, which makes each parent path edge-minimal to the *nearest*
//! source.

use std::collections::VecDeque;

use crate::graph::Adjacent;

/// Which visitation order a depth-first traversal records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum DfsOrder {
    /// Vertices in discovery order (recorded on entry).
    #[strum(serialize = "pre")]
    Pre,
    /// Vertices in finish order (recorded on exit).
    #[strum(serialize = "post")]
    Post,
    /// The reverse of the finish order; for a DAG this is a topological order.
    #[strum(serialize = "reverse-post")]
    ReversePost,
}

/// Shared traversal state: visited flags and the parent-in-traversal-tree.
///
/// Created once per query by [`DepthFirst`] or [`BreadthFirst`], populated by
/// exactly one traversal pass, then read-only. `count` is the number of
/// disjoint components the source set reached (incremented each time an
/// unvisited source starts a traversal).
#[derive(Debug, Clone)]
pub struct Traversal {
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
    is_source: Vec<bool>,
    sources: Vec<usize>,
    count: usize,
}

impl Traversal {
    /// Creates unpopulated state for a graph of `vertex_count` vertices.
    ///
    /// # Panics
    ///
    /// Panics if a source vertex is outside `0..vertex_count`; traversal
    /// queries fail fast on caller errors rather than validating per access.
    fn new(vertex_count: usize, sources: &[usize]) -> Self {
        let mut is_source = vec![false; vertex_count];
        for &source in sources {
            is_source[source] = true;
        }
        Traversal {
            marked: vec![false; vertex_count],
            edge_to: vec![None; vertex_count],
            is_source,
            sources: sources.to_vec(),
            count: 0,
        }
    }

    /// Returns `true` if `v` was reached from the source set.
    #[must_use]
    pub fn marked(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Returns the source set this traversal started from.
    #[must_use]
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    /// Returns the number of disjoint components reached from the source set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Reconstructs the traversal-tree path from a source to `v`, in
    /// source-to-target order. Returns `None` if `v` was not reached.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        if !self.marked[v] {
            return None;
        }

        let mut path = vec![v];
        let mut current = v;
        while !self.is_source[current] {
            match self.edge_to[current] {
                Some(parent) => {
                    path.push(parent);
                    current = parent;
                }
                // Marked non-sources always have a parent
                None => return None,
            }
        }
        path.reverse();
        Some(path)
    }

    /// Returns every vertex reached from the source set, in ascending order.
    #[must_use]
    pub fn reachable(&self) -> Vec<usize> {
        self.marked
            .iter()
            .enumerate()
            .filter(|(_, &m)| m)
            .map(|(v, _)| v)
            .collect()
    }
}

/// Iterative depth-first traversal from a set of sources.
///
/// Explores from each unvisited source in turn, marking a vertex on entry,
/// recording the discovering vertex as its traversal-tree parent, and
/// descending into unvisited neighbors in adjacency order. The visitation
/// order selected by [`DfsOrder`] is recorded as the traversal runs.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::{DepthFirst, DfsOrder};
/// use gryph::{Graph, Orientation};
///
/// let mut graph = Graph::new(6, Orientation::Undirected);
/// for (v, w) in [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)] {
///     graph.add_edge(v, w);
/// }
///
/// let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Pre);
/// assert_eq!(dfs.reachable(), vec![0, 1, 2, 3, 4, 5]);
/// assert_eq!(dfs.path_to(5), Some(vec![0, 1, 2, 3, 4, 5]));
/// ```
#[derive(Debug)]
pub struct DepthFirst {
    state: Traversal,
    order: Vec<usize>,
    kind: DfsOrder,
}

impl DepthFirst {
    /// Runs a depth-first traversal from every unvisited source, in the order
    /// given.
    ///
    /// # Panics
    ///
    /// Panics if a source vertex is outside `0..V`.
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), sources = sources.len()))]
    pub fn new<G: Adjacent>(graph: &G, sources: &[usize], order: DfsOrder) -> Self {
        let mut dfs = DepthFirst {
            state: Traversal::new(graph.vertex_count(), sources),
            order: Vec::new(),
            kind: order,
        };

        for &source in sources {
            if !dfs.state.marked[source] {
                dfs.explore(graph, source);
                dfs.state.count += 1;
            }
        }

        // Exit-order pushes reversed in one step instead of per element
        if dfs.kind == DfsOrder::ReversePost {
            dfs.order.reverse();
        }
        dfs
    }

    /// Exhausts one component, depth-first, from an unvisited source.
    ///
    /// Each stack frame is a vertex plus the cursor into its adjacency; a
    /// frame is popped only once the cursor is exhausted, which is exactly
    /// the moment the recursive formulation would return.
    fn explore<G: Adjacent>(&mut self, graph: &G, source: usize) {
        self.state.marked[source] = true;
        if self.kind == DfsOrder::Pre {
            self.order.push(source);
        }

        let mut stack = vec![(source, graph.neighbors(source))];
        loop {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let v = frame.0;
            let advanced = frame.1.next();

            match advanced {
                Some(w) if !self.state.marked[w] => {
                    self.state.marked[w] = true;
                    self.state.edge_to[w] = Some(v);
                    if self.kind == DfsOrder::Pre {
                        self.order.push(w);
                    }
                    stack.push((w, graph.neighbors(w)));
                }
                Some(_) => {}
                None => {
                    if self.kind != DfsOrder::Pre {
                        self.order.push(v);
                    }
                    stack.pop();
                }
            }
        }
    }

    /// Returns the recorded visitation order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Consumes the traversal, returning the recorded visitation order.
    #[must_use]
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Returns `true` if `v` was reached from the source set.
    #[must_use]
    pub fn marked(&self, v: usize) -> bool {
        self.state.marked(v)
    }

    /// Returns the number of disjoint components reached from the source set.
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.count()
    }

    /// Reconstructs the traversal-tree path from a source to `v`.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.state.path_to(v)
    }

    /// Returns every vertex reached from the source set, in ascending order.
    #[must_use]
    pub fn reachable(&self) -> Vec<usize> {
        self.state.reachable()
    }

    /// Returns the underlying traversal state.
    #[must_use]
    pub fn traversal(&self) -> &Traversal {
        &self.state
    }
}

/// Multi-source breadth-first traversal.
///
/// All sources are seeded at level 0 simultaneously; vertices are then
/// discovered in order of increasing distance from the nearest source. The
/// traversal-tree path from any reached vertex back to its nearest source has
/// the minimum number of edges among all paths to any source.
///
/// # Examples
///
/// ```rust
/// use gryph::analysis::BreadthFirst;
/// use gryph::{Graph, Orientation};
///
/// let mut graph = Graph::new(4, Orientation::Undirected);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// graph.add_edge(2, 3);
/// graph.add_edge(0, 3);
///
/// let bfs = BreadthFirst::new(&graph, &[0]);
/// // The direct edge wins over the two-hop route
/// assert_eq!(bfs.path_to(3), Some(vec![0, 3]));
/// ```
#[derive(Debug)]
pub struct BreadthFirst {
    state: Traversal,
}

impl BreadthFirst {
    /// Runs a breadth-first traversal seeded at every source simultaneously.
    ///
    /// # Panics
    ///
    /// Panics if a source vertex is outside `0..V`.
    #[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count(), sources = sources.len()))]
    pub fn new<G: Adjacent>(graph: &G, sources: &[usize]) -> Self {
        let mut state = Traversal::new(graph.vertex_count(), sources);
        let mut queue = VecDeque::new();

        for &source in sources {
            if !state.marked[source] {
                state.marked[source] = true;
                queue.push_back(source);
            }
        }

        while let Some(v) = queue.pop_front() {
            for w in graph.neighbors(v) {
                if !state.marked[w] {
                    state.marked[w] = true;
                    state.edge_to[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }

        BreadthFirst { state }
    }

    /// Returns `true` if `v` was reached from the source set.
    #[must_use]
    pub fn marked(&self, v: usize) -> bool {
        self.state.marked(v)
    }

    /// Reconstructs the edge-minimal path from the nearest source to `v`.
    #[must_use]
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.state.path_to(v)
    }

    /// Returns every vertex reached from the source set, in ascending order.
    #[must_use]
    pub fn reachable(&self) -> Vec<usize> {
        self.state.reachable()
    }

    /// Returns the source set this traversal started from.
    #[must_use]
    pub fn sources(&self) -> &[usize] {
        self.state.sources()
    }

    /// Returns the underlying traversal state.
    #[must_use]
    pub fn traversal(&self) -> &Traversal {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, Orientation};

    fn path_graph(vertices: usize) -> Graph {
        let mut graph = Graph::new(vertices, Orientation::Undirected);
        for v in 0..vertices - 1 {
            graph.add_edge(v, v + 1);
        }
        graph
    }

    fn diamond() -> Graph {
        // 0 -> 1 -> 3, 0 -> 2 -> 3
        let mut graph = Graph::new(4, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(0, 2);
        graph.add_edge(1, 3);
        graph.add_edge(2, 3);
        graph
    }

    #[test]
    fn test_dfs_visits_reachable_set() {
        let graph = path_graph(6);
        let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Pre);

        assert_eq!(dfs.reachable(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(dfs.path_to(5), Some(vec![0, 1, 2, 3, 4, 5]));
        assert_eq!(dfs.count(), 1);
    }

    #[test]
    fn test_dfs_unreached_vertex() {
        let mut graph = Graph::new(3, Orientation::Directed);
        graph.add_edge(0, 1);

        let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Pre);
        assert!(!dfs.marked(2));
        assert_eq!(dfs.path_to(2), None);
    }

    #[test]
    fn test_dfs_pre_order_linear() {
        let mut graph = Graph::new(3, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);

        let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Pre);
        assert_eq!(dfs.order(), &[0, 1, 2]);
    }

    #[test]
    fn test_dfs_post_order_linear() {
        let mut graph = Graph::new(3, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);

        let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Post);
        assert_eq!(dfs.order(), &[2, 1, 0]);
    }

    #[test]
    fn test_dfs_reverse_post_order_linear() {
        let mut graph = Graph::new(3, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);

        let dfs = DepthFirst::new(&graph, &[0], DfsOrder::ReversePost);
        assert_eq!(dfs.order(), &[0, 1, 2]);
    }

    #[test]
    fn test_dfs_diamond_orders() {
        let graph = diamond();

        let pre = DepthFirst::new(&graph, &[0], DfsOrder::Pre);
        assert_eq!(pre.order(), &[0, 1, 3, 2]);

        let post = DepthFirst::new(&graph, &[0], DfsOrder::Post);
        assert_eq!(post.order(), &[3, 1, 2, 0]);

        let reverse = DepthFirst::new(&graph, &[0], DfsOrder::ReversePost);
        assert_eq!(reverse.order(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_dfs_counts_components() {
        let mut graph = Graph::new(5, Orientation::Undirected);
        graph.add_edge(0, 1);
        graph.add_edge(2, 3);

        let all: Vec<usize> = (0..5).collect();
        let dfs = DepthFirst::new(&graph, &all, DfsOrder::Pre);
        assert_eq!(dfs.count(), 3);
    }

    #[test]
    fn test_dfs_multi_source_marks_union() {
        let mut graph = Graph::new(6, Orientation::Undirected);
        graph.add_edge(0, 1);
        graph.add_edge(3, 4);

        let dfs = DepthFirst::new(&graph, &[0, 3], DfsOrder::Pre);
        assert_eq!(dfs.reachable(), vec![0, 1, 3, 4]);
        assert_eq!(dfs.count(), 2);
    }

    #[test]
    fn test_dfs_cycle_terminates() {
        let mut graph = Graph::new(3, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 0);

        let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Pre);
        assert_eq!(dfs.order(), &[0, 1, 2]);
    }

    #[test]
    fn test_dfs_self_loop_and_parallel_edges() {
        let mut graph = Graph::new(2, Orientation::Undirected);
        graph.add_edge(0, 0);
        graph.add_edge(0, 1);
        graph.add_edge(0, 1);

        let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Pre);
        assert_eq!(dfs.order(), &[0, 1]);
    }

    #[test]
    fn test_dfs_deep_path_does_not_overflow() {
        // A recursion-based traversal would exhaust the call stack here
        let graph = path_graph(200_000);
        let dfs = DepthFirst::new(&graph, &[0], DfsOrder::Post);
        assert_eq!(dfs.order().len(), 200_000);
        assert_eq!(dfs.order()[0], 199_999);
    }

    #[test]
    fn test_bfs_shortest_path() {
        let mut graph = Graph::new(5, Orientation::Undirected);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        graph.add_edge(0, 4);

        let bfs = BreadthFirst::new(&graph, &[0]);
        assert_eq!(bfs.path_to(4), Some(vec![0, 4]));
        assert_eq!(bfs.path_to(2), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_bfs_multi_source_nearest() {
        let graph = path_graph(7);
        let bfs = BreadthFirst::new(&graph, &[0, 6]);

        // Vertex 5 is one hop from source 6 and five from source 0
        assert_eq!(bfs.path_to(5), Some(vec![6, 5]));
        assert_eq!(bfs.path_to(1), Some(vec![0, 1]));
    }

    #[test]
    fn test_bfs_visited_equals_reachable() {
        let mut graph = Graph::new(6, Orientation::Directed);
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(4, 5);

        let bfs = BreadthFirst::new(&graph, &[0]);
        assert_eq!(bfs.reachable(), vec![0, 1, 2]);
    }

    #[test]
    fn test_bfs_source_path_is_itself() {
        let graph = path_graph(3);
        let bfs = BreadthFirst::new(&graph, &[1]);
        assert_eq!(bfs.path_to(1), Some(vec![1]));
    }

    #[test]
    fn test_bfs_duplicate_sources() {
        let graph = path_graph(3);
        let bfs = BreadthFirst::new(&graph, &[0, 0, 0]);
        assert_eq!(bfs.reachable(), vec![0, 1, 2]);
    }
}

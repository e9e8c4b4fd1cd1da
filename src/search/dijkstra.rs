use log::warn;
use num_traits::Zero;
use std::hash::Hash;

use super::astar::weighted_search;
use super::{reverse_path, Edge, FxIndexMap};

/// Distances and shortest-path tree produced by [dijkstra] and [dijkstra_until].
///
/// A state that is absent was never reached. After a full [dijkstra] every
/// recorded distance is final. After an early exit the distances of states that
/// were discovered but not yet expanded are only upper bounds.
#[derive(Clone, Debug)]
pub struct ShortestPaths<N, C> {
    nodes: FxIndexMap<N, (usize, C)>,
    target: Option<usize>,
}

impl<N, C> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy + Ord,
{
    pub(crate) fn new(nodes: FxIndexMap<N, (usize, C)>, target: Option<usize>) -> Self {
        ShortestPaths { nodes, target }
    }

    pub fn distance(&self, node: &N) -> Option<C> {
        self.nodes.get(node).map(|&(_, cost)| cost)
    }

    /// The state preceding `node` on its shortest path. `None` for the source
    /// and for unreached states.
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.nodes
            .get(node)
            .and_then(|&(parent, _)| self.nodes.get_index(parent))
            .map(|(p, _)| p)
    }

    /// The shortest path from the source to `node`, source first.
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        self.nodes
            .get_index_of(node)
            .map(|index| reverse_path(&self.nodes, |&(p, _)| p, index))
    }

    /// The end state an early-exit search stopped at, with its distance.
    pub fn target(&self) -> Option<(&N, C)> {
        self.target
            .and_then(|index| self.nodes.get_index(index))
            .map(|(node, &(_, cost))| (node, cost))
    }

    pub fn target_path(&self) -> Option<Vec<N>> {
        self.target
            .map(|index| reverse_path(&self.nodes, |&(p, _)| p, index))
    }

    /// Among `candidates`, the reached one closest to the source. The first
    /// candidate wins ties.
    pub fn nearest<'a>(&self, candidates: impl IntoIterator<Item = &'a N>) -> Option<(&'a N, C)>
    where
        N: 'a,
    {
        candidates
            .into_iter()
            .filter_map(|node| self.distance(node).map(|d| (node, d)))
            .min_by_key(|&(_, d)| d)
    }

    /// Every reached state with its distance, in discovery order.
    pub fn distances(&self) -> impl Iterator<Item = (&N, C)> + '_ {
        self.nodes.iter().map(|(node, &(_, cost))| (node, cost))
    }

    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_distances(self) -> FxIndexMap<N, C> {
        self.nodes
            .into_iter()
            .map(|(node, (_, cost))| (node, cost))
            .collect()
    }
}

/// Single-source shortest paths to every state reachable from `source`.
/// Edge weights must be non-negative; this is not checked.
pub fn dijkstra<N, C, FN, IN>(source: &N, successors: FN) -> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = Edge<N, C>>,
{
    weighted_search(source, successors, |_| Zero::zero(), |_| false)
}

/// Like [dijkstra], but stops as soon as a state satisfying `is_end` is taken off
/// the queue. That state's distance is minimal among all end states; it is
/// available through [ShortestPaths::target].
pub fn dijkstra_until<N, C, FN, IN, FS>(
    source: &N,
    successors: FN,
    is_end: FS,
) -> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = Edge<N, C>>,
    FS: FnMut(&N) -> bool,
{
    let result = weighted_search(source, successors, |_| Zero::zero(), is_end);
    if result.target.is_none() {
        warn!(
            "No end state reachable; searched all {} reachable states",
            result.len()
        );
    }
    result
}

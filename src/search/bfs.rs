use indexmap::map::Entry::Vacant;
use std::hash::Hash;

use super::{reverse_path, FxIndexMap, NO_PARENT};

/// Lazy breadth-first traversal, created by [bfs].
///
/// States are stored in discovery order, which for a FIFO traversal is also the
/// order they are yielded in, so the map doubles as the queue. A yielded state is
/// only expanded when the next one is requested: dropping the iterator or
/// stopping early never calls `successors` for the last state seen.
pub struct Bfs<N, FN> {
    successors: FN,
    nodes: FxIndexMap<N, (usize, usize)>,
    expanded: usize,
    yielded: usize,
}

/// Breadth-first traversal from `start` over the states produced by
/// `successors`. Every reachable state is yielded exactly once, in order of
/// non-decreasing hop count, starting with `start` itself.
pub fn bfs<N, FN, IN>(start: &N, successors: FN) -> Bfs<N, FN>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    let mut nodes = FxIndexMap::default();
    nodes.insert(start.clone(), (NO_PARENT, 0));
    Bfs {
        successors,
        nodes,
        expanded: 0,
        yielded: 0,
    }
}

/// Like [bfs], but yields every state with the state it was discovered from.
/// The start state comes with `None`.
pub fn bfs_with_parents<N, FN, IN>(start: &N, successors: FN) -> BfsWithParents<N, FN>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    BfsWithParents {
        inner: bfs(start, successors),
    }
}

/// Fewest-hops path from `start` to the first state satisfying `success`,
/// start first.
pub fn bfs_path<N, FN, IN, FS>(start: &N, successors: FN, mut success: FS) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
    FS: FnMut(&N) -> bool,
{
    let mut search = bfs(start, successors);
    let goal = search.by_ref().find(|node| success(node))?;
    search.path_to(&goal)
}

impl<N, FN, IN> Bfs<N, FN>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    fn expand_pending(&mut self) {
        while self.expanded < self.yielded {
            let index = self.expanded;
            self.expanded += 1;
            let successors = {
                let Some((node, &(_, depth))) = self.nodes.get_index(index) else {
                    break;
                };
                ((self.successors)(node), depth + 1)
            };
            let (successors, depth) = successors;
            for next in successors {
                if let Vacant(e) = self.nodes.entry(next) {
                    e.insert((index, depth));
                }
            }
        }
    }

    fn next_index(&mut self) -> Option<usize> {
        self.expand_pending();
        if self.yielded < self.nodes.len() {
            self.yielded += 1;
            Some(self.yielded - 1)
        } else {
            None
        }
    }
}

impl<N, FN> Bfs<N, FN>
where
    N: Eq + Hash + Clone,
{
    /// Hop count from the start to a discovered state. States are discovered one
    /// layer ahead of the iteration.
    pub fn depth(&self, node: &N) -> Option<usize> {
        self.nodes.get(node).map(|&(_, depth)| depth)
    }

    pub fn parent(&self, node: &N) -> Option<&N> {
        self.nodes
            .get(node)
            .and_then(|&(parent, _)| self.nodes.get_index(parent))
            .map(|(p, _)| p)
    }

    /// Fewest-hops path from the start to a discovered state, start first.
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        self.nodes
            .get_index_of(node)
            .map(|index| reverse_path(&self.nodes, |&(p, _)| p, index))
    }

    /// Number of states discovered so far, yielded or still queued.
    pub fn discovered(&self) -> usize {
        self.nodes.len()
    }

    /// Hop counts of every state discovered so far. Exhaust the iterator first
    /// to get the whole reachable set.
    pub fn into_depths(self) -> FxIndexMap<N, usize> {
        self.nodes
            .into_iter()
            .map(|(node, (_, depth))| (node, depth))
            .collect()
    }
}

impl<N, FN, IN> Iterator for Bfs<N, FN>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let index = self.next_index()?;
        self.nodes.get_index(index).map(|(node, _)| node.clone())
    }
}

/// Created by [bfs_with_parents].
pub struct BfsWithParents<N, FN> {
    inner: Bfs<N, FN>,
}

impl<N, FN> BfsWithParents<N, FN> {
    /// The underlying traversal, for depth and path queries.
    pub fn inner(&self) -> &Bfs<N, FN> {
        &self.inner
    }
}

impl<N, FN, IN> Iterator for BfsWithParents<N, FN>
where
    N: Eq + Hash + Clone,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = N>,
{
    type Item = (N, Option<N>);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.inner.next_index()?;
        let nodes = &self.inner.nodes;
        nodes.get_index(index).map(|(node, &(parent, _))| {
            let parent = nodes.get_index(parent).map(|(p, _)| p.clone());
            (node.clone(), parent)
        })
    }
}

//! Searches over implicit graphs. A graph is never materialised: callers hand in a
//! start state and a closure producing the successors of a state on demand.
//!
//! Weighted searches share one priority queue without decrease-key. A state may
//! sit in the heap several times with different costs; entries whose cost exceeds
//! the best cost recorded for their state are skipped when popped.
use fxhash::FxBuildHasher;
use indexmap::{IndexMap, IndexSet};
use std::cmp::Ordering;

pub mod all_paths;
pub mod astar;
pub mod bfs;
pub mod dijkstra;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Marks the parent slot of the start state, which has no predecessor.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// A directed edge to `to` costing `weight`. Weights must not be negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<N, C> {
    pub to: N,
    pub weight: C,
}

impl<N, C> Edge<N, C> {
    pub fn new(to: N, weight: C) -> Edge<N, C> {
        Edge { to, weight }
    }
}

pub(crate) struct SmallestCostHolder<K> {
    pub(crate) estimated_cost: K,
    pub(crate) cost: K,
    pub(crate) index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.cost.eq(&other.cost)
            && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so the comparison is reversed on the estimate.
        // Ties favour the larger cost (closer to a goal), then the state
        // discovered first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => match self.cost.cmp(&other.cost) {
                Ordering::Equal => other.index.cmp(&self.index),
                s => s,
            },
            s => s,
        }
    }
}

/// Follows parent indices from `start` back to the root and returns the states
/// root first.
pub(crate) fn reverse_path<N, V, F>(
    parents: &FxIndexMap<N, V>,
    mut parent: F,
    start: usize,
) -> Vec<N>
where
    N: Clone,
    F: FnMut(&V) -> usize,
{
    let mut i = start;
    let mut path: Vec<N> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

use indexmap::map::Entry::{Occupied, Vacant};
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use super::{Edge, FxIndexMap, FxIndexSet, SmallestCostHolder};

/// Distances plus, for every reached state, the set of all immediate
/// predecessors over every shortest path to it.
#[derive(Clone, Debug)]
pub struct AllShortestPaths<N, C> {
    nodes: FxIndexMap<N, (C, Vec<usize>)>,
}

impl<N, C> AllShortestPaths<N, C>
where
    N: Eq + Hash + Clone,
    C: Copy + Ord,
{
    pub fn distance(&self, node: &N) -> Option<C> {
        self.nodes.get(node).map(|&(cost, _)| cost)
    }

    /// Immediate predecessors of `node` that lie on some shortest path to it.
    pub fn predecessors(&self, node: &N) -> impl Iterator<Item = &N> + '_ {
        self.nodes
            .get(node)
            .into_iter()
            .flat_map(move |(_, preds)| {
                preds
                    .iter()
                    .filter_map(move |&i| self.nodes.get_index(i).map(|(p, _)| p))
            })
    }

    /// Every state lying on at least one shortest path from the source to any of
    /// `targets`, the targets included. Unreached targets contribute nothing.
    pub fn nodes_on_paths<'a>(&self, targets: impl IntoIterator<Item = &'a N>) -> FxIndexSet<N>
    where
        N: 'a,
    {
        let mut seen: FxIndexSet<usize> = FxIndexSet::default();
        let mut stack: Vec<usize> = targets
            .into_iter()
            .filter_map(|t| self.nodes.get_index_of(t))
            .collect();
        while let Some(index) = stack.pop() {
            if !seen.insert(index) {
                continue;
            }
            if let Some((_, (_, preds))) = self.nodes.get_index(index) {
                stack.extend(preds.iter().filter(|p| !seen.contains(*p)));
            }
        }
        seen.into_iter()
            .filter_map(|i| self.nodes.get_index(i).map(|(node, _)| node.clone()))
            .collect()
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

    pub fn distances(&self) -> impl Iterator<Item = (&N, C)> + '_ {
        self.nodes.iter().map(|(node, &(cost, _))| (node, cost))
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
}

/// Dijkstra that keeps every shortest path rather than one of them. A strictly
/// better route to a state replaces its predecessor set; an equally short one
/// joins it. Only strict improvements requeue a state.
///
/// Dense graphs of equal-weight edges can give states large predecessor sets.
pub fn all_shortest_paths<N, C, FN, IN>(source: &N, mut successors: FN) -> AllShortestPaths<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = Edge<N, C>>,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut nodes: FxIndexMap<N, (C, Vec<usize>)> = FxIndexMap::default();
    nodes.insert(source.clone(), (Zero::zero(), Vec::new()));
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(c, _))) = nodes.get_index(index) else {
                continue;
            };
            if cost > c {
                continue;
            }
            successors(node)
        };
        for Edge { to, weight } in successors {
            let new_cost = cost + weight;
            let n = match nodes.entry(to) {
                Vacant(e) => {
                    let n = e.index();
                    e.insert((new_cost, vec![index]));
                    n
                }
                Occupied(mut e) => {
                    let n = e.index();
                    let (best, preds) = e.get_mut();
                    match new_cost.cmp(best) {
                        Ordering::Less => {
                            *best = new_cost;
                            preds.clear();
                            preds.push(index);
                            n
                        }
                        Ordering::Equal => {
                            if !preds.contains(&index) {
                                preds.push(index);
                            }
                            continue;
                        }
                        Ordering::Greater => continue,
                    }
                }
            };
            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!("Computed all shortest paths to {} states", nodes.len());
    AllShortestPaths { nodes }
}

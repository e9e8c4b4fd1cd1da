use indexmap::map::Entry::{Occupied, Vacant};
use log::{debug, warn};
use num_traits::Zero;
use std::collections::BinaryHeap;
use std::hash::Hash;

use super::dijkstra::ShortestPaths;
use super::{Edge, FxIndexMap, SmallestCostHolder, NO_PARENT};

/// Best-first search shared by [astar] and the Dijkstra variants. Stops at the
/// first popped state satisfying `success`, or once the queue drains.
pub(crate) fn weighted_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> ShortestPaths<N, C>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = Edge<N, C>>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut expanded = 0_usize;
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, c))) = parents.get_index(index) else {
                continue;
            };
            // We may have inserted a node several times into the binary heap if we
            // found a better way to access it. Only the best entry is expanded.
            if cost > c {
                continue;
            }
            if success(node) {
                debug!(
                    "Reached end state after expanding {} of {} discovered states",
                    expanded,
                    parents.len()
                );
                return ShortestPaths::new(parents, Some(index));
            }
            expanded += 1;
            successors(node)
        };
        for Edge { to, weight } in successors {
            let new_cost = cost + weight;
            let h; // heuristic(&to)
            let n; // index for to
            match parents.entry(to) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!(
        "Search exhausted after expanding {} of {} discovered states",
        expanded,
        parents.len()
    );
    ShortestPaths::new(parents, None)
}

/// A* from `start` to the first state satisfying `success`. Returns the path,
/// start first, and its cost. The result is optimal when `heuristic` never
/// overestimates the remaining cost; a zero heuristic turns this into Dijkstra.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    successors: FN,
    heuristic: FH,
    success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = Edge<N, C>>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let result = weighted_search(start, successors, heuristic, success);
    match (result.target_path(), result.target()) {
        (Some(path), Some((_, cost))) => Some((path, cost)),
        _ => {
            warn!("No end state is reachable from the start state");
            None
        }
    }
}

//! Shared machinery of the graph searches: the predecessor map, path reconstruction and a
//! best-first loop in the spirit of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
//! which additionally reports every finalized node.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::{IndexMap, IndexSet};
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
pub type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

struct SmallestCostHolder<K, N> {
    estimated_cost: K,
    cost: K,
    node: N,
    index: usize,
}

impl<K: PartialEq, N: PartialEq> Eq for SmallestCostHolder<K, N> {}

impl<K: PartialEq, N: PartialEq> PartialEq for SmallestCostHolder<K, N> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.node.eq(&other.node)
    }
}

impl<K: Ord, N: Ord> PartialOrd for SmallestCostHolder<K, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, N: Ord> Ord for SmallestCostHolder<K, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first, ties go to the smallest node so that the pop order is
        // fully determined by (estimate, node).
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => other.node.cmp(&self.node),
            s => s,
        }
    }
}

/// Follows the parent indices stored in `parents` from the node at index `end` back to the root
/// and returns the nodes root-first.
pub(crate) fn reverse_path<N, V, F>(
    parents: &FxIndexMap<N, V>,
    mut parent: F,
    end: usize,
) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path = Vec::new();
    let mut ix = end;
    while let Some((node, value)) = parents.get_index(ix) {
        path.push(node.clone());
        ix = parent(value);
    }
    path.reverse();
    path
}

/// Result of [best_first]: the path (root included) and its cost if the goal was finalized,
/// together with every finalized node in finalization order.
pub(crate) type BestFirstOutcome<N, C> = (Option<(Vec<N>, C)>, FxIndexSet<N>);

/// Best-first search ordered on `cost + heuristic`. A node is finalized the first time it is
/// popped; later heap entries for it are stale and skipped. A successor is re-queued only when a
/// strictly cheaper route to it is found.
pub(crate) fn best_first<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> BestFirstOutcome<N, C>
where
    N: Eq + Ord + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        node: start.clone(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero()));
    let mut finalized: FxIndexSet<N> = FxIndexSet::default();

    while let Some(SmallestCostHolder {
        cost, node, index, ..
    }) = to_see.pop()
    {
        if !finalized.insert(node.clone()) {
            continue;
        }
        if success(&node) {
            let path = reverse_path(&parents, |&(p, _)| p, index);
            return (Some((path, cost)), finalized);
        }
        for (successor, move_cost) in successors(&node) {
            let new_cost = cost + move_cost;
            let key = successor.clone();
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
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
                node: key,
                index: n,
            });
        }
    }
    (None, finalized)
}

//! Path reconstruction from predecessor links.

use std::collections::HashMap;
use std::hash::Hash;

/// Path found by a weighted search together with its total weight.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Route<T, W> {
    /// Nodes from start to target, both included.
    pub path: Vec<T>,

    /// Sum of link weights along `path`.
    pub distance: W,
}

/// Work done by a single search.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct SearchStats {
    /// Nodes taken off the queue, stale entries included.
    pub explored: usize,

    /// Entries still queued when the search stopped.
    pub queued: usize,
}

/// Walk `previous` links back from `target` until a node without predecessor
/// (the search start) is reached. Returns the path in start-to-target order.
///
/// `previous` must form a simple chain, which holds for every search in this crate
/// since a predecessor is only replaced on a strictly better cost.
pub(crate) fn reconstruct_path<T: Clone + Eq + Hash>(previous: &HashMap<T, T>, target: &T) -> Vec<T> {
    let mut rev_path = vec![target.clone()];
    let mut cur_id = target;
    while let Some(prev) = previous.get(cur_id) {
        debug_assert!(rev_path.len() <= previous.len(), "Cycle in predecessor links");
        rev_path.push(prev.clone());
        cur_id = prev;
    }

    rev_path.reverse();
    rev_path
}

#[test]
fn test_reconstruct_path() {
    let mut previous = HashMap::new();
    assert_eq!(reconstruct_path(&previous, &"A"), vec!["A"]);

    previous.insert("B", "A");
    previous.insert("D", "B");
    previous.insert("C", "A");
    assert_eq!(reconstruct_path(&previous, &"D"), vec!["A", "B", "D"]);
    assert_eq!(reconstruct_path(&previous, &"C"), vec!["A", "C"]);
    assert_eq!(reconstruct_path(&previous, &"A"), vec!["A"]);
}

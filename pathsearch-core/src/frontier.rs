//! Frontier for the weighted searches.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::numtraits::IntoOrd;

/// Min-priority queue of `(item, priority)` pairs.
///
/// Items are never deduplicated: pushing the same item twice keeps both entries
/// until each is popped. When a node's score improves the old entry stays queued
/// (lazy deletion) and the searches tolerate popping it later.
///
/// Entries with equal priority are popped in insertion order.
pub struct Frontier<T, P: IntoOrd> {
    heap: BinaryHeap<Entry<T, P>>,

    /// Insertion counter, breaks ties between equal priorities.
    seq: u64,
}

struct Entry<T, P: IntoOrd> {
    rank: (P::Output, u64),
    item: T,
    priority: P,
}

impl<T, P: IntoOrd> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl<T, P: IntoOrd> Eq for Entry<T, P> {}

impl<T, P: IntoOrd> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: IntoOrd> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed, so the max-heap yields the lowest (priority, seq) first
        other.rank.cmp(&self.rank)
    }
}

impl<T, P: IntoOrd + Copy> Frontier<T, P> {
    /// Create new empty instance.
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Insert an item with associated priority into the queue.
    pub fn push(&mut self, item: T, priority: P) {
        let rank = (priority.into_ord(), self.seq);
        self.seq += 1;
        self.heap.push(Entry { rank, item, priority });
    }

    /// Extract the item with the least priority from the queue.
    /// The earliest pushed one wins among equal priorities.
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap.pop().map(|Entry { item, priority, .. }| (item, priority))
    }

    /// `true` if no entries are queued, stale ones included.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, stale ones included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, P: IntoOrd + Copy> Default for Frontier<T, P> {
    fn default() -> Self {
        Frontier::new()
    }
}

#[test]
fn test_push_pop() {
    let mut f = Frontier::new();
    assert_eq!(f.pop(), None);
    assert!(f.is_empty());

    f.push("N", 1.0);
    assert!(!f.is_empty());
    assert_eq!(f.pop(), Some(("N", 1.0)));
    assert_eq!(f.pop(), None);

    f.push("A", 1.0);
    f.push("B", 2.0);
    assert_eq!(f.pop(), Some(("A", 1.0)));
    assert_eq!(f.pop(), Some(("B", 2.0)));
    assert_eq!(f.pop(), None);

    f.push("X", 2.0);
    f.push("Y", 1.0);
    assert_eq!(f.pop(), Some(("Y", 1.0)));
    assert_eq!(f.pop(), Some(("X", 2.0)));
    assert_eq!(f.pop(), None);
    assert!(f.is_empty());
}

#[test]
fn test_equal_priorities_fifo() {
    let mut f = Frontier::new();
    f.push("C", 5_u32);
    f.push("A", 3);
    f.push("B", 3);
    f.push("D", 3);
    f.push("E", 0);
    assert_eq!(f.pop(), Some(("E", 0)));
    assert_eq!(f.pop(), Some(("A", 3)));
    assert_eq!(f.pop(), Some(("B", 3)));
    assert_eq!(f.pop(), Some(("D", 3)));
    assert_eq!(f.pop(), Some(("C", 5)));
    assert_eq!(f.pop(), None);
}

#[test]
fn test_duplicates_kept() {
    let mut f = Frontier::new();
    f.push("A", 4.0);
    f.push("B", 3.0);
    f.push("A", 2.0);
    assert_eq!(f.len(), 3);
    assert_eq!(f.pop(), Some(("A", 2.0)));
    assert_eq!(f.pop(), Some(("B", 3.0)));
    // The stale entry is still there
    assert_eq!(f.pop(), Some(("A", 4.0)));
    assert!(f.is_empty());
}

#[test]
fn test_interleaved() {
    let mut f = Frontier::new();
    f.push(1, 10_i64);
    f.push(2, -5);
    assert_eq!(f.pop(), Some((2, -5)));
    f.push(3, 7);
    f.push(4, 10);
    assert_eq!(f.pop(), Some((3, 7)));
    assert_eq!(f.pop(), Some((1, 10)));
    f.push(5, 10);
    assert_eq!(f.pop(), Some((4, 10)));
    assert_eq!(f.pop(), Some((5, 10)));
    assert_eq!(f.len(), 0);
}

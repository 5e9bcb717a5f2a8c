//! Min-priority frontier used by the search engine.
//!
//! Entries are popped by ascending `(priority, node)`; equal priorities fall
//! back to the node's row-major ordering so every run is reproducible.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mazetrace_core::Point;

/// A node waiting in the frontier with its priority key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) priority: i32,
    pub(crate) node: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap of [`Entry`] values.
///
/// A node may sit in the frontier several times with different keys; the
/// engine discards the stale copies when they surface.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<Entry>>,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, priority: i32, node: Point) {
        self.heap.push(Reverse(Entry { priority, node }));
    }

    /// Pop the entry with the lowest priority (ties: smallest node).
    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new();
        f.push(5, Point::new(0, 0));
        f.push(1, Point::new(1, 1));
        f.push(3, Point::new(2, 2));
        assert_eq!(f.len(), 3);
        assert_eq!(f.pop().map(|e| e.priority), Some(1));
        assert_eq!(f.pop().map(|e| e.priority), Some(3));
        assert_eq!(f.pop().map(|e| e.priority), Some(5));
        assert!(f.pop().is_none());
        assert_eq!(f.len(), 0);
    }

    #[test]
    fn ties_break_on_node_order() {
        let mut f = Frontier::new();
        f.push(2, Point::new(0, 1));
        f.push(2, Point::new(1, 0));
        f.push(2, Point::new(0, 0));
        let order: Vec<Point> = std::iter::from_fn(|| f.pop().map(|e| e.node)).collect();
        assert_eq!(
            order,
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let mut f = Frontier::new();
        f.push(4, Point::new(1, 1));
        f.push(2, Point::new(1, 1));
        assert_eq!(f.len(), 2);
        assert_eq!(
            f.pop(),
            Some(Entry {
                priority: 2,
                node: Point::new(1, 1),
            })
        );
        assert_eq!(
            f.pop(),
            Some(Entry {
                priority: 4,
                node: Point::new(1, 1),
            })
        );
    }
}

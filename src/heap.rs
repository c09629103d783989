use std::fmt::Debug;

use derivative::Derivative;

use crate::graph::{VertexId, Weight};

/// A `(key, vertex)` pair stored in an [`IndexedMinHeap`].  The heap orders
/// entries by key alone; equality compares both fields.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct HeapEntry<K = Weight> {
    pub key: K,
    pub vertex: VertexId,
}

impl<K> HeapEntry<K> {
    pub fn new(key: K, vertex: VertexId) -> Self {
        Self { key, vertex }
    }
}

/// An array-based binary min-heap of [`HeapEntry`] values.
///
/// There is no decrease-key operation.  Callers that need one push a second
/// entry for the same vertex with the smaller key and discard the superseded
/// entry when it is eventually popped.  This costs O(E log E) over a whole
/// graph search instead of O(E + V log V).
#[derive(Derivative)]
#[derivative(
    Clone(bound = "K: Clone"),
    Debug(bound = "K: Debug"),
    Default(bound = "")
)]
pub struct IndexedMinHeap<K = Weight> {
    entries: Vec<HeapEntry<K>>,
}

impl<K: Ord> IndexedMinHeap<K> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry with the smallest key without removing it.
    pub fn peek(&self) -> Option<&HeapEntry<K>> {
        self.entries.first()
    }

    pub fn push(&mut self, key: K, vertex: VertexId) {
        self.entries.push(HeapEntry::new(key, vertex));
        self.sift_up(self.entries.len() - 1);
    }

    /// Removes and returns the entry with the smallest key, or `None` if the
    /// heap is empty.  Ties are broken arbitrarily.
    pub fn pop(&mut self) -> Option<HeapEntry<K>> {
        let last = self.entries.len().checked_sub(1)?;
        self.entries.swap(0, last);
        let root = self.entries.pop();
        self.sift_down(0);
        root
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.entries[i].key < self.entries[j].key
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.entries.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.entries.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| !self.less(i, (i - 1) / 2))
    }
}

impl<K: Ord> Extend<(K, VertexId)> for IndexedMinHeap<K> {
    fn extend<T: IntoIterator<Item = (K, VertexId)>>(&mut self, iter: T) {
        for (key, vertex) in iter {
            self.push(key, vertex);
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn test_pop_returns_minimum() {
        let mut heap = IndexedMinHeap::new();
        heap.extend([(5, 0), (3, 1), (8, 2), (1, 3), (4, 4)]);
        let popped: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.key, e.vertex))
            .collect();
        assert_eq!(popped, vec![(1, 3), (3, 1), (4, 4), (5, 0), (8, 2)]);
    }

    #[test]
    fn test_pop_empty() {
        let mut heap = IndexedMinHeap::<Weight>::new();
        assert!(heap.pop().is_none());
        assert!(heap.peek().is_none());
    }

    #[test]
    fn test_duplicate_vertices_are_kept() {
        let mut heap = IndexedMinHeap::new();
        heap.push(10, 7);
        heap.push(2, 7);
        assert_eq!(heap.len(), 2);
        let first = heap.pop().unwrap();
        assert_eq!((first.key, first.vertex), (2, 7));
        let second = heap.pop().unwrap();
        assert_eq!((second.key, second.vertex), (10, 7));
    }

    #[test]
    fn test_entries_with_equal_keys_are_distinct() {
        assert_ne!(HeapEntry::new(3, 0), HeapEntry::new(3, 9));
        assert_eq!(HeapEntry::new(3, 9), HeapEntry::new(3, 9));

        // Ordering ignores the vertex: a smaller key wins over a smaller id.
        let mut heap = IndexedMinHeap::default();
        heap.push(3, 0);
        heap.push(2, 9);
        heap.push(3, 4);
        assert_eq!(heap.pop(), Some(HeapEntry::new(2, 9)));
        let mut rest: Vec<_> = std::iter::from_fn(|| heap.pop()).collect();
        rest.sort_by_key(|e| e.vertex);
        assert_eq!(rest, vec![HeapEntry::new(3, 0), HeapEntry::new(3, 4)]);
    }

    #[test]
    fn test_peek() {
        let mut heap = IndexedMinHeap::with_capacity(4);
        heap.push(4, 1);
        heap.push(-2, 5);
        assert_eq!(heap.peek().map(|e| e.vertex), Some(5));
        assert_eq!(heap.len(), 2);
    }

    /// Interleaves pushes (`Some`) and pops (`None`), checking every pop
    /// against the minimum of a plain vector holding the same keys.
    #[quickcheck]
    fn prop_pop_returns_minimum(ops: Vec<Option<i16>>) -> TestResult {
        let mut heap = IndexedMinHeap::new();
        let mut model: Vec<i16> = Vec::new();
        for (i, op) in ops.into_iter().enumerate() {
            match op {
                Some(key) => {
                    heap.push(key, i);
                    model.push(key);
                }
                None => {
                    let expected = model.iter().copied().min();
                    let actual = heap.pop().map(|e| e.key);
                    if expected != actual {
                        return TestResult::failed();
                    }
                    if let Some(min) = expected {
                        let pos = model.iter().position(|&k| k == min).unwrap();
                        model.swap_remove(pos);
                    }
                }
            }
            if !heap.is_heap() {
                return TestResult::failed();
            }
        }
        TestResult::passed()
    }
}

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;
use core::slice;
use crate::comparator::{Comparator, NaturalOrder};

/// The one predicate that separates a min-heap from a max-heap.
///
/// `order(parent, child)` must hold for every parent/child pair of the heap.
pub trait HeapOrder {
    fn order<T, C: Comparator<T>>(comparator: &C, parent: &T, child: &T) -> bool;
}

/// Root is the smallest element.
#[derive(Copy, Clone, Debug, Default)]
pub struct MinOrder;

/// Root is the largest element.
#[derive(Copy, Clone, Debug, Default)]
pub struct MaxOrder;

impl HeapOrder for MinOrder {
    fn order<T, C: Comparator<T>>(comparator: &C, parent: &T, child: &T) -> bool {
        comparator.less_than_or_equal(parent, child)
    }
}

impl HeapOrder for MaxOrder {
    fn order<T, C: Comparator<T>>(comparator: &C, parent: &T, child: &T) -> bool {
        comparator.greater_than_or_equal(parent, child)
    }
}


pub type MinHeap<T, C = NaturalOrder> = BinaryHeap<T, C, MinOrder>;
pub type MaxHeap<T, C = NaturalOrder> = BinaryHeap<T, C, MaxOrder>;

/// Array-backed binary heap ordered by a `Comparator`.
///
/// The tree is implicit: the root lives at index 0 and the children of `i`
/// live at `2i + 1` and `2i + 2`. Every structural decision is made by
/// `P::order` on top of the comparator, so min and max heaps share all code.
///
/// Equal elements are not kept in insertion order.
///
/// Sifting only ever swaps two slots, so if the comparator panics half way
/// the backing array still holds every remaining element exactly once.
pub struct BinaryHeap<T, C = NaturalOrder, P = MinOrder> {
    data: Vec<T>,
    comparator: C,
    _order: PhantomData<P>,
}


impl<T: PartialOrd> BinaryHeap<T, NaturalOrder, MinOrder> {
    /// Empty min-heap in natural order.
    pub fn new_min() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: PartialOrd> BinaryHeap<T, NaturalOrder, MaxOrder> {
    /// Empty max-heap in natural order.
    pub fn new_max() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C, MinOrder> {
    pub fn min_by(comparator: C) -> Self {
        Self::with_comparator(comparator)
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C, MaxOrder> {
    pub fn max_by(comparator: C) -> Self {
        Self::with_comparator(comparator)
    }
}

impl<T, C: Comparator<T>, P: HeapOrder> BinaryHeap<T, C, P> {
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            comparator,
            _order: PhantomData,
        }
    }

    /// Builds a heap out of an unordered vector in O(n).
    ///
    /// Every non-leaf is sifted down, starting from the last one and moving
    /// towards the root.
    pub fn heapify(data: Vec<T>, comparator: C) -> Self {
        let mut heap = Self {
            data,
            comparator,
            _order: PhantomData,
        };
        let size = heap.data.len();
        trace!("heapify: {} items", size);
        for idx in (0..size / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    fn order(&self, i: usize, j: usize) -> bool {
        P::order(&self.comparator, &self.data[i], &self.data[j])
    }

    fn sift_up(&mut self, mut cur: usize) {
        // swap while the parent is out of order with the current element
        while cur > 0 {
            let p = parent(cur);
            if self.order(p, cur) {
                break;
            }
            self.data.swap(cur, p);
            cur = p;
        }
    }

    fn sift_down(&mut self, mut cur: usize) {
        let size = self.data.len();
        loop {
            let l = lchild(cur);
            let r = rchild(cur);
            if l >= size {
                break;
            }

            // The child that has to become the parent; ties go left.
            let next = if r < size && !self.order(l, r) { r } else { l };

            if self.order(cur, next) {
                break;
            }
            self.data.swap(cur, next);
            cur = next;
        }
    }

    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the root, or returns `None` if the heap is empty.
    pub fn extract_root(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // Move the tail element to the root position, then sift it down
        let result = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(result)
    }

    /// The root without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Linear scan using the comparator's notion of equality.
    pub fn contains(&self, item: &T) -> bool {
        self.data.iter().any(|x| self.comparator.equal(x, item))
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The backing array in heap layout.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates in heap layout, not in sorted order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the backing array in heap layout.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Drains the heap root by root: ascending for a min-heap, descending for
    /// a max-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.extract_root() {
            sorted.push(item);
        }
        sorted
    }

    /// Same as `into_sorted_vec` but drains a copy and leaves `self` alone.
    pub fn to_sorted_vec(&self) -> Vec<T>
    where
        T: Clone,
        C: Clone,
    {
        self.clone().into_sorted_vec()
    }
}


impl<T: Clone, C: Clone, P> Clone for BinaryHeap<T, C, P> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            comparator: self.comparator.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, C, P> fmt::Debug for BinaryHeap<T, C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: PartialOrd, P: HeapOrder> Default for BinaryHeap<T, NaturalOrder, P> {
    fn default() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<T: PartialOrd, P: HeapOrder> From<Vec<T>> for BinaryHeap<T, NaturalOrder, P> {
    fn from(data: Vec<T>) -> Self {
        Self::heapify(data, NaturalOrder)
    }
}

impl<T: PartialOrd, P: HeapOrder> core::iter::FromIterator<T> for BinaryHeap<T, NaturalOrder, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::heapify(iter.into_iter().collect(), NaturalOrder)
    }
}

impl<T, C: Comparator<T>, P: HeapOrder> Extend<T> for BinaryHeap<T, C, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}


fn parent(idx: usize) -> usize {
    (idx - 1) / 2
}

fn lchild(idx: usize) -> usize {
    2 * idx + 1
}

fn rchild(idx: usize) -> usize {
    2 * idx + 2
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{comparing, reverse_order};
    use core::cell::Cell;
    use std::panic::{self, AssertUnwindSafe};

    fn assert_heap_order<T, C: Comparator<T>, P: HeapOrder>(heap: &BinaryHeap<T, C, P>) {
        let data = heap.as_slice();
        for i in 1..data.len() {
            assert!(
                P::order(heap.comparator(), &data[parent(i)], &data[i]),
                "heap order broken at index {}",
                i
            );
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct SchedBlock {
        id: usize,
        priority: u32,
    }

    #[test]
    fn index_arithmetic() {
        assert_eq!(lchild(0), 1);
        assert_eq!(rchild(0), 2);
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(parent(6), 2);
    }

    #[test]
    fn min_heap_extracts_ascending() {
        let mut heap = BinaryHeap::new_min();
        for x in vec![5, 3, 8, 1] {
            heap.insert(x);
            assert_heap_order(&heap);
        }
        assert_eq!(heap.peek(), Some(&1));

        let mut out = Vec::new();
        while let Some(x) = heap.extract_root() {
            assert_heap_order(&heap);
            out.push(x);
        }
        assert_eq!(out, vec![1, 3, 5, 8]);
    }

    #[test]
    fn max_heap_extracts_descending() {
        let mut heap = BinaryHeap::new_max();
        heap.extend(vec![5, 3, 8, 1]);
        assert_eq!(heap.peek(), Some(&8));
        assert_eq!(heap.into_sorted_vec(), vec![8, 5, 3, 1]);
    }

    #[test]
    fn empty_heap_returns_none() {
        let mut heap: MinHeap<i32> = BinaryHeap::new_min();
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.extract_root(), None);
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        let mut heap: MaxHeap<i32> = BinaryHeap::new_max();
        assert_eq!(heap.extract_root(), None);
        assert_eq!(heap.peek(), None);
    }

    #[test]
    fn single_item() {
        let mut heap = BinaryHeap::new_max();
        heap.insert("only");
        assert_eq!(heap.extract_root(), Some("only"));
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn records_by_priority() {
        let mut heap = BinaryHeap::min_by(comparing(|b: &SchedBlock| b.priority));
        for (id, priority) in vec![4, 2, 9, 1].into_iter().enumerate() {
            heap.insert(SchedBlock { id, priority });
        }
        assert_heap_order(&heap);

        let ids: Vec<usize> = heap.into_sorted_vec().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![3, 1, 0, 2]);
    }

    #[test]
    fn min_heap_with_reverse_comparator_acts_as_max_heap() {
        let mut heap = BinaryHeap::min_by(reverse_order());
        heap.extend(vec![2, 7, 4, 9, 1]);
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.into_sorted_vec(), vec![9, 7, 4, 2, 1]);
    }

    #[test]
    fn size_accounting() {
        let mut heap = BinaryHeap::new_min();
        for x in 0..10 {
            heap.insert(10 - x);
        }
        for _ in 0..4 {
            heap.extract_root();
        }
        assert_eq!(heap.len(), 6);
        assert_eq!(heap.peek(), Some(&5));
    }

    #[test]
    fn peek_is_idempotent() {
        let heap: MaxHeap<i32> = vec![3, 1, 4, 1, 5].into();
        assert_eq!(heap.peek(), Some(&5));
        assert_eq!(heap.peek(), Some(&5));
        assert_eq!(heap.len(), 5);
    }

    #[test]
    fn heapify_builds_valid_heap() {
        let min: MinHeap<i32> = BinaryHeap::heapify(vec![9, 4, 7, 1, 8, 2, 6, 3, 5], NaturalOrder);
        assert_heap_order(&min);
        assert_eq!(min.peek(), Some(&1));

        let max: MaxHeap<i32> = vec![9, 4, 7, 1, 8, 2, 6, 3, 5].into_iter().collect();
        assert_heap_order(&max);
        assert_eq!(max.peek(), Some(&9));
        assert_eq!(max.into_sorted_vec(), vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn sift_down_prefers_left_child_on_tie() {
        let mut heap = BinaryHeap::min_by(comparing(|b: &SchedBlock| b.priority));
        heap.insert(SchedBlock { id: 0, priority: 1 });
        heap.insert(SchedBlock { id: 1, priority: 5 });
        heap.insert(SchedBlock { id: 2, priority: 5 });
        heap.insert(SchedBlock { id: 3, priority: 9 });

        assert_eq!(heap.extract_root().map(|b| b.id), Some(0));
        // 9 was moved to the root and swapped with the left of two equal children
        assert_eq!(heap.as_slice()[0].id, 1);
        assert_eq!(heap.as_slice()[1].id, 3);
    }

    #[test]
    fn to_sorted_vec_keeps_heap() {
        let heap: MinHeap<i32> = vec![3, 1, 2].into();
        assert_eq!(heap.to_sorted_vec(), vec![1, 2, 3]);
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Some(&1));
    }

    #[test]
    fn contains_and_clear() {
        let mut heap: MaxHeap<i32> = vec![3, 1, 2].into();
        assert!(heap.contains(&2));
        assert!(!heap.contains(&4));
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(format!("{:?}", heap), "[]");
    }

    #[test]
    fn comparator_panic_keeps_every_item() {
        let calls = Cell::new(0usize);
        let fail_at = Cell::new(usize::MAX);
        let mut heap = BinaryHeap::min_by(|a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            if calls.get() == fail_at.get() {
                panic!("comparator failed");
            }
            a.cmp(b)
        });
        heap.extend(vec![9, 4, 7, 1, 8, 2, 6, 3, 5]);

        // 0 climbs three levels; fail on the second comparison of the climb
        fail_at.set(calls.get() + 2);
        let result = panic::catch_unwind(AssertUnwindSafe(|| heap.insert(0)));
        assert!(result.is_err());
        assert_eq!(heap.len(), 10);
        let mut items = heap.as_slice().to_vec();
        items.sort();
        assert_eq!(items, (0..10).collect::<Vec<_>>());

        let root = *heap.peek().unwrap();
        fail_at.set(calls.get() + 2);
        let result = panic::catch_unwind(AssertUnwindSafe(|| heap.extract_root()));
        assert!(result.is_err());
        assert_eq!(heap.len(), 9);
        let mut items = heap.as_slice().to_vec();
        items.sort();
        let expected: Vec<i32> = (0..10).filter(|&x| x != root).collect();
        assert_eq!(items, expected);

        // order may be off after the unwinds, but the heap still drains cleanly
        fail_at.set(usize::MAX);
        let mut drained = heap.into_sorted_vec();
        drained.sort();
        assert_eq!(drained, expected);
    }
}

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::mem;
use crate::comparator::Comparator;
use crate::heap::{BinaryHeap, MinOrder};

/// Sorts `items` in place, ascending per `comparator`.
///
/// Median-of-three pivot with a three-way partition; not stable. Recursion
/// only follows the smaller side, so stack depth stays logarithmic.
pub fn quick_sort<T, C>(items: &mut [T], comparator: &C)
where
    C: Comparator<T>,
{
    trace!("quick_sort: {} items", items.len());
    sort_range(items, comparator);
}

fn sort_range<T, C: Comparator<T>>(mut items: &mut [T], comparator: &C) {
    while items.len() > 1 {
        let (lt, gt) = partition(items, comparator);
        let (left, rest) = mem::take(&mut items).split_at_mut(lt);
        let right = &mut rest[gt - lt..];
        if left.len() < right.len() {
            sort_range(left, comparator);
            items = right;
        } else {
            sort_range(right, comparator);
            items = left;
        }
    }
}

/// Index of the median of the first, middle and last items.
fn median_of_three<T, C: Comparator<T>>(items: &[T], comparator: &C) -> usize {
    let (first, mid, last) = (0, items.len() / 2, items.len() - 1);
    let (lo, hi) = if comparator.less_than(&items[mid], &items[first]) {
        (mid, first)
    } else {
        (first, mid)
    };
    if comparator.less_than(&items[last], &items[lo]) {
        lo
    } else if comparator.less_than(&items[hi], &items[last]) {
        hi
    } else {
        last
    }
}

/// Splits `items` into `[..lt]` less than the pivot, `[lt..gt]` equal to it
/// and `[gt..]` greater, returning `(lt, gt)`.
fn partition<T, C: Comparator<T>>(items: &mut [T], comparator: &C) -> (usize, usize) {
    let pivot = median_of_three(items, comparator);
    items.swap(0, pivot);

    // items[lt] always holds a pivot-equal item while lt < i
    let (mut lt, mut i, mut gt) = (0, 1, items.len());
    while i < gt {
        match comparator.compare(&items[i], &items[lt]) {
            Ordering::Less => {
                items.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                items.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

/// Heapifies `items` into a min-heap and drains it, ascending per `comparator`.
pub fn heap_sort<T, C>(items: Vec<T>, comparator: C) -> Vec<T>
where
    C: Comparator<T>,
{
    trace!("heap_sort: {} items", items.len());
    BinaryHeap::<T, C, MinOrder>::heapify(items, comparator).into_sorted_vec()
}

use crate::comparator::Comparator;

/// Bisects `sorted` for an item equal to `seek`.
///
/// `sorted` must be ordered by `comparator`. Returns the index of a match, or
/// `None` when nothing compares equal.
pub fn binary_search<T, C>(sorted: &[T], seek: &T, comparator: &C) -> Option<usize>
where
    C: Comparator<T>,
{
    let mut start = 0;
    let mut end = sorted.len();

    // half-open window [start, end)
    while start < end {
        let mid = start + (end - start) / 2;
        if comparator.equal(&sorted[mid], seek) {
            return Some(mid);
        }
        if comparator.less_than(&sorted[mid], seek) {
            start = mid + 1;
        } else {
            end = mid;
        }
    }
    None
}

//! Preparing input for [`Tree::from_sorted`][crate::Tree::from_sorted].
//!
//! Balanced construction needs a strictly ascending sequence. [`dedup_sort`]
//! turns any sequence into one with a merge sort that drops duplicates while
//! merging.

use std::cmp::Ordering;

/// Returns the distinct elements of `input` in strictly ascending order.
///
/// Empty and single element inputs are returned as-is. Otherwise the input is
/// split at its midpoint, each half is sorted recursively and the two runs are
/// merged by repeatedly taking the smaller head. On ties the element from the
/// left run is kept and the right one is dropped.
///
/// # Examples
///
/// ```
/// use ordered_tree::dedup_sort;
///
/// let sorted = dedup_sort(vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 6345, 324]);
/// assert_eq!(sorted, vec![1, 3, 4, 5, 7, 8, 9, 23, 67, 324, 6345]);
/// ```
pub fn dedup_sort<T>(mut input: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    if input.len() <= 1 {
        return input;
    }

    let right = input.split_off(input.len() / 2);
    merge(dedup_sort(input), dedup_sort(right))
}

/// Merges two strictly ascending runs into one strictly ascending run.
fn merge<T>(left: Vec<T>, right: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    let mut merged: Vec<T> = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let next = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => match l.cmp(r) {
                Ordering::Less | Ordering::Equal => left.next(),
                Ordering::Greater => right.next(),
            },
            (Some(_), None) => left.next(),
            (None, Some(_)) => right.next(),
            (None, None) => break,
        };

        if let Some(value) = next {
            // Both runs are already unique, so a duplicate can only ever be
            // the element we pushed last.
            if merged.last() != Some(&value) {
                merged.push(value);
            }
        }
    }

    merged
}

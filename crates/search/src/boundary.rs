use std::ops::Range;

use crate::midpoint;

/// Number of elements strictly less than `key`.
pub fn left_boundary<T: Ord>(seq: &[T], key: &T) -> usize {
    let mut low = 0usize;
    let mut high = seq.len();
    while low < high {
        let mid = midpoint(low, high);
        if seq[mid] < *key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Number of elements less than or equal to `key`.
pub fn right_boundary<T: Ord>(seq: &[T], key: &T) -> usize {
    let mut low = 0usize;
    let mut high = seq.len();
    while low < high {
        let mid = midpoint(low, high);
        if seq[mid] > *key {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    low
}

pub fn count_occurrences<T: Ord>(seq: &[T], key: &T) -> usize {
    right_boundary(seq, key) - left_boundary(seq, key)
}

pub fn equal_range<T: Ord>(seq: &[T], key: &T) -> Range<usize> {
    let left = left_boundary(seq, key);
    // Everything before `left` is already known to be < key.
    let right = left + right_boundary(&seq[left..], key);
    left..right
}

use std::cmp::Ordering;
use std::ops::Range;

use crate::midpoint;

pub fn binary_search<T: Ord>(seq: &[T], key: &T) -> Option<usize> {
    let mut low = 0usize;
    let mut high = seq.len();
    while low < high {
        let mid = midpoint(low, high);
        match seq[mid].cmp(key) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

pub fn binary_search_recursive<T: Ord>(seq: &[T], key: &T) -> Option<usize> {
    binary_search_in(seq, key, 0..seq.len())
}

/// Recursive search restricted to `range`. Returns `None` for an inverted or
/// out-of-bounds range rather than panicking.
pub fn binary_search_in<T: Ord>(seq: &[T], key: &T, range: Range<usize>) -> Option<usize> {
    if range.end > seq.len() {
        return None;
    }
    search_recursive(seq, key, range.start, range.end)
}

fn search_recursive<T: Ord>(seq: &[T], key: &T, low: usize, high: usize) -> Option<usize> {
    if low >= high {
        return None;
    }
    let mid = midpoint(low, high);
    match seq[mid].cmp(key) {
        Ordering::Greater => search_recursive(seq, key, low, mid),
        Ordering::Less => search_recursive(seq, key, mid + 1, high),
        Ordering::Equal => Some(mid),
    }
}

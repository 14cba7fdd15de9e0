//! Searching over slices.
//!
//! Everything except [`linear_scan`], [`rotate_left`] and [`search_rotated`]
//! expects the input sorted ascending. That is not checked; an unsorted slice
//! gives an unspecified (but memory-safe) answer.

mod binary;
mod boundary;
mod dedup;
mod linear;
mod rotated;

pub use binary::{binary_search, binary_search_in, binary_search_recursive};
pub use boundary::{count_occurrences, equal_range, left_boundary, right_boundary};
pub use dedup::dedup_sorted;
pub use linear::linear_scan;
pub use rotated::{rotate_left, search_rotated};

/// Point-search variants that answer "where is `key`?".
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SearchAlgorithm {
    LinearScan,
    BinaryIterative,
    BinaryRecursive,
}

pub const ALL_ALGORITHMS: [SearchAlgorithm; 3] = [
    SearchAlgorithm::LinearScan,
    SearchAlgorithm::BinaryIterative,
    SearchAlgorithm::BinaryRecursive,
];

pub fn all_algorithms() -> &'static [SearchAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SearchAlgorithm) -> &'static str {
    match algo {
        SearchAlgorithm::LinearScan => "linear_scan",
        SearchAlgorithm::BinaryIterative => "binary_iterative",
        SearchAlgorithm::BinaryRecursive => "binary_recursive",
    }
}

pub fn requires_sorted(algo: SearchAlgorithm) -> bool {
    !matches!(algo, SearchAlgorithm::LinearScan)
}

pub fn search<T: Ord>(algo: SearchAlgorithm, seq: &[T], key: &T) -> Option<usize> {
    match algo {
        SearchAlgorithm::LinearScan => linear_scan(seq, key),
        SearchAlgorithm::BinaryIterative => binary_search(seq, key),
        SearchAlgorithm::BinaryRecursive => binary_search_recursive(seq, key),
    }
}

/// `low + (high - low) / 2`; never forms `low + high`.
#[inline(always)]
pub(crate) fn midpoint(low: usize, high: usize) -> usize {
    debug_assert!(low <= high);
    low + ((high - low) >> 1)
}

mod extremes;
mod kth;

pub use extremes::{maximum, min_max, minimum};
pub use kth::{kth_largest, select_kth_largest};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MinMax<T> {
    pub min: T,
    pub max: T,
}

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub insertion_threshold: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    insertion_threshold: 16,
};

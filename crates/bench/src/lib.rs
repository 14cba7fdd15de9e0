use std::ops::RangeInclusive;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks a preset by input length: small up to 4096, medium up to 65536.
pub fn apply_runtime_config_for_size<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    size: usize,
) {
    if size <= 4_096 {
        apply_small_runtime_config(group);
    } else if size <= 65_536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

pub fn random_values<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(rng.random_range(range.clone()));
    }
    values
}

pub fn random_sorted_values<R: Rng + ?Sized>(
    rng: &mut R,
    len: usize,
    range: RangeInclusive<i64>,
) -> Vec<i64> {
    let mut values = random_values(rng, len, range);
    values.sort_unstable();
    values
}

/// Keys drawn from `[min - 1, max + 1]` of `sorted`, so roughly half miss
/// when the values are sparse.
pub fn random_queries<R: Rng + ?Sized>(rng: &mut R, sorted: &[i64], count: usize) -> Vec<i64> {
    let (Some(&first), Some(&last)) = (sorted.first(), sorted.last()) else {
        return vec![0; count];
    };
    let lo = first.saturating_sub(1);
    let hi = last.saturating_add(1);
    let mut queries = Vec::with_capacity(count);
    for _ in 0..count {
        if rng.random_bool(0.5) {
            queries.push(sorted[rng.random_range(0..sorted.len())]);
        } else {
            queries.push(rng.random_range(lo..=hi));
        }
    }
    queries
}

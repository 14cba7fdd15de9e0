use crate::MinMax;

pub fn minimum<T: Ord>(seq: &[T]) -> Option<&T> {
    let (first, rest) = seq.split_first()?;
    let mut min = first;
    for value in rest {
        if value < min {
            min = value;
        }
    }
    Some(min)
}

pub fn maximum<T: Ord>(seq: &[T]) -> Option<&T> {
    let (first, rest) = seq.split_first()?;
    let mut max = first;
    for value in rest {
        if value > max {
            max = value;
        }
    }
    Some(max)
}

/// Minimum and maximum in at most `3 * ceil(n / 2)` comparisons.
///
/// Both are seeded with `seq[0]`. Pairing starts at `len % 2`, so an odd
/// length skips the seed and an even length pairs it with `seq[1]`.
pub fn min_max<T: Ord>(seq: &[T]) -> Option<MinMax<&T>> {
    let first = seq.first()?;
    let mut min = first;
    let mut max = first;

    let start = seq.len() % 2;
    for pair in seq[start..].chunks_exact(2) {
        let (small, large) = if pair[0] > pair[1] {
            (&pair[1], &pair[0])
        } else {
            (&pair[0], &pair[1])
        };
        if large > max {
            max = large;
        }
        if small < min {
            min = small;
        }
    }

    Some(MinMax { min, max })
}

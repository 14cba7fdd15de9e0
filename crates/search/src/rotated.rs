use crate::midpoint;

pub fn rotate_left<T>(seq: &mut [T], d: usize) {
    let len = seq.len();
    if len == 0 {
        return;
    }
    let d = d % len;
    if d == 0 {
        return;
    }
    reverse_range(seq, 0, d);
    reverse_range(seq, d, len);
    reverse_range(seq, 0, len);
}

fn reverse_range<T>(seq: &mut [T], mut start: usize, mut end: usize) {
    while start + 1 < end {
        end -= 1;
        seq.swap(start, end);
        start += 1;
    }
}

/// Search in an ascending sequence rotated left by an unknown amount.
///
/// Runs in O(log n) when elements are distinct. Runs of equal values at both
/// ends of the window hide which half is sorted; those are trimmed one step
/// at a time, so heavy duplication degrades towards O(n).
pub fn search_rotated<T: Ord>(seq: &[T], key: &T) -> Option<usize> {
    let mut low = 0usize;
    let mut high = seq.len();
    while low < high {
        let mid = midpoint(low, high);
        if seq[mid] == *key {
            return Some(mid);
        }
        let last = high - 1;

        if seq[low] == seq[mid] && seq[mid] == seq[last] {
            low += 1;
            high -= 1;
            continue;
        }

        if seq[low] <= seq[mid] {
            // [low, mid] is ascending.
            if seq[low] <= *key && *key < seq[mid] {
                high = mid;
            } else {
                low = mid + 1;
            }
        } else if seq[mid] < *key && *key <= seq[last] {
            // (mid, last] is ascending.
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    None
}

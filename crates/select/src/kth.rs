use std::cmp::Ordering;

use crate::TUNED_PARAMS;

/// Sort-based reference: clones and sorts, O(n log n).
pub fn kth_largest<T: Ord + Clone>(seq: &[T], k: usize) -> Option<T> {
    let len = seq.len();
    if k == 0 || k > len {
        return None;
    }
    let mut sorted = seq.to_vec();
    sorted.sort_unstable();
    Some(sorted[len - k].clone())
}

/// Quickselect for the `k`-th largest (1-based). Permutes `seq`.
pub fn select_kth_largest<T: Ord>(seq: &mut [T], k: usize) -> Option<&T> {
    let len = seq.len();
    if k == 0 || k > len {
        return None;
    }
    let index = select_nth(seq, len - k);
    Some(&seq[index])
}

/// Moves the element of ascending rank `nth` to a position it can be read
/// from and returns that position.
fn select_nth<T: Ord>(seq: &mut [T], nth: usize) -> usize {
    let mut low = 0usize;
    let mut high = seq.len();

    while high - low > TUNED_PARAMS.insertion_threshold {
        let pivot = median3_index(seq, low, high);
        let (lt, gt) = partition_3way(&mut seq[low..high], pivot - low);
        let lt = low + lt;
        let gt = low + gt;
        if nth < lt {
            high = lt;
        } else if nth >= gt {
            low = gt;
        } else {
            return nth;
        }
    }

    insertion_sort(&mut seq[low..high]);
    nth
}

fn median3_index<T: Ord>(seq: &[T], low: usize, high: usize) -> usize {
    let a = low;
    let b = low + ((high - low) >> 1);
    let c = high - 1;
    if seq[a] < seq[b] {
        if seq[b] < seq[c] {
            b
        } else if seq[a] < seq[c] {
            c
        } else {
            a
        }
    } else if seq[a] < seq[c] {
        a
    } else if seq[b] < seq[c] {
        c
    } else {
        b
    }
}

/// Dutch-flag partition around `data[pivot]`. Returns `(lt, gt)` with
/// `data[..lt] < p`, `data[lt..gt] == p`, `data[gt..] > p`.
fn partition_3way<T: Ord>(data: &mut [T], pivot: usize) -> (usize, usize) {
    data.swap(0, pivot);
    let mut lt = 0usize;
    let mut i = 1usize;
    let mut gt = data.len();
    // The pivot value travels with the swaps; `lt` always indexes a copy of it.
    while i < gt {
        match data[i].cmp(&data[lt]) {
            Ordering::Less => {
                data.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                data.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}

fn insertion_sort<T: Ord>(data: &mut [T]) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && data[j - 1] > data[j] {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

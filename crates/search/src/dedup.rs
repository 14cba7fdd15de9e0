/// Compacts a sorted slice so its first `n` elements are the distinct values
/// in their original order, and returns `n`. The tail holds the removed
/// duplicates in unspecified order.
pub fn dedup_sorted<T: Ord>(seq: &mut [T]) -> usize {
    if seq.is_empty() {
        return 0;
    }
    let mut write = 1usize;
    for read in 1..seq.len() {
        if seq[read] != seq[write - 1] {
            seq.swap(write, read);
            write += 1;
        }
    }
    write
}

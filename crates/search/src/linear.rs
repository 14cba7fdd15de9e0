pub fn linear_scan<T: PartialEq>(seq: &[T], key: &T) -> Option<usize> {
    for (i, value) in seq.iter().enumerate() {
        if value == key {
            return Some(i);
        }
    }
    None
}

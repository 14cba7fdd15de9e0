//! Singly linked lists of `i64` built from `Option<Box<ListNode>>`.
//!
//! Functions that only read a list take `Option<&ListNode>` (use
//! `head.as_deref()`); functions that build a list return a freshly allocated
//! chain that shares nothing with its inputs.

mod node;
mod ops;

pub use node::{Iter, ListNode, from_values, iter, len, to_vec};
pub use ops::{add_numbers, reverse, reverse_in_place};

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn digits_of(mut n: u128) -> Vec<i64> {
        let mut digits = Vec::new();
        while n > 0 {
            digits.push((n % 10) as i64);
            n /= 10;
        }
        digits
    }

    fn value_of(digits: &[i64]) -> u128 {
        digits
            .iter()
            .rev()
            .fold(0_u128, |acc, &d| acc * 10 + d as u128)
    }

    #[test]
    fn from_values_round_trips() {
        for values in [vec![], vec![1], vec![1, 2, 3, 4, 5], vec![-3, 0, 3]] {
            let list = from_values(&values);
            assert_eq!(to_vec(list.as_deref()), values);
            assert_eq!(len(list.as_deref()), values.len());
        }
    }

    #[test]
    fn reverse_known_case() {
        let list = from_values(&[1, 2, 3, 4, 5]);
        let reversed = reverse(list.as_deref());
        assert_eq!(to_vec(reversed.as_deref()), [5, 4, 3, 2, 1]);
        // The source list is untouched.
        assert_eq!(to_vec(list.as_deref()), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn reverse_keeps_every_node() {
        for n in 0..16 {
            let values: Vec<i64> = (1..=n).collect();
            let reversed = reverse(from_values(&values).as_deref());
            assert_eq!(len(reversed.as_deref()), values.len());
            let mut expected = values.clone();
            expected.reverse();
            assert_eq!(to_vec(reversed.as_deref()), expected);
        }
        assert_eq!(reverse(None), None);
        assert_eq!(to_vec(reverse(Some(&ListNode::new(7))).as_deref()), [7]);
    }

    #[test]
    fn reverse_twice_is_identity() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for len in 0..64 {
            let values: Vec<i64> = (0..len).map(|_| rng.random_range(-100..=100)).collect();
            let list = from_values(&values);
            let twice = reverse(reverse(list.as_deref()).as_deref());
            assert_eq!(twice, list);
        }
    }

    #[test]
    fn reverse_in_place_matches_copy() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for len in 0..64 {
            let values: Vec<i64> = (0..len).map(|_| rng.random_range(-100..=100)).collect();
            let list = from_values(&values);
            let copied = reverse(list.as_deref());
            assert_eq!(reverse_in_place(list), copied);
        }
    }

    #[test]
    fn long_lists_drop_without_recursion() {
        let values: Vec<i64> = (0..1_000_000).collect();
        let list = from_values(&values);
        let reversed = reverse_in_place(list);
        assert_eq!(reversed.as_ref().map(|n| n.value), Some(999_999));
        drop(reversed);
    }

    #[test]
    fn add_numbers_known_cases() {
        let sum = add_numbers(
            from_values(&[2, 4, 3]).as_deref(),
            from_values(&[5, 6, 4]).as_deref(),
        );
        assert_eq!(to_vec(sum.as_deref()), [7, 0, 8]);

        let sum = add_numbers(from_values(&[9, 9]).as_deref(), from_values(&[1]).as_deref());
        assert_eq!(to_vec(sum.as_deref()), [0, 0, 1]);

        let sum = add_numbers(from_values(&[0]).as_deref(), from_values(&[0]).as_deref());
        assert_eq!(to_vec(sum.as_deref()), [0]);

        let sum = add_numbers(None, from_values(&[4, 2]).as_deref());
        assert_eq!(to_vec(sum.as_deref()), [4, 2]);

        assert_eq!(add_numbers(None, None), None);
    }

    #[test]
    fn add_numbers_is_commutative() {
        let a = from_values(&[9, 9, 9, 9]);
        let b = from_values(&[1]);
        assert_eq!(
            add_numbers(a.as_deref(), b.as_deref()),
            add_numbers(b.as_deref(), a.as_deref()),
        );
    }

    #[test]
    fn add_numbers_matches_integer_sum() {
        let mut rng = StdRng::seed_from_u64(0xADD5_2026);
        for _ in 0..500 {
            let x = rng.random::<u64>() as u128;
            let y = rng.random_range(0..=(u32::MAX as u128));
            let sum = add_numbers(
                from_values(&digits_of(x)).as_deref(),
                from_values(&digits_of(y)).as_deref(),
            );
            assert_eq!(value_of(&to_vec(sum.as_deref())), x + y, "x={x} y={y}");
            assert_eq!(to_vec(sum.as_deref()), digits_of(x + y));
        }
    }
}

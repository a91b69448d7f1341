//! The sequential base case: an in-place exchange sort over one segment.

use crate::data_structures::Elem;

/// Sorts the segment with repeated adjacent-swap passes over a shrinking
/// range, stopping as soon as a pass swaps nothing. Returns the number of
/// passes performed: one for input that was already in order, zero for
/// segments too short to need a pass.
pub fn local_sort(v: &mut [Elem]) -> usize {
    let mut passes = 0;
    let mut end = v.len();
    let mut swapped = true;
    while end > 1 && swapped {
        swapped = false;
        for i in 0..end - 1 {
            if v[i] > v[i + 1] {
                v.swap(i, i + 1);
                swapped = true;
            }
        }
        passes += 1;
        end -= 1;
    }
    passes
}

pub fn is_sorted(v: &[Elem]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha12Rng;

    #[test]
    fn sorts_a_descending_run() {
        let mut v: Vec<Elem> = (1..=40).rev().collect();
        local_sort(&mut v);
        assert_eq!(v, (1..=40).collect::<Vec<_>>());
    }

    #[test]
    fn sorted_input_takes_exactly_one_pass() {
        let mut v: Vec<Elem> = (0..100).collect();
        assert_eq!(local_sort(&mut v), 1);
        assert_eq!(v, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn trivial_segments_need_no_pass() {
        let mut empty: Vec<Elem> = vec![];
        assert_eq!(local_sort(&mut empty), 0);

        let mut one = vec![7];
        assert_eq!(local_sort(&mut one), 0);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn matches_std_sort_on_random_input() {
        let mut rng = ChaCha12Rng::seed_from_u64(17);
        for _ in 0..20 {
            let len = rng.gen_range(0..200);
            let mut v: Vec<Elem> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
            let mut expected = v.clone();
            expected.sort();
            local_sort(&mut v);
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn is_sorted_accepts_duplicates() {
        assert!(is_sorted(&[1, 1, 2, 2, 3]));
        assert!(is_sorted(&[]));
        assert!(is_sorted(&[5]));
        assert!(!is_sorted(&[2, 1]));
    }
}

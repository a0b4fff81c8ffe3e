//! Differential tests: bounded engine vs reference engine vs `strsim`.

use super::common::{bounded_distance, input, reference_distance, strsim_distance};
use levscript::{BoundedDistance, DistanceError, MAX_INPUT_SIZE};
use proptest::prelude::*;

proptest! {
    /// Both engines agree wherever the bounded one is defined.
    #[test]
    fn prop_engines_agree(a in input(60), b in input(60)) {
        let expected = reference_distance(&a, &b);
        prop_assert_eq!(bounded_distance(&a, &b), Ok(expected));
        prop_assert_eq!(bounded_distance(&b, &a), Ok(expected));
    }

    /// The reference engine agrees with an independent implementation.
    #[test]
    fn prop_reference_matches_strsim(a in input(40), b in input(40)) {
        prop_assert_eq!(reference_distance(&a, &b), strsim_distance(&a, &b));
    }

    /// Only the shorter side is limited; the longer one can be any length.
    #[test]
    fn prop_long_side_unbounded(short in input(MAX_INPUT_SIZE), extra in 1usize..200) {
        let long: Vec<u8> = short.iter().copied().chain(std::iter::repeat(b'z').take(extra)).collect();
        prop_assert_eq!(bounded_distance(&short, &long), Ok(reference_distance(&short, &long)));
    }

    /// A custom limit declines exactly when the shorter side exceeds it.
    #[test]
    fn prop_custom_limit(a in input(12), b in input(12), limit in 0usize..12) {
        let shorter = a.len().min(b.len());
        let result = BoundedDistance::with_limit(limit).distance(&a, &b);
        if shorter == 0 || shorter <= limit {
            prop_assert_eq!(result, Ok(reference_distance(&a, &b)));
        } else {
            prop_assert_eq!(result, Err(DistanceError::InputTooLarge { shorter_len: shorter, limit }));
        }
    }
}

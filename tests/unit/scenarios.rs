//! Literal scenarios and the fixed test vectors through both engines.

use super::common::{assert_engines_agree, bounded_distance, reference_distance};
use levscript::{distance_bounded, distance_or_sentinel, DistanceError, FIXED_CASES, MAX_INPUT_SIZE};

#[test]
fn test_single_deletion_from_empty_target() {
    assert_eq!(reference_distance(b"a", b""), 1);
    assert_eq!(bounded_distance(b"a", b""), Ok(1));
}

#[test]
fn test_two_replacements() {
    assert_eq!(reference_distance(b"ab", b"cd"), 2);
    assert_eq!(bounded_distance(b"ab", b"cd"), Ok(2));
}

#[test]
fn test_single_deletion_in_the_middle() {
    assert_eq!(reference_distance(b"abcdefg", b"abdefg"), 1);
    assert_eq!(bounded_distance(b"abcdefg", b"abdefg"), Ok(1));
}

#[test]
fn test_mixed_edits() {
    assert_eq!(reference_distance(b"abcdefg", b"ABbXdfg"), 4);
    assert_eq!(bounded_distance(b"abcdefg", b"ABbXdfg"), Ok(4));
}

#[test]
fn test_both_empty() {
    assert_eq!(reference_distance(b"", b""), 0);
    assert_eq!(bounded_distance(b"", b""), Ok(0));
}

#[test]
fn test_bounded_declines_101_byte_shorter_input() {
    let a = vec![b'a'; MAX_INPUT_SIZE + 1];
    let b = vec![b'b'; MAX_INPUT_SIZE + 1];
    assert_eq!(
        distance_bounded(&a, &b),
        Err(DistanceError::InputTooLarge {
            shorter_len: 101,
            limit: 100
        })
    );
    assert_eq!(distance_or_sentinel(&a, &b), -1);

    // The reference engine has no such limit
    assert_eq!(reference_distance(&a, &b), MAX_INPUT_SIZE + 1);
}

#[test]
fn test_bounded_accepts_exactly_the_limit() {
    let a = vec![b'a'; MAX_INPUT_SIZE];
    let b = vec![b'a'; MAX_INPUT_SIZE + 1];
    assert_eq!(distance_bounded(&a, &b), Ok(1));
    assert_eq!(distance_or_sentinel(&a, &b), 1);
}

#[test]
fn test_fixed_cases_both_engines_both_orders() {
    for &(a, b, expected) in FIXED_CASES {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        assert_eq!(reference_distance(a, b), expected, "{:?} vs {:?}", a, b);
        assert_eq!(reference_distance(b, a), expected, "{:?} vs {:?}", b, a);
        assert_eq!(bounded_distance(a, b), Ok(expected), "{:?} vs {:?}", a, b);
        assert_eq!(bounded_distance(b, a), Ok(expected), "{:?} vs {:?}", b, a);
    }
}

#[test]
fn test_classic_pairs() {
    let pairs: &[(&[u8], &[u8], usize)] = &[
        (b"kitten", b"sitting", 3),
        (b"flaw", b"lawn", 2),
        (b"intention", b"execution", 5),
        (b"sunday", b"saturday", 3),
        (b"gumbo", b"gambol", 2),
    ];
    for &(a, b, expected) in pairs {
        assert_eq!(reference_distance(a, b), expected);
        assert_engines_agree(a, b);
    }
}

#[test]
fn test_bytes_not_characters() {
    // "é" is two bytes in UTF-8, and only the second differs from "è"
    assert_eq!(reference_distance("é".as_bytes(), "è".as_bytes()), 1);
    assert_eq!(reference_distance("é".as_bytes(), b"e"), 2);
}

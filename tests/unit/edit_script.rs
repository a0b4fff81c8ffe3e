//! Canonical edit scripts for hand-checked pairs.

use super::common::{assert_script_valid, canonical_script};
use levscript::{replay, EditOp, EditScript, ReplayError, Side, FIXED_CASES};

#[test]
fn test_every_fixed_case_replays() {
    for &(a, b, _) in FIXED_CASES {
        assert_script_valid(a.as_bytes(), b.as_bytes());
        assert_script_valid(b.as_bytes(), a.as_bytes());
    }
}

#[test]
fn test_kitten_sitting_script() {
    let script = canonical_script(b"kitten", b"sitting");
    assert_eq!(script.to_string(), "~k>s =i =t =t ~e>i =n +g");
    assert_eq!(script.cost(), 3);
}

#[test]
fn test_pure_insertions_and_deletions() {
    let script = canonical_script(b"", b"abc");
    assert_eq!(script.to_string(), "+a +b +c");

    let script = canonical_script(b"abc", b"");
    assert_eq!(script.to_string(), "-a -b -c");
}

#[test]
fn test_script_accounts_for_every_byte() {
    let (a, b) = (b"abcdefg".as_slice(), b"abdZfAB".as_slice());
    let script = canonical_script(a, b);
    assert_eq!(script.source_len(), a.len());
    assert_eq!(script.target_len(), b.len());
    assert_eq!(script.counts().edits(), 4);
}

#[test]
fn test_script_from_other_pair_does_not_replay() {
    let script = canonical_script(b"abc", b"abd");
    assert!(matches!(
        replay(&script, b"abc", b"abe"),
        Err(ReplayError::ByteMismatch {
            side: Side::Target,
            ..
        })
    ));
}

#[test]
fn test_hand_written_non_canonical_script_replays() {
    // Not what the backtrace would produce, but still a valid transformation
    let script = EditScript::new(vec![
        EditOp::Delete { byte: b'a' },
        EditOp::Insert { byte: b'a' },
    ]);
    assert_eq!(replay(&script, b"a", b"a"), Ok(b"a".to_vec()));
    assert_eq!(script.cost(), 2);
}

//! Scratch state reuse across calls on one engine instance.

use super::common::reference_distance;
use levscript::{BoundedDistance, ReferenceEngine};

#[test]
fn test_reference_engine_shrinking_then_growing_inputs() {
    let mut engine = ReferenceEngine::new();
    let pairs: &[(&[u8], &[u8])] = &[
        (b"abcdefghijklmnop", b"ponmlkjihgfedcba"),
        (b"ab", b"ba"),
        (b"", b"xyz"),
        (b"abcdefghijklmnopqrstuvwxyz", b"abc"),
        (b"q", b""),
    ];

    let mut capacity = 0;
    for &(a, b) in pairs {
        let expected = reference_distance(a, b);
        assert_eq!(engine.distance(a, b, true), expected);
        assert!(engine.matrix().capacity() >= capacity);
        capacity = engine.matrix().capacity();
    }
}

#[test]
fn test_bounded_engine_reused_with_alternating_sizes() {
    let mut engine = BoundedDistance::new();
    for round in 0..20 {
        let len = if round % 2 == 0 { 90 } else { 3 };
        let a: Vec<u8> = (0..len).map(|i| b'a' + (i % 4) as u8).collect();
        let b: Vec<u8> = (0..len).map(|i| b'a' + ((i + round) % 4) as u8).collect();
        assert_eq!(engine.distance(&a, &b), Ok(reference_distance(&a, &b)));
    }
}

#[test]
fn test_one_engine_per_thread() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                let mut engine = ReferenceEngine::new();
                let a = vec![b'a' + t as u8; 30];
                let b = vec![b'a'; 30 + t];
                engine.distance(&a, &b, true)
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let expected = if t == 0 { 0 } else { 30 + t };
        assert_eq!(handle.join().unwrap(), expected);
    }
}

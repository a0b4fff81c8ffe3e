//! Metric properties of edit distance.

use super::common::{input, reference_distance};
use proptest::prelude::*;

proptest! {
    /// d(s, s) = 0
    #[test]
    fn prop_identity(s in input(40)) {
        prop_assert_eq!(reference_distance(&s, &s), 0);
    }

    /// d(a, b) = d(b, a)
    #[test]
    fn prop_symmetry(a in input(30), b in input(30)) {
        prop_assert_eq!(reference_distance(&a, &b), reference_distance(&b, &a));
    }

    /// d(a, b) ≤ d(a, c) + d(c, b)
    #[test]
    fn prop_triangle_inequality(a in input(20), b in input(20), c in input(20)) {
        let d_ab = reference_distance(&a, &b);
        let d_ac = reference_distance(&a, &c);
        let d_cb = reference_distance(&c, &b);
        prop_assert!(d_ab <= d_ac + d_cb, "Triangle inequality violated: {} > {} + {}", d_ab, d_ac, d_cb);
    }

    /// d("", s) = d(s, "") = |s|
    #[test]
    fn prop_empty_side(s in input(60)) {
        prop_assert_eq!(reference_distance(b"", &s), s.len());
        prop_assert_eq!(reference_distance(&s, b""), s.len());
    }

    /// |d(a, b) - d(a, c)| ≤ d(b, c)
    #[test]
    fn prop_lipschitz(a in input(20), b in input(20), c in input(20)) {
        let d_ab = reference_distance(&a, &b);
        let d_ac = reference_distance(&a, &c);
        let d_bc = reference_distance(&b, &c);
        prop_assert!(d_ab.abs_diff(d_ac) <= d_bc, "|{} - {}| > {}", d_ab, d_ac, d_bc);
    }

    /// ||a| - |b|| ≤ d(a, b) ≤ max(|a|, |b|)
    #[test]
    fn prop_length_bounds(a in input(30), b in input(30)) {
        let d = reference_distance(&a, &b);
        prop_assert!(a.len().abs_diff(b.len()) <= d);
        prop_assert!(d <= a.len().max(b.len()));
    }
}

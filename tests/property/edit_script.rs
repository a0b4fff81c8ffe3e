//! Every canonical edit script replays A into B at minimal cost.

use super::common::{canonical_script, input, reference_distance};
use levscript::{replay, EditOp, ReferenceEngine};
use proptest::prelude::*;

proptest! {
    /// replay(script(a, b), a) = b
    #[test]
    fn prop_script_replays_to_target(a in input(40), b in input(40)) {
        let script = canonical_script(&a, &b);
        prop_assert_eq!(replay(&script, &a, &b), Ok(b.clone()));
    }

    /// cost(script(a, b)) = d(a, b)
    #[test]
    fn prop_script_cost_is_distance(a in input(40), b in input(40)) {
        prop_assert_eq!(canonical_script(&a, &b).cost(), reference_distance(&a, &b));
    }

    /// Every byte of both inputs appears exactly once.
    #[test]
    fn prop_script_covers_both_inputs(a in input(40), b in input(40)) {
        let script = canonical_script(&a, &b);
        let source: Vec<u8> = script.iter().filter_map(EditOp::source_byte).collect();
        let target: Vec<u8> = script.iter().filter_map(EditOp::target_byte).collect();
        prop_assert_eq!(source, a);
        prop_assert_eq!(target, b);
    }

    /// A replace never swaps a byte for itself.
    #[test]
    fn prop_no_trivial_replace(a in input(40), b in input(40)) {
        for op in canonical_script(&a, &b).iter() {
            if let EditOp::Replace { removed, inserted } = *op {
                prop_assert_ne!(removed, inserted);
            }
        }
    }

    /// The script depends only on the pair, not on what the engine saw before.
    #[test]
    fn prop_script_independent_of_history(
        warmup in input(50),
        a in input(30),
        b in input(30),
    ) {
        let mut engine = ReferenceEngine::new();
        engine.distance(&warmup, &a, false);
        prop_assert_eq!(engine.edit_script(&a, &b), canonical_script(&a, &b));
    }

    /// Self-check never fires on engine-produced scripts.
    #[test]
    fn prop_verify_never_panics(a in input(50), b in input(50)) {
        let mut engine = ReferenceEngine::new();
        let plain = engine.distance(&a, &b, false);
        prop_assert_eq!(engine.distance(&a, &b, true), plain);
    }
}

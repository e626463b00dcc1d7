// crates/domain/tests/classification_properties.rs
use bbcheck_domain::design::{boundary_values, partitions};
use bbcheck_domain::{AgeCategory, LED_THRESHOLD, ThresholdGate, classify, threshold_state};
use bbcheck_domain::classification::{AGE_RANGES, age_table};
use proptest::prelude::*;

proptest! {
    #[test]
    fn negative_values_are_invalid(v in i64::MIN..0) {
        prop_assert_eq!(classify(v), AgeCategory::Invalid);
    }

    #[test]
    fn values_above_max_bound_are_invalid(v in 121_i64..=i64::MAX) {
        prop_assert_eq!(classify(v), AgeCategory::Invalid);
    }

    #[test]
    fn classify_is_idempotent(v in any::<i64>()) {
        prop_assert_eq!(classify(v), classify(v));
    }

    #[test]
    fn const_lookup_matches_table_lookup(v in -1_000_i64..1_000) {
        prop_assert_eq!(classify(v), *age_table().category_for(v));
    }

    #[test]
    fn gate_matches_strict_comparison(v in any::<i64>(), t in any::<i64>()) {
        let gate = ThresholdGate::new(t);
        prop_assert_eq!(gate.is_on(v), v > t);
        prop_assert_eq!(gate.state(v), gate.state(v));
    }
}

#[test]
fn adjacent_boundaries_change_category() {
    for pair in AGE_RANGES.windows(2) {
        let hi = pair[0].bound.upper();
        assert_ne!(classify(hi), classify(hi + 1), "boundary at {hi}");
    }
    assert_ne!(classify(-1), classify(0));
    assert_ne!(classify(120), classify(121));
}

#[test]
fn led_threshold_edges() {
    assert!(!threshold_state(LED_THRESHOLD));
    assert!(threshold_state(LED_THRESHOLD + 1));
}

#[test]
fn boundary_probes_include_every_bound() {
    let probes = boundary_values(&age_table());
    for entry in AGE_RANGES {
        assert!(probes.iter().any(|p| p.value == entry.bound.lower()));
        assert!(probes.iter().any(|p| p.value == entry.bound.upper()));
    }
}

#[test]
fn partitions_tile_the_whole_domain() {
    let parts = partitions(&age_table());
    assert_eq!(parts.first().map(|p| p.span.lower()), Some(i64::MIN));
    assert_eq!(parts.last().map(|p| p.span.upper()), Some(i64::MAX));
    for pair in parts.windows(2) {
        assert_eq!(pair[0].span.above(), Some(pair[1].span.lower()));
    }
}

use archetype_core::{Indicator, IndicatorCategory, PatternScore, PatternType};
use proptest::prelude::*;

fn arb_pattern() -> impl Strategy<Value = PatternType> {
    prop::sample::select(PatternType::ALL.to_vec())
}

// ── Lenient pattern parsing ──────────────────────────────────────────────

proptest! {
    #[test]
    fn parse_accepts_any_casing_of_the_wire_name(
        pattern in arb_pattern(),
        upper in prop::collection::vec(any::<bool>(), 20),
    ) {
        let mixed: String = pattern
            .name()
            .chars()
            .zip(upper.iter().cycle())
            .map(|(c, &u)| if u { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
            .collect();
        prop_assert_eq!(PatternType::parse_str(&mixed), Some(pattern));
    }
}

// ── Strongest indicators ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn strongest_indicators_are_bounded_and_sorted(
        weights in prop::collection::vec(0.1f64..1.0, 0..12),
        limit in 0usize..5,
    ) {
        let score = PatternScore {
            matched_indicators: weights
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    Indicator::new(PatternType::Rag, format!("kw{i}"), w, IndicatorCategory::Secondary)
                })
                .collect(),
            ..PatternScore::zero(PatternType::Rag)
        };
        let top = score.strongest_indicators(limit);
        prop_assert_eq!(top.len(), limit.min(weights.len()));
        for pair in top.windows(2) {
            prop_assert!(pair[0].weight >= pair[1].weight);
        }
    }
}

use archetype_core::{PatternScore, PatternType};
use archetype_engine::recommendation::confidence;
use archetype_engine::scoring::ranking;
use archetype_engine::{PatternScorer, RecommendationEngine};
use archetype_lexicon::Lexicon;
use proptest::prelude::*;
use rustc_hash::FxHashSet;

/// Words that hit indicators, vocabulary, or nothing at all.
const WORDS: &[&str] = &[
    "agent", "autonomous", "retrieves", "documents", "knowledge", "base", "crud", "api",
    "workflow", "approval", "batch", "parallel", "json", "schema", "extract", "team",
    "collaborate", "search", "intelligent", "real-time", "user", "dashboard", "slack",
    "email", "the", "and", "with", "zzz", "qqq", "decides", "pipeline", "citations",
];

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 1..16).prop_map(|w| w.join(" "))
}

fn arb_pattern() -> impl Strategy<Value = PatternType> {
    prop::sample::select(PatternType::SCORED.to_vec())
}

// ── Confidence bounds ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn confidence_is_bounded(text in arb_text()) {
        let engine = RecommendationEngine::with_builtin_lexicon().unwrap();
        if let Ok(rec) = engine.recommend(&text, &[]) {
            prop_assert!((0.3..=0.95).contains(&rec.confidence), "{}", rec.confidence);
        }
    }
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_input_gives_identical_output(text in arb_text()) {
        let engine = RecommendationEngine::with_builtin_lexicon().unwrap();
        let a = engine.explain(&text, &[]);
        let b = engine.explain(&text, &[]);
        prop_assert_eq!(a, b);
    }
}

// ── Hybrid exclusivity ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn hybrid_fields_agree(text in arb_text()) {
        let engine = RecommendationEngine::with_builtin_lexicon().unwrap();
        if let Ok(rec) = engine.recommend(&text, &[]) {
            prop_assert_eq!(rec.is_hybrid, rec.secondary.is_some());
            prop_assert_eq!(rec.is_hybrid, rec.hybrid_name.is_some());
            prop_assert_ne!(rec.primary, PatternType::Hybrid);
            if let Some(secondary) = rec.secondary {
                prop_assert_ne!(secondary, rec.primary);
            }
        }
    }
}

// ── Monotonicity ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn adding_a_match_never_lowers_the_score(
        pattern in arb_pattern(),
        mask in prop::collection::vec(any::<bool>(), 32),
        extra in 0usize..32,
        triggered in any::<bool>(),
    ) {
        let lexicon = Lexicon::builtin().unwrap();
        let scorer = PatternScorer::new(&lexicon, None);
        let indicators = lexicon.indicators(pattern);

        let base: FxHashSet<_> = indicators
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(ci, _)| ci.id)
            .collect();
        let mut more = base.clone();
        more.insert(indicators[extra % indicators.len()].id);

        let signals: FxHashSet<_> = if triggered {
            lexicon
                .context_rule(pattern)
                .map(|r| r.triggers.iter().copied().collect())
                .unwrap_or_default()
        } else {
            FxHashSet::default()
        };

        let before = scorer.score_pattern(pattern, &base, &signals);
        let after = scorer.score_pattern(pattern, &more, &signals);
        prop_assert!(after.normalized_score >= before.normalized_score);
        prop_assert!(after.normalized_score <= 1.0);
    }
}

// ── Confidence vs. gap ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn confidence_is_monotone_in_gap(
        second in 0.0f64..1.0,
        gap_a in 0.0f64..1.0,
        gap_b in 0.0f64..1.0,
        k in 0.1f64..4.0,
    ) {
        let (lo, hi) = if gap_a <= gap_b { (gap_a, gap_b) } else { (gap_b, gap_a) };
        prop_assert!(confidence(second + lo, second, k) <= confidence(second + hi, second, k));
    }
}

// ── Tie-break stability ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn ranking_ignores_input_order(
        normalized in prop::collection::vec(prop::sample::select(vec![0.0f64, 0.25, 0.5]), 7),
        rotation in 0usize..7,
    ) {
        let make = || -> Vec<PatternScore> {
            PatternType::SCORED
                .iter()
                .zip(normalized.iter())
                .map(|(&p, &n)| PatternScore {
                    raw_score: n,
                    normalized_score: n,
                    ..PatternScore::zero(p)
                })
                .collect()
        };
        let mut a = make();
        let mut b = make();
        b.rotate_left(rotation);
        b.reverse();
        ranking::rank(&mut a);
        ranking::rank(&mut b);
        let order_a: Vec<_> = a.iter().map(|s| s.pattern).collect();
        let order_b: Vec<_> = b.iter().map(|s| s.pattern).collect();
        prop_assert_eq!(order_a, order_b);
    }
}

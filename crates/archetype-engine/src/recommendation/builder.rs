//! Assembles the final `PatternRecommendation`.

use rustc_hash::FxHashSet;

use archetype_core::constants::{CONFIDENCE_FLOOR, FALLBACK_PATTERN};
use archetype_core::{ComplexityTier, HybridMatch, PatternRecommendation, PatternType};
use archetype_lexicon::Lexicon;

use super::{confidence, rationale};
use crate::scoring::ScoreBoard;
use crate::settings::EngineSettings;

pub struct RecommendationBuilder<'a> {
    lexicon: &'a Lexicon,
    settings: EngineSettings,
}

impl<'a> RecommendationBuilder<'a> {
    pub fn new(lexicon: &'a Lexicon, settings: EngineSettings) -> Self {
        Self { lexicon, settings }
    }

    pub fn build(
        &self,
        board: &ScoreBoard,
        hybrid: Option<&HybridMatch>,
        tier: ComplexityTier,
    ) -> PatternRecommendation {
        if board.fallback {
            return PatternRecommendation {
                primary: FALLBACK_PATTERN,
                secondary: None,
                confidence: CONFIDENCE_FLOOR,
                complexity_tier: tier,
                rationale: rationale::fallback(),
                customizations: self.customizations(&[FALLBACK_PATTERN]),
                is_hybrid: false,
                hybrid_name: None,
            };
        }

        // A hybrid pair leads with its better-ranked member, which need not
        // be the board's top pattern.
        let lead = hybrid
            .and_then(|m| board.get(m.primary))
            .unwrap_or_else(|| board.top());
        let runner_up = board
            .scores
            .iter()
            .find(|s| s.pattern != lead.pattern)
            .map_or(0.0, |s| s.normalized_score);
        let confidence =
            confidence::confidence(lead.normalized_score, runner_up, self.settings.confidence_k);

        let pair = hybrid.and_then(|m| board.get(m.secondary).map(|s| (m, s)));
        let cite = self.settings.rationale_indicators;
        let recommendation = PatternRecommendation {
            primary: lead.pattern,
            secondary: None,
            confidence,
            complexity_tier: tier,
            rationale: rationale::compose(lead, pair, tier, cite),
            customizations: match pair {
                Some((m, _)) => {
                    self.customizations(&[lead.pattern, m.secondary, PatternType::Hybrid])
                }
                None => self.customizations(&[lead.pattern]),
            },
            is_hybrid: false,
            hybrid_name: None,
        };

        match pair {
            Some((m, _)) => recommendation.with_hybrid(m),
            None => recommendation,
        }
    }

    /// Checklist items of `patterns`, in order, without duplicates.
    fn customizations(&self, patterns: &[PatternType]) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut out = Vec::new();
        for &pattern in patterns {
            for item in self.lexicon.customizations(pattern) {
                if seen.insert(item.as_str()) {
                    out.push(item.clone());
                }
            }
        }
        out
    }
}

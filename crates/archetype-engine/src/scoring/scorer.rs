//! Per-pattern scoring against the indicator table.

use rustc_hash::FxHashSet;

use archetype_core::{PatternScore, PatternType, RequirementAnalysis};
use archetype_lexicon::{KeywordId, Lexicon};

use super::ranking;

/// All seven scored patterns, ranked best first.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    pub scores: Vec<PatternScore>,
    /// No indicator matched anything; WORKFLOW leads by default.
    pub fallback: bool,
}

impl ScoreBoard {
    pub fn top(&self) -> &PatternScore {
        &self.scores[0]
    }

    /// The runner-up, if any.
    pub fn second(&self) -> Option<&PatternScore> {
        self.scores.get(1)
    }

    pub fn get(&self, pattern: PatternType) -> Option<&PatternScore> {
        self.scores.iter().find(|s| s.pattern == pattern)
    }
}

/// Scores requirements against one lexicon.
pub struct PatternScorer<'a> {
    lexicon: &'a Lexicon,
    multiplier_override: Option<f64>,
}

impl<'a> PatternScorer<'a> {
    pub fn new(lexicon: &'a Lexicon, multiplier_override: Option<f64>) -> Self {
        Self {
            lexicon,
            multiplier_override,
        }
    }

    /// Score every scored pattern and rank the results.
    pub fn score(&self, analysis: &RequirementAnalysis) -> ScoreBoard {
        let keywords = self.ids(analysis.keywords.iter());
        let signals = self.ids(analysis.complexity_signals.iter());

        let mut scores: Vec<PatternScore> = PatternType::SCORED
            .iter()
            .map(|&p| self.score_pattern(p, &keywords, &signals))
            .collect();
        ranking::rank(&mut scores);

        let fallback = scores.iter().all(PatternScore::is_zero);
        if fallback {
            tracing::warn!(
                keywords = analysis.keywords.len(),
                "no indicator matched; falling back to WORKFLOW"
            );
        }
        ScoreBoard { scores, fallback }
    }

    /// Score one pattern. Exposed for monotonicity checks.
    pub fn score_pattern(
        &self,
        pattern: PatternType,
        keywords: &FxHashSet<KeywordId>,
        signals: &FxHashSet<KeywordId>,
    ) -> PatternScore {
        let boost = self
            .lexicon
            .context_rule(pattern)
            .filter(|rule| rule.triggers.iter().any(|t| signals.contains(t)))
            .map(|rule| rule.effective_multiplier(self.multiplier_override));

        let mut raw = 0.0;
        let mut matched = Vec::new();
        for ci in self.lexicon.indicators(pattern) {
            if !keywords.contains(&ci.id) {
                continue;
            }
            raw += match boost {
                Some(m) if ci.indicator.is_contextual() => ci.indicator.weight * m,
                _ => ci.indicator.weight,
            };
            matched.push(ci.indicator.clone());
        }

        let max = self.lexicon.max_attainable(pattern, self.multiplier_override);
        let mut override_term = None;
        for rule in self.lexicon.overrides().iter().filter(|r| r.pattern == pattern) {
            if let Some(&term) = rule.terms.iter().find(|t| keywords.contains(*t)) {
                raw = f64::max(raw, rule.floor * max);
                override_term.get_or_insert_with(|| self.lexicon.resolve(term).to_string());
            }
        }

        let normalized = if max > 0.0 {
            (raw / max).clamp(0.0, 1.0)
        } else {
            0.0
        };

        PatternScore {
            pattern,
            raw_score: raw,
            normalized_score: normalized,
            matched_indicators: matched,
            override_term,
        }
    }

    /// Interned ids of the given lexicon terms.
    pub fn ids<'s>(&self, terms: impl Iterator<Item = &'s String>) -> FxHashSet<KeywordId> {
        terms.filter_map(|t| self.lexicon.term_id(t)).collect()
    }
}

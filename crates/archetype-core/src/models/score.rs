use serde::{Deserialize, Serialize};

use super::Indicator;
use crate::pattern::PatternType;

/// Score of one pattern for one requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternScore {
    pub pattern: PatternType,
    pub raw_score: f64,
    /// `raw_score` over the pattern's maximum attainable score, in [0, 1].
    pub normalized_score: f64,
    pub matched_indicators: Vec<Indicator>,
    /// The traditional-software term that forced a score floor, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_term: Option<String>,
}

impl PatternScore {
    /// A zero score with no matches.
    pub fn zero(pattern: PatternType) -> Self {
        Self {
            pattern,
            raw_score: 0.0,
            normalized_score: 0.0,
            matched_indicators: Vec::new(),
            override_term: None,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.raw_score <= 0.0
    }

    /// Matched indicators ordered by descending weight, keyword as tie-break.
    pub fn strongest_indicators(&self, limit: usize) -> Vec<&Indicator> {
        let mut sorted: Vec<&Indicator> = self.matched_indicators.iter().collect();
        sorted.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then_with(|| a.keyword.cmp(&b.keyword))
        });
        sorted.truncate(limit);
        sorted
    }
}

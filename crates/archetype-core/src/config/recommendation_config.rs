//! Recommendation builder configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecommendationConfig {
    /// Slope `k` of `confidence = 0.5 + gap * k`. Default: 1.5.
    pub confidence_k: Option<f64>,
    /// How many matched indicators the rationale cites (1..=3). Default: 3.
    pub rationale_indicators: Option<usize>,
}

impl RecommendationConfig {
    /// Returns the effective confidence slope, defaulting to 1.5.
    pub fn effective_confidence_k(&self) -> f64 {
        self.confidence_k.unwrap_or(defaults::DEFAULT_CONFIDENCE_K)
    }

    /// Returns the effective rationale citation count, defaulting to 3.
    pub fn effective_rationale_indicators(&self) -> usize {
        self.rationale_indicators
            .unwrap_or(defaults::DEFAULT_RATIONALE_INDICATORS)
    }
}

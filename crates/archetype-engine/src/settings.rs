//! Tuning knobs resolved from `ArchetypeConfig`.

use serde::{Deserialize, Serialize};

use archetype_core::config::defaults;
use archetype_core::ArchetypeConfig;

/// Resolved engine parameters. Cheap to copy into every call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Replaces every context rule's multiplier when set.
    pub context_multiplier: Option<f64>,
    /// Slope of the confidence curve.
    pub confidence_k: f64,
    /// Matched indicators cited per pattern in the rationale.
    pub rationale_indicators: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            context_multiplier: None,
            confidence_k: defaults::DEFAULT_CONFIDENCE_K,
            rationale_indicators: defaults::DEFAULT_RATIONALE_INDICATORS,
        }
    }
}

impl EngineSettings {
    pub fn from_config(config: &ArchetypeConfig) -> Self {
        Self {
            context_multiplier: config.scoring.multiplier_override(),
            confidence_k: config.recommendation.effective_confidence_k(),
            rationale_indicators: config.recommendation.effective_rationale_indicators(),
        }
    }
}

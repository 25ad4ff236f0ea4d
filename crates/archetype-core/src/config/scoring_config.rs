//! Scorer configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    /// Multiplier for contextual indicators when a trigger signal co-occurs.
    /// Overrides every context rule's own multiplier when set. Must be > 1.0.
    pub context_multiplier: Option<f64>,
}

impl ScoringConfig {
    /// Returns the configured multiplier, if any. `None` means each context
    /// rule keeps the multiplier its lexicon declares.
    pub fn multiplier_override(&self) -> Option<f64> {
        self.context_multiplier
    }
}

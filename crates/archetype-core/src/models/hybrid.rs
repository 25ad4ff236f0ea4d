use serde::{Deserialize, Serialize};

use crate::pattern::PatternType;

/// The combination rule that fired for a requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridMatch {
    /// Combination name, e.g. `intelligent_rag`.
    pub name: String,
    /// The top-ranked pattern of the pair.
    pub primary: PatternType,
    /// The other pattern of the pair.
    pub secondary: PatternType,
    /// `|a - b| / max(a, b)` over the pair's normalized scores.
    pub divergence: f64,
}

use serde::{Deserialize, Serialize};

use super::{ComplexityTier, HybridMatch};
use crate::pattern::PatternType;

/// The final recommendation record, serialized as a flat JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRecommendation {
    #[serde(rename = "primary_pattern")]
    pub primary: PatternType,
    #[serde(rename = "secondary_pattern")]
    pub secondary: Option<PatternType>,
    pub confidence: f64,
    pub complexity_tier: ComplexityTier,
    pub rationale: String,
    pub customizations: Vec<String>,
    pub is_hybrid: bool,
    pub hybrid_name: Option<String>,
}

impl PatternRecommendation {
    /// Attach a hybrid match. Sets `secondary`, `hybrid_name` and `is_hybrid`
    /// together so the three never disagree.
    pub fn with_hybrid(mut self, hybrid: &HybridMatch) -> Self {
        self.secondary = Some(hybrid.secondary);
        self.hybrid_name = Some(hybrid.name.clone());
        self.is_hybrid = true;
        self
    }

    /// The pattern a scaffold generator should use: `HYBRID` for hybrid
    /// recommendations, otherwise the primary.
    pub fn scaffold_pattern(&self) -> PatternType {
        if self.is_hybrid {
            PatternType::Hybrid
        } else {
            self.primary
        }
    }

    /// Serialize to the flat JSON output contract.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

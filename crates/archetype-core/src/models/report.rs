use serde::{Deserialize, Serialize};

use super::{HybridMatch, PatternRecommendation, PatternScore, RequirementAnalysis};

/// Everything one recommendation call computed, for callers that want to
/// explain or audit the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub recommendation: PatternRecommendation,
    pub analysis: RequirementAnalysis,
    /// Every scored pattern, best first.
    pub scores: Vec<PatternScore>,
    pub hybrid: Option<HybridMatch>,
    pub lexicon_version: String,
    /// True when no indicator matched and WORKFLOW was chosen by default.
    pub fallback: bool,
}

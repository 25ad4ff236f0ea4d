//! Value objects produced per recommendation call.

pub mod complexity;
pub mod hybrid;
pub mod indicator;
pub mod recommendation;
pub mod report;
pub mod requirement;
pub mod score;

pub use complexity::ComplexityTier;
pub use hybrid::HybridMatch;
pub use indicator::{Indicator, IndicatorCategory};
pub use recommendation::PatternRecommendation;
pub use report::RecommendationReport;
pub use requirement::RequirementAnalysis;
pub use score::PatternScore;

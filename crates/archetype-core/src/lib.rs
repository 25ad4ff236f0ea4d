//! # archetype-core
//!
//! Foundation crate for the Archetype pattern recommender.
//! Defines the pattern taxonomy, value models, errors, config, constants,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod pattern;
pub mod tracing_setup;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ArchetypeConfig;
pub use errors::{ArchetypeError, ArchetypeResult};
pub use models::{
    ComplexityTier, HybridMatch, Indicator, IndicatorCategory, PatternRecommendation,
    PatternScore, RecommendationReport, RequirementAnalysis,
};
pub use pattern::PatternType;

//! Recommendation assembly: primary/secondary selection, confidence,
//! rationale and customizations.

pub mod builder;
pub mod confidence;
pub mod rationale;

pub use builder::RecommendationBuilder;
pub use confidence::confidence;

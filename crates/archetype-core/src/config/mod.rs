//! Configuration system for Archetype.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod archetype_config;
pub mod defaults;
pub mod lexicon_config;
pub mod observability_config;
pub mod recommendation_config;
pub mod scoring_config;

pub use archetype_config::{ArchetypeConfig, CliOverrides};
pub use lexicon_config::LexiconConfig;
pub use observability_config::ObservabilityConfig;
pub use recommendation_config::RecommendationConfig;
pub use scoring_config::ScoringConfig;

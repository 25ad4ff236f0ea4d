//! # archetype-engine
//!
//! Turns a free-text feature requirement into an architecture pattern
//! recommendation: extract signals, score every pattern against the lexicon,
//! detect hybrids, classify complexity, and assemble the result.
//!
//! ```no_run
//! use archetype_engine::RecommendationEngine;
//!
//! let engine = RecommendationEngine::with_builtin_lexicon()?;
//! let rec = engine.recommend("Simple CRUD API to store user profiles", &[])?;
//! println!("{}", rec.to_json().unwrap_or_default());
//! # Ok::<(), archetype_core::ArchetypeError>(())
//! ```

pub mod complexity;
pub mod engine;
pub mod extraction;
pub mod global;
pub mod hybrid;
pub mod pipeline;
pub mod recommendation;
pub mod scoring;
pub mod settings;

pub use engine::RecommendationEngine;
pub use extraction::RequirementExtractor;
pub use scoring::{PatternScorer, ScoreBoard};
pub use settings::EngineSettings;

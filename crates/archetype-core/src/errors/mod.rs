//! Error handling for Archetype.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod archetype_error;
pub mod config_error;
pub mod error_code;
pub mod lexicon_error;

pub use analysis_error::AnalysisError;
pub use archetype_error::{ArchetypeError, ArchetypeResult};
pub use config_error::ConfigError;
pub use error_code::ArchetypeErrorCode;
pub use lexicon_error::LexiconLoadError;

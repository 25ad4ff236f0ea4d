//! Top-level error aggregating every subsystem error.

use super::error_code::ArchetypeErrorCode;
use super::{AnalysisError, ConfigError, LexiconLoadError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArchetypeError {
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconLoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ArchetypeError {
    /// True for errors the caller can recover from by changing the input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Analysis(_))
    }
}

impl ArchetypeErrorCode for ArchetypeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Analysis(e) => e.error_code(),
            Self::Lexicon(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type ArchetypeResult<T> = Result<T, ArchetypeError>;

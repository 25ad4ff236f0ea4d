//! Errors raised while turning requirement text into a recommendation.

use super::error_code::{self, ArchetypeErrorCode};

/// Input-side failures. Both are recoverable by the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Blank or whitespace-only input. Rejected before any scoring.
    #[error("requirement text is empty")]
    EmptyInput,

    /// Non-empty input that matched no lexicon keyword. Points at a lexicon
    /// coverage gap; the caller should ask for more detail or pick manually.
    #[error("no recognizable keywords in {token_count} tokens of requirement text (lexicon {lexicon_version})")]
    InsufficientSignal {
        token_count: usize,
        lexicon_version: String,
    },
}

impl ArchetypeErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => error_code::EMPTY_INPUT,
            Self::InsufficientSignal { .. } => error_code::INSUFFICIENT_SIGNAL,
        }
    }
}

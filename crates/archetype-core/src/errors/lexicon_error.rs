//! Lexicon load and validation errors.

use super::error_code::{self, ArchetypeErrorCode};

/// The indicator table could not be loaded or is malformed.
/// Fatal: no request may be served until it is corrected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexiconLoadError {
    #[error("lexicon file not found: {path}")]
    FileNotFound { path: String },

    #[error("lexicon parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("malformed indicator {pattern}/'{keyword}': {reason}")]
    MalformedIndicator {
        pattern: String,
        keyword: String,
        reason: String,
    },

    #[error("duplicate indicator {pattern}/'{keyword}'")]
    DuplicateIndicator { pattern: String, keyword: String },

    #[error("pattern {pattern} has no indicators")]
    EmptyPattern { pattern: String },

    #[error("invalid {kind} term '{term}': {reason}")]
    InvalidTerm {
        kind: String,
        term: String,
        reason: String,
    },

    #[error("invalid rule {rule}: {reason}")]
    InvalidRule { rule: String, reason: String },

    #[error("no lexicon installed")]
    NotLoaded,
}

impl ArchetypeErrorCode for LexiconLoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotLoaded => error_code::LEXICON_NOT_LOADED,
            _ => error_code::LEXICON_LOAD_ERROR,
        }
    }
}

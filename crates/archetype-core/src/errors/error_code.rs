//! ArchetypeErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to give callers a structured code
/// they can branch on without parsing messages.
pub trait ArchetypeErrorCode {
    /// Returns the error code string (e.g., "EMPTY_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const INSUFFICIENT_SIGNAL: &str = "INSUFFICIENT_SIGNAL";
pub const LEXICON_LOAD_ERROR: &str = "LEXICON_LOAD_ERROR";
pub const LEXICON_NOT_LOADED: &str = "LEXICON_NOT_LOADED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

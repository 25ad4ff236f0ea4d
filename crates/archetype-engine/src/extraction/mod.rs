//! Requirement extraction: raw text to structured signals.

pub mod extractor;
pub mod inflection;

pub use extractor::{token_count, RequirementExtractor};

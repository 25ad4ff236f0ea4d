//! The closed taxonomy of workflow-architecture patterns.

pub mod taxonomy;

pub use taxonomy::PatternType;

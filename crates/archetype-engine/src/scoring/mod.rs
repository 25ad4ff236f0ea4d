//! Pattern scoring and ranking.

pub mod ranking;
pub mod scorer;

pub use scorer::{PatternScorer, ScoreBoard};

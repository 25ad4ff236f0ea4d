//! Hybrid detection: flags two co-dominant patterns as a named combination.

pub mod detector;

pub use detector::{detect, divergence};

//! Complexity tiers.

pub mod classifier;

pub use classifier::classify;

//! Shared constants for the Archetype recommender.

use crate::pattern::PatternType;

/// Archetype version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Confidence ----

/// Confidence when the top two candidates are tied.
pub const CONFIDENCE_BASELINE: f64 = 0.5;

/// Lowest confidence ever reported. Also the pinned value for the
/// zero-signal fallback.
pub const CONFIDENCE_FLOOR: f64 = 0.3;

/// Highest confidence ever reported.
pub const CONFIDENCE_CEILING: f64 = 0.95;

// ---- Complexity tiers ----

/// At most this many functional requirements (and no integrations) is simple.
pub const SIMPLE_MAX_FUNCTIONAL_REQUIREMENTS: usize = 2;

/// At least this many integration needs is complex.
pub const COMPLEX_MIN_INTEGRATION_NEEDS: usize = 2;

/// At least this many functional requirements is complex.
pub const COMPLEX_MIN_FUNCTIONAL_REQUIREMENTS: usize = 5;

// ---- Fallback ----

/// Pattern chosen when no indicator matched at all.
pub const FALLBACK_PATTERN: PatternType = PatternType::Workflow;

/// Rationale prefix for the zero-signal fallback.
pub const NO_SIGNAL_RATIONALE: &str = "no strong signal detected";

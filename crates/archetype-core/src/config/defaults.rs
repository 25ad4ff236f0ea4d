// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_CONTEXT_MULTIPLIER: f64 = 1.5;

// --- Recommendation ---
pub const DEFAULT_CONFIDENCE_K: f64 = 1.5;
pub const DEFAULT_RATIONALE_INDICATORS: usize = 3;
pub const MAX_RATIONALE_INDICATORS: usize = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "archetype.toml";
pub const USER_CONFIG_DIR: &str = ".archetype";
pub const USER_CONFIG_FILENAME: &str = "config.toml";

//! Top-level Archetype configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;
use super::{LexiconConfig, ObservabilityConfig, RecommendationConfig, ScoringConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ARCHETYPE_*`)
/// 3. Project config (`archetype.toml` in project root)
/// 4. User config (`~/.archetype/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArchetypeConfig {
    pub lexicon: LexiconConfig,
    pub scoring: ScoringConfig,
    pub recommendation: RecommendationConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub lexicon_path: Option<String>,
    pub context_multiplier: Option<f64>,
    pub confidence_k: Option<f64>,
    pub log_level: Option<String>,
}

impl ArchetypeConfig {
    /// Load configuration with layered resolution, reading the user config
    /// from `~/.archetype/config.toml`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let user_config = Self::user_config_path();
        Self::load_with_user_config(root, user_config.as_deref(), cli_overrides)
    }

    /// Load configuration with an explicit user config location.
    pub fn load_with_user_config(
        root: &Path,
        user_config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = user_config_path {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal.
                        tracing::warn!(error = %e, "ignoring user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &ArchetypeConfig) -> Result<(), ConfigError> {
        if let Some(multiplier) = config.scoring.context_multiplier {
            if !multiplier.is_finite() || multiplier <= 1.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scoring.context_multiplier".to_string(),
                    message: "must be a finite number greater than 1.0".to_string(),
                });
            }
        }
        if let Some(k) = config.recommendation.confidence_k {
            if !k.is_finite() || k <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "recommendation.confidence_k".to_string(),
                    message: "must be a finite number greater than 0.0".to_string(),
                });
            }
        }
        if let Some(n) = config.recommendation.rationale_indicators {
            if n == 0 || n > defaults::MAX_RATIONALE_INDICATORS {
                return Err(ConfigError::ValidationFailed {
                    field: "recommendation.rationale_indicators".to_string(),
                    message: format!(
                        "must be between 1 and {}",
                        defaults::MAX_RATIONALE_INDICATORS
                    ),
                });
            }
        }
        if let Some(ref path) = config.lexicon.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "lexicon.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.archetype/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| {
            h.join(defaults::USER_CONFIG_DIR)
                .join(defaults::USER_CONFIG_FILENAME)
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ArchetypeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ArchetypeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut ArchetypeConfig, other: &ArchetypeConfig) {
        if other.lexicon.path.is_some() {
            base.lexicon.path = other.lexicon.path.clone();
        }
        if other.scoring.context_multiplier.is_some() {
            base.scoring.context_multiplier = other.scoring.context_multiplier;
        }
        if other.recommendation.confidence_k.is_some() {
            base.recommendation.confidence_k = other.recommendation.confidence_k;
        }
        if other.recommendation.rationale_indicators.is_some() {
            base.recommendation.rationale_indicators = other.recommendation.rationale_indicators;
        }
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ARCHETYPE_LEXICON_PATH`, `ARCHETYPE_CONFIDENCE_K`, etc.
    fn apply_env_overrides(config: &mut ArchetypeConfig) {
        if let Ok(val) = std::env::var("ARCHETYPE_LEXICON_PATH") {
            config.lexicon.path = Some(val);
        }
        if let Ok(val) = std::env::var("ARCHETYPE_CONTEXT_MULTIPLIER") {
            if let Ok(v) = val.parse::<f64>() {
                config.scoring.context_multiplier = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_CONFIDENCE_K") {
            if let Ok(v) = val.parse::<f64>() {
                config.recommendation.confidence_k = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_RATIONALE_INDICATORS") {
            if let Ok(v) = val.parse::<usize>() {
                config.recommendation.rationale_indicators = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut ArchetypeConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.lexicon_path {
            config.lexicon.path = Some(v.clone());
        }
        if let Some(v) = cli.context_multiplier {
            config.scoring.context_multiplier = Some(v);
        }
        if let Some(v) = cli.confidence_k {
            config.recommendation.confidence_k = Some(v);
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

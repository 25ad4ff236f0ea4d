//! Tests for the layered configuration system.

use std::sync::Mutex;

use archetype_core::config::{ArchetypeConfig, CliOverrides};
use archetype_core::errors::ConfigError;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_archetype_env_vars() {
    for key in [
        "ARCHETYPE_LEXICON_PATH",
        "ARCHETYPE_CONTEXT_MULTIPLIER",
        "ARCHETYPE_CONFIDENCE_K",
        "ARCHETYPE_RATIONALE_INDICATORS",
        "ARCHETYPE_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn cli_beats_env_beats_project_beats_user() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_archetype_env_vars();

    let dir = tempdir();
    let user = dir.path().join("user.toml");
    std::fs::write(
        &user,
        r#"
[recommendation]
confidence_k = 1.1
rationale_indicators = 1

[observability]
log_level = "warn"
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("archetype.toml"),
        r#"
[scoring]
context_multiplier = 2.0

[recommendation]
confidence_k = 1.2
"#,
    )
    .unwrap();

    std::env::set_var("ARCHETYPE_CONFIDENCE_K", "1.8");
    let cli = CliOverrides {
        log_level: Some("debug".to_string()),
        ..Default::default()
    };

    let config =
        ArchetypeConfig::load_with_user_config(dir.path(), Some(&user), Some(&cli)).unwrap();

    assert_eq!(config.observability.log_level.as_deref(), Some("debug"));
    assert_eq!(config.recommendation.confidence_k, Some(1.8));
    assert_eq!(config.scoring.context_multiplier, Some(2.0));
    assert_eq!(config.recommendation.rationale_indicators, Some(1));

    clear_archetype_env_vars();
}

#[test]
fn missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_archetype_env_vars();

    let dir = tempdir();
    let config = ArchetypeConfig::load_with_user_config(dir.path(), None, None).unwrap();

    assert_eq!(config.scoring.multiplier_override(), None);
    assert_eq!(config.recommendation.effective_confidence_k(), 1.5);
    assert_eq!(config.recommendation.effective_rationale_indicators(), 3);
    assert_eq!(config.observability.effective_log_level(), "info");
    assert!(config.lexicon.path.is_none());
}

#[test]
fn unparsable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_archetype_env_vars();

    std::env::set_var("ARCHETYPE_CONTEXT_MULTIPLIER", "lots");
    let dir = tempdir();
    let config = ArchetypeConfig::load_with_user_config(dir.path(), None, None).unwrap();
    assert_eq!(config.scoring.context_multiplier, None);

    clear_archetype_env_vars();
}

#[test]
fn invalid_project_value_fails_validation() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_archetype_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("archetype.toml"),
        "[scoring]\ncontext_multiplier = 0.8\n",
    )
    .unwrap();

    let err = ArchetypeConfig::load_with_user_config(dir.path(), None, None).unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "scoring.context_multiplier")
        }
        other => panic!("expected ValidationFailed, got {other:?}"),
    }
}

#[test]
fn malformed_project_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_archetype_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("archetype.toml"), "[scoring\n").unwrap();
    let err = ArchetypeConfig::load_with_user_config(dir.path(), None, None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn from_toml_validates_rationale_range() {
    let err = ArchetypeConfig::from_toml("[recommendation]\nrationale_indicators = 7\n").unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));

    let ok = ArchetypeConfig::from_toml("[recommendation]\nrationale_indicators = 2\n").unwrap();
    assert_eq!(ok.recommendation.effective_rationale_indicators(), 2);
}

#[test]
fn unknown_keys_are_ignored() {
    let config = ArchetypeConfig::from_toml(
        r#"
[lexicon]
path = "lexicon.toml"
future_option = true

[telemetry]
enabled = false
"#,
    )
    .unwrap();
    assert_eq!(config.lexicon.path.as_deref(), Some("lexicon.toml"));
}

#[test]
fn toml_export_round_trips() {
    let config = ArchetypeConfig::from_toml(
        "[scoring]\ncontext_multiplier = 1.75\n\n[recommendation]\nconfidence_k = 2.0\n",
    )
    .unwrap();
    let reparsed = ArchetypeConfig::from_toml(&config.to_toml().unwrap()).unwrap();
    assert_eq!(reparsed.scoring.context_multiplier, Some(1.75));
    assert_eq!(reparsed.recommendation.confidence_k, Some(2.0));
}

//! Process-wide engine lifecycle for hosts that want a single shared
//! recommender: `init` once, call `analyze_and_recommend` from anywhere,
//! `shutdown` on exit.
//!
//! The lexicon and the resolved settings live together in one slot and are
//! swapped as a unit, so a call never pairs one generation's lexicon with
//! another's settings. Calls before `init` (or after `shutdown`) fail with
//! `LexiconLoadError::NotLoaded`.

use std::path::Path;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwapOption;

use archetype_core::errors::LexiconLoadError;
use archetype_core::tracing_setup;
use archetype_core::{ArchetypeConfig, ArchetypeResult, PatternRecommendation, RecommendationReport};
use archetype_lexicon::Lexicon;

use crate::pipeline;
use crate::settings::EngineSettings;

/// One installed generation of the process-wide engine.
struct GlobalEngine {
    lexicon: Lexicon,
    settings: EngineSettings,
}

static ENGINE: LazyLock<ArcSwapOption<GlobalEngine>> = LazyLock::new(|| ArcSwapOption::new(None));

/// Compile the lexicon named by `config` (or the built-in one) and install
/// it process-wide together with the resolved settings. Calling `init`
/// again replaces both. Also installs the log subscriber on first call.
pub fn init(config: &ArchetypeConfig) -> ArchetypeResult<()> {
    tracing_setup::init_tracing_with_level(config.observability.effective_log_level());
    let lexicon = match config.lexicon.path.as_deref() {
        Some(path) => Lexicon::load_from_file(Path::new(path))?,
        None => Lexicon::builtin()?,
    };
    install(lexicon, EngineSettings::from_config(config));
    Ok(())
}

/// Install an already compiled lexicon and settings in one swap.
pub fn install(lexicon: Lexicon, settings: EngineSettings) {
    let next = Arc::new(GlobalEngine { lexicon, settings });
    let version = next.lexicon.version().to_string();
    match ENGINE.swap(Some(next)) {
        Some(previous) => tracing::info!(
            from = %previous.lexicon.version(),
            to = %version,
            "global engine re-initialized"
        ),
        None => tracing::info!(version = %version, "global engine initialized"),
    }
}

/// Remove the process-wide engine. Calls already in flight complete.
pub fn shutdown() {
    if let Some(previous) = ENGINE.swap(None) {
        tracing::info!(version = %previous.lexicon.version(), "global engine shut down");
    }
}

pub fn is_initialized() -> bool {
    ENGINE.load().is_some()
}

/// Settings of the installed engine, if any.
pub fn settings() -> Option<EngineSettings> {
    ENGINE.load_full().map(|engine| engine.settings)
}

/// Full pipeline against the process-wide engine.
pub fn explain(text: &str, hints: &[&str]) -> ArchetypeResult<RecommendationReport> {
    let engine = ENGINE.load_full().ok_or(LexiconLoadError::NotLoaded)?;
    pipeline::run(&engine.lexicon, &engine.settings, text, hints)
}

pub fn analyze_and_recommend(
    text: &str,
    hints: &[&str],
) -> ArchetypeResult<PatternRecommendation> {
    explain(text, hints).map(|r| r.recommendation)
}

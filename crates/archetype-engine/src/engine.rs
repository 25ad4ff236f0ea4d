//! `RecommendationEngine`: the public facade over the pipeline.

use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use archetype_core::{
    ArchetypeConfig, ArchetypeResult, PatternRecommendation, RecommendationReport,
    RequirementAnalysis,
};
use archetype_lexicon::{Lexicon, LexiconStore};

use crate::extraction::RequirementExtractor;
use crate::pipeline;
use crate::settings::EngineSettings;

/// Stateless recommender over a hot-swappable lexicon.
///
/// Every call takes one lexicon snapshot up front, so a concurrent
/// `reload_lexicon` never produces a result that mixes two versions.
pub struct RecommendationEngine {
    store: LexiconStore,
    settings: EngineSettings,
}

impl RecommendationEngine {
    pub fn new(lexicon: Lexicon, settings: EngineSettings) -> Self {
        tracing::info!(
            version = %lexicon.version(),
            indicators = lexicon.indicator_count(),
            "recommendation engine ready"
        );
        Self {
            store: LexiconStore::new(lexicon),
            settings,
        }
    }

    /// Engine over the built-in lexicon with default settings.
    pub fn with_builtin_lexicon() -> ArchetypeResult<Self> {
        Ok(Self::new(Lexicon::builtin()?, EngineSettings::default()))
    }

    /// Engine per `config`: the lexicon at `lexicon.path` if set, otherwise
    /// the built-in one.
    pub fn from_config(config: &ArchetypeConfig) -> ArchetypeResult<Self> {
        let lexicon = match config.lexicon.path.as_deref() {
            Some(path) => Lexicon::load_from_file(Path::new(path))?,
            None => Lexicon::builtin()?,
        };
        Ok(Self::new(lexicon, EngineSettings::from_config(config)))
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn lexicon_version(&self) -> String {
        self.store.version()
    }

    /// The lexicon currently in use.
    pub fn lexicon(&self) -> Arc<Lexicon> {
        self.store.snapshot()
    }

    /// Extract signals only. Zero keywords is not an error here.
    pub fn analyze(&self, text: &str, hints: &[&str]) -> ArchetypeResult<RequirementAnalysis> {
        let lexicon = self.store.snapshot();
        Ok(RequirementExtractor::new(&lexicon).extract(text, hints)?)
    }

    pub fn recommend(&self, text: &str, hints: &[&str]) -> ArchetypeResult<PatternRecommendation> {
        self.explain(text, hints).map(|r| r.recommendation)
    }

    /// Recommendation plus the analysis, ranked scores and hybrid match
    /// that produced it.
    pub fn explain(&self, text: &str, hints: &[&str]) -> ArchetypeResult<RecommendationReport> {
        let lexicon = self.store.snapshot();
        pipeline::run(&lexicon, &self.settings, text, hints)
    }

    /// Recommend for many independent requirements in parallel. Results are
    /// in input order and all use the same lexicon snapshot.
    pub fn recommend_batch(&self, texts: &[&str]) -> Vec<ArchetypeResult<PatternRecommendation>> {
        let lexicon = self.store.snapshot();
        tracing::debug!(count = texts.len(), lexicon = lexicon.version(), "batch recommend");
        texts
            .par_iter()
            .map(|text| {
                pipeline::run(&lexicon, &self.settings, text, &[]).map(|r| r.recommendation)
            })
            .collect()
    }

    /// Atomically swap in a new lexicon, returning the previous one.
    /// In-flight calls finish on the lexicon they started with.
    pub fn reload_lexicon(&self, lexicon: Lexicon) -> Arc<Lexicon> {
        self.store.replace(lexicon)
    }

    /// Load a lexicon file and swap it in. On error the current lexicon
    /// stays active.
    pub fn reload_lexicon_from_file(&self, path: &Path) -> ArchetypeResult<Arc<Lexicon>> {
        let lexicon = Lexicon::load_from_file(path)?;
        Ok(self.reload_lexicon(lexicon))
    }
}

impl std::fmt::Debug for RecommendationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecommendationEngine")
            .field("lexicon", &self.store.version())
            .field("settings", &self.settings)
            .finish()
    }
}

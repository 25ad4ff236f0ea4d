//! One recommendation call, end to end, against a fixed lexicon snapshot.

use archetype_core::errors::AnalysisError;
use archetype_core::{ArchetypeResult, RecommendationReport};
use archetype_lexicon::Lexicon;

use crate::complexity;
use crate::extraction::{self, RequirementExtractor};
use crate::hybrid;
use crate::recommendation::RecommendationBuilder;
use crate::scoring::PatternScorer;
use crate::settings::EngineSettings;

/// Extract, score, detect hybrids, classify and build.
///
/// Non-empty text without a single general-lexicon keyword is
/// `InsufficientSignal`, never the WORKFLOW fallback.
pub fn run(
    lexicon: &Lexicon,
    settings: &EngineSettings,
    text: &str,
    hints: &[&str],
) -> ArchetypeResult<RecommendationReport> {
    let analysis = RequirementExtractor::new(lexicon).extract(text, hints)?;
    if analysis.has_no_keywords() {
        let token_count = extraction::token_count(text);
        tracing::debug!(token_count, "no recognizable keywords");
        return Err(AnalysisError::InsufficientSignal {
            token_count,
            lexicon_version: lexicon.version().to_string(),
        }
        .into());
    }

    let board = PatternScorer::new(lexicon, settings.context_multiplier).score(&analysis);
    let hybrid = hybrid::detect(&board, lexicon);
    let tier = complexity::classify(&analysis, lexicon);
    let recommendation =
        RecommendationBuilder::new(lexicon, *settings).build(&board, hybrid.as_ref(), tier);

    tracing::debug!(
        primary = %recommendation.primary,
        confidence = recommendation.confidence,
        tier = %tier,
        hybrid = recommendation.hybrid_name.as_deref().unwrap_or("-"),
        lexicon = lexicon.version(),
        "recommendation built"
    );

    Ok(RecommendationReport {
        recommendation,
        analysis,
        scores: board.scores,
        hybrid,
        lexicon_version: lexicon.version().to_string(),
        fallback: board.fallback,
    })
}

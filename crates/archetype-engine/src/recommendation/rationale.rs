//! Human-readable explanation of a recommendation.

use archetype_core::constants::{FALLBACK_PATTERN, NO_SIGNAL_RATIONALE};
use archetype_core::{ComplexityTier, HybridMatch, PatternScore};

/// Rationale for the zero-signal fallback.
pub fn fallback() -> String {
    format!("{NO_SIGNAL_RATIONALE}; defaulting to {FALLBACK_PATTERN}.")
}

/// Rationale citing up to `cite` of the strongest matched indicators of the
/// primary (and, for a hybrid, the secondary) pattern.
pub fn compose(
    primary: &PatternScore,
    hybrid: Option<(&HybridMatch, &PatternScore)>,
    tier: ComplexityTier,
    cite: usize,
) -> String {
    let mut out = format!(
        "{} matched {} (score {:.2}).",
        primary.pattern,
        quoted(primary, cite),
        primary.normalized_score
    );
    if let Some(term) = &primary.override_term {
        out.push_str(&format!(
            " '{term}' is traditional-software vocabulary and sets a floor for {}.",
            primary.pattern
        ));
    }
    if let Some((m, secondary)) = hybrid {
        out.push_str(&format!(
            " Combined with {} as {}: {} (score {:.2}), divergence {:.2}.",
            secondary.pattern,
            m.name,
            quoted(secondary, cite),
            secondary.normalized_score,
            m.divergence
        ));
    }
    out.push_str(&format!(" Complexity: {tier}."));
    out
}

fn quoted(score: &PatternScore, cite: usize) -> String {
    let cited: Vec<String> = score
        .strongest_indicators(cite)
        .into_iter()
        .map(|i| format!("'{}'", i.keyword))
        .collect();
    if cited.is_empty() {
        "no indicators".to_string()
    } else {
        cited.join(", ")
    }
}

//! Pairwise combination rules over normalized scores.

use archetype_core::HybridMatch;
use archetype_lexicon::{CombinationRule, Lexicon};

use crate::scoring::ScoreBoard;

/// Relative divergence of two normalized scores: `|a - b| / max(a, b)`.
/// Zero when both are zero.
pub fn divergence(a: f64, b: f64) -> f64 {
    let hi = a.max(b);
    if hi <= 0.0 {
        0.0
    } else {
        (a - b).abs() / hi
    }
}

/// Returns the first combination rule, in table order, that fires for `board`.
///
/// A rule fires when both of its patterns clear `min_normalized` and their
/// divergence is within `max_divergence`. The better-ranked pattern of the
/// pair becomes the hybrid's primary. Fallback boards never produce a hybrid.
pub fn detect(board: &ScoreBoard, lexicon: &Lexicon) -> Option<HybridMatch> {
    if board.fallback {
        return None;
    }
    lexicon.combinations().iter().find_map(|rule| {
        let lead = board.scores.iter().find(|s| rule.involves(s.pattern))?;
        let partner = rule.partner_of(lead.pattern)?;
        let other = board.get(partner)?;
        fires(rule, lead.normalized_score, other.normalized_score).map(|d| {
            tracing::debug!(
                rule = %rule.name,
                primary = %lead.pattern,
                secondary = %partner,
                divergence = d,
                "combination rule fired"
            );
            HybridMatch {
                name: rule.name.clone(),
                primary: lead.pattern,
                secondary: partner,
                divergence: d,
            }
        })
    })
}

/// Divergence of the pair if `rule` fires on these scores.
fn fires(rule: &CombinationRule, a: f64, b: f64) -> Option<f64> {
    if a <= rule.min_normalized || b <= rule.min_normalized {
        return None;
    }
    let d = divergence(a, b);
    (d <= rule.max_divergence).then_some(d)
}

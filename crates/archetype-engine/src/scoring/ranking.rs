//! Total ordering of pattern scores.

use std::cmp::Ordering;

use archetype_core::PatternScore;

/// Best first: higher normalized score, then higher raw score, then tie-break
/// priority (WORKFLOW, TOOL, RAG, AGENT, MAPREDUCE, MULTI_AGENT,
/// STRUCTURED_OUTPUT), then declaration order.
pub fn compare(a: &PatternScore, b: &PatternScore) -> Ordering {
    b.normalized_score
        .total_cmp(&a.normalized_score)
        .then_with(|| b.raw_score.total_cmp(&a.raw_score))
        .then_with(|| a.pattern.priority().cmp(&b.pattern.priority()))
        .then_with(|| a.pattern.declaration_index().cmp(&b.pattern.declaration_index()))
}

/// Sort `scores` best first.
pub fn rank(scores: &mut [PatternScore]) {
    scores.sort_by(compare);
}

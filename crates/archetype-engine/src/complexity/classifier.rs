use archetype_core::constants::{
    COMPLEX_MIN_FUNCTIONAL_REQUIREMENTS, COMPLEX_MIN_INTEGRATION_NEEDS,
    SIMPLE_MAX_FUNCTIONAL_REQUIREMENTS,
};
use archetype_core::{ComplexityTier, RequirementAnalysis};
use archetype_lexicon::Lexicon;

/// Map requirement signals to a tier. Independent of the chosen pattern.
pub fn classify(analysis: &RequirementAnalysis, lexicon: &Lexicon) -> ComplexityTier {
    let integrations = analysis.integration_needs.len();
    let functional = analysis.functional_requirements.len();
    let high_signal = analysis
        .complexity_signals
        .iter()
        .any(|s| lexicon.is_high_complexity_term(s));

    if integrations >= COMPLEX_MIN_INTEGRATION_NEEDS
        || functional >= COMPLEX_MIN_FUNCTIONAL_REQUIREMENTS
        || high_signal
    {
        ComplexityTier::Complex
    } else if integrations == 0 && functional <= SIMPLE_MAX_FUNCTIONAL_REQUIREMENTS {
        ComplexityTier::Simple
    } else {
        ComplexityTier::Medium
    }
}

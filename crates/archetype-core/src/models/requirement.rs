use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured signals extracted from one requirement text.
///
/// Sets are ordered so that two extractions of the same text compare and
/// serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementAnalysis {
    pub raw_text: String,
    /// General-lexicon terms, plus any accepted caller hints.
    pub keywords: BTreeSet<String>,
    pub complexity_signals: BTreeSet<String>,
    pub technical_requirements: BTreeSet<String>,
    /// One entry per sentence that contains an action verb, in input order.
    pub functional_requirements: Vec<String>,
    pub integration_needs: BTreeSet<String>,
}

impl RequirementAnalysis {
    /// True when the text yielded no general-lexicon keyword at all.
    pub fn has_no_keywords(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn has_complexity_signal(&self, signal: &str) -> bool {
        self.complexity_signals.contains(signal)
    }
}

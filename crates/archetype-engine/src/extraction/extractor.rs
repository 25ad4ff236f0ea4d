//! Requirement text → `RequirementAnalysis`.

use std::collections::BTreeSet;

use archetype_core::errors::AnalysisError;
use archetype_core::types::collections::FxHashSet;
use archetype_core::RequirementAnalysis;
use archetype_lexicon::{text, KeywordId, Lexicon};

use super::inflection;

/// Characters that end a sentence.
const SENTENCE_DELIMITERS: [char; 5] = ['.', '!', '?', ';', '\n'];

/// Extracts structured signals from requirement text against one lexicon.
///
/// Pure and deterministic: the same text and lexicon always produce the
/// same analysis.
pub struct RequirementExtractor<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> RequirementExtractor<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Extract signals from `requirement`, merging caller `hints` into the keyword
    /// set. Hints outside the general lexicon are dropped.
    ///
    /// Fails only on blank input. Zero keywords is a valid analysis; the
    /// caller decides whether that is an error.
    pub fn extract(
        &self,
        requirement: &str,
        hints: &[&str],
    ) -> Result<RequirementAnalysis, AnalysisError> {
        if requirement.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        let mut terms: FxHashSet<KeywordId> = FxHashSet::default();
        let mut functional_requirements = Vec::new();

        for sentence in requirement.split(|c: char| SENTENCE_DELIMITERS.contains(&c)) {
            let tokens = text::tokenize(sentence);
            if tokens.is_empty() {
                continue;
            }
            let canonical: Vec<String> = tokens
                .iter()
                .map(|t| inflection::canonicalize(t, self.lexicon))
                .collect();

            self.collect_terms(&tokens, &mut terms);
            self.collect_terms(&canonical, &mut terms);

            let has_action = canonical
                .iter()
                .filter_map(|t| self.lexicon.term_id(t))
                .any(|id| self.lexicon.is_action(id));
            if has_action {
                functional_requirements.push(sentence.trim().to_string());
            }
        }

        let lexicon = self.lexicon;
        let select = |pred: &dyn Fn(KeywordId) -> bool| -> BTreeSet<String> {
            terms
                .iter()
                .copied()
                .filter(|&id| pred(id))
                .map(|id| lexicon.resolve(id).to_string())
                .collect()
        };

        let mut keywords = select(&|id| lexicon.is_general(id));
        let complexity_signals = select(&|id| lexicon.is_complexity_signal(id));
        let technical_requirements = select(&|id| lexicon.is_technical(id));
        let integration_needs = select(&|id| lexicon.is_integration(id));

        for hint in hints {
            match self.hint_term(hint) {
                Some(term) => {
                    keywords.insert(term);
                }
                None => {
                    tracing::warn!(hint = %hint, "dropping hint outside the general lexicon");
                }
            }
        }

        Ok(RequirementAnalysis {
            raw_text: requirement.to_string(),
            keywords,
            complexity_signals,
            technical_requirements,
            functional_requirements,
            integration_needs,
        })
    }

    /// The general-lexicon term a caller hint names, tried as written and
    /// then with every word reduced to its canonical form.
    fn hint_term(&self, hint: &str) -> Option<String> {
        let normalized = text::normalize_term(hint);
        let canonical = text::tokenize(&normalized)
            .iter()
            .map(|t| inflection::canonicalize(t, self.lexicon))
            .collect::<Vec<_>>()
            .join(" ");
        [normalized, canonical].into_iter().find(|term| {
            self.lexicon
                .term_id(term)
                .is_some_and(|id| self.lexicon.is_general(id))
        })
    }

    /// Add every 1..=N-gram of `tokens` that is a lexicon term.
    fn collect_terms(&self, tokens: &[String], out: &mut FxHashSet<KeywordId>) {
        let max_n = self.lexicon.max_phrase_words().min(tokens.len());
        for n in 1..=max_n {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(id) = self.lexicon.term_id(&gram) {
                    out.insert(id);
                }
            }
        }
    }
}

/// Number of word tokens in `requirement`, as the extractor counts them.
pub fn token_count(requirement: &str) -> usize {
    text::tokenize(requirement).len()
}

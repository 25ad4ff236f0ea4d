//! The compiled, immutable lexicon.
//!
//! Compilation validates a [`LexiconDef`], interns every term, and indexes
//! indicators and rules by [`KeywordId`]. A compiled lexicon is never mutated;
//! reloading means compiling a new one and swapping it in whole.

use std::path::Path;

use archetype_core::errors::LexiconLoadError;
use archetype_core::types::collections::{FxHashMap, FxHashSet, SmallVec4};
use archetype_core::{Indicator, PatternType};

use crate::definition::LexiconDef;
use crate::interning::{FrozenTerms, KeywordId, TermInterner};
use crate::validation;

/// An indicator with its interned keyword.
#[derive(Debug, Clone)]
pub struct CompiledIndicator {
    pub id: KeywordId,
    pub indicator: Indicator,
}

/// Boost for a pattern's contextual indicators when a trigger co-occurs.
#[derive(Debug, Clone)]
pub struct ContextRule {
    pub pattern: PatternType,
    pub triggers: SmallVec4<KeywordId>,
    pub multiplier: f64,
}

impl ContextRule {
    /// The multiplier in force, honoring a configured override.
    pub fn effective_multiplier(&self, multiplier_override: Option<f64>) -> f64 {
        multiplier_override.unwrap_or(self.multiplier)
    }
}

/// Normalized score floor forced by unambiguous traditional-software terms.
#[derive(Debug, Clone)]
pub struct OverrideRule {
    pub pattern: PatternType,
    pub terms: SmallVec4<KeywordId>,
    pub floor: f64,
}

/// Pairwise hybrid rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinationRule {
    pub name: String,
    pub first: PatternType,
    pub second: PatternType,
    pub min_normalized: f64,
    pub max_divergence: f64,
}

impl CombinationRule {
    pub fn involves(&self, pattern: PatternType) -> bool {
        self.first == pattern || self.second == pattern
    }

    /// The other pattern of the pair, if `pattern` is one of them.
    pub fn partner_of(&self, pattern: PatternType) -> Option<PatternType> {
        if self.first == pattern {
            Some(self.second)
        } else if self.second == pattern {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Immutable, interned lexicon. `Send + Sync`; share it behind an `Arc`.
pub struct Lexicon {
    version: String,
    terms: FrozenTerms,
    /// Every single word of every term, for inflection canonicalization.
    words: FxHashSet<String>,
    max_phrase_words: usize,
    general: FxHashSet<KeywordId>,
    complexity: FxHashSet<KeywordId>,
    high_complexity: FxHashSet<KeywordId>,
    technical: FxHashSet<KeywordId>,
    integration: FxHashSet<KeywordId>,
    actions: FxHashSet<KeywordId>,
    indicators: FxHashMap<PatternType, Vec<CompiledIndicator>>,
    context_rules: FxHashMap<PatternType, ContextRule>,
    overrides: Vec<OverrideRule>,
    combinations: Vec<CombinationRule>,
    customizations: FxHashMap<PatternType, Vec<String>>,
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("version", &self.version)
            .field("terms", &self.terms.len())
            .field("indicators", &self.indicator_count())
            .field("combinations", &self.combinations.len())
            .finish()
    }
}

impl Lexicon {
    /// Compile the built-in lexicon.
    pub fn builtin() -> Result<Self, LexiconLoadError> {
        Self::compile(LexiconDef::builtin())
    }

    /// Parse and compile a lexicon from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, LexiconLoadError> {
        Self::compile(LexiconDef::from_toml_str(toml_str)?)
    }

    /// Read, parse and compile a lexicon file.
    pub fn load_from_file(path: &Path) -> Result<Self, LexiconLoadError> {
        let lexicon = Self::compile(LexiconDef::from_file(path)?)?;
        tracing::info!(
            path = %path.display(),
            version = %lexicon.version,
            indicators = lexicon.indicator_count(),
            "loaded lexicon"
        );
        Ok(lexicon)
    }

    /// Validate and compile a definition.
    pub fn compile(def: LexiconDef) -> Result<Self, LexiconLoadError> {
        validation::validate(&def)?;

        let interner = TermInterner::new();
        let mut words = FxHashSet::default();
        let mut max_phrase_words = 1;
        let mut intern = |term: &str| -> KeywordId {
            let n = term.split(' ').count();
            max_phrase_words = max_phrase_words.max(n);
            for w in term.split(' ') {
                words.insert(w.to_string());
            }
            interner.intern(term)
        };

        let v = &def.vocabulary;
        let mut general: FxHashSet<KeywordId> = v.general.iter().map(|t| intern(t)).collect();
        let high_complexity: FxHashSet<KeywordId> =
            v.high_complexity.iter().map(|t| intern(t)).collect();
        let mut complexity: FxHashSet<KeywordId> =
            v.complexity.iter().map(|t| intern(t)).collect();
        complexity.extend(high_complexity.iter().copied());
        let technical = v.technical.iter().map(|t| intern(t)).collect();
        let integration = v.integration.iter().map(|t| intern(t)).collect();
        let actions = v.actions.iter().map(|t| intern(t)).collect();

        // Indicator keywords and override terms are always general keywords,
        // so no indicator can be unreachable.
        let mut indicators: FxHashMap<PatternType, Vec<CompiledIndicator>> = FxHashMap::default();
        for ind in def.indicators {
            let id = intern(&ind.keyword);
            general.insert(id);
            indicators
                .entry(ind.pattern)
                .or_default()
                .push(CompiledIndicator {
                    id,
                    indicator: Indicator::new(ind.pattern, ind.keyword, ind.weight, ind.category),
                });
        }

        let mut context_rules = FxHashMap::default();
        for rule in def.context_rules {
            let triggers: SmallVec4<KeywordId> =
                rule.triggers.iter().map(|t| intern(t)).collect();
            complexity.extend(triggers.iter().copied());
            context_rules.insert(
                rule.pattern,
                ContextRule {
                    pattern: rule.pattern,
                    triggers,
                    multiplier: rule.multiplier,
                },
            );
        }

        let overrides = def
            .overrides
            .into_iter()
            .map(|rule| {
                let terms: SmallVec4<KeywordId> = rule.terms.iter().map(|t| intern(t)).collect();
                general.extend(terms.iter().copied());
                OverrideRule {
                    pattern: rule.pattern,
                    terms,
                    floor: rule.floor,
                }
            })
            .collect();

        let combinations = def
            .combinations
            .into_iter()
            .map(|c| CombinationRule {
                name: c.name,
                first: c.first,
                second: c.second,
                min_normalized: c.min_normalized,
                max_divergence: c.max_divergence,
            })
            .collect();

        let mut customizations: FxHashMap<PatternType, Vec<String>> = FxHashMap::default();
        for c in def.customizations {
            let items = customizations.entry(c.pattern).or_default();
            for item in c.items {
                if !items.contains(&item) {
                    items.push(item);
                }
            }
        }

        Ok(Self {
            version: def.version,
            terms: interner.freeze(),
            words,
            max_phrase_words,
            general,
            complexity,
            high_complexity,
            technical,
            integration,
            actions,
            indicators,
            context_rules,
            overrides,
            combinations,
            customizations,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Interned id of a canonical term, if the lexicon knows it.
    pub fn term_id(&self, term: &str) -> Option<KeywordId> {
        self.terms.get(term)
    }

    pub fn resolve(&self, id: KeywordId) -> &str {
        self.terms.resolve(id)
    }

    /// Whether `word` appears in any term (alone or inside a phrase).
    pub fn is_known_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Longest term, in words.
    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    pub fn is_general(&self, id: KeywordId) -> bool {
        self.general.contains(&id)
    }

    pub fn is_complexity_signal(&self, id: KeywordId) -> bool {
        self.complexity.contains(&id)
    }

    pub fn is_high_complexity_signal(&self, id: KeywordId) -> bool {
        self.high_complexity.contains(&id)
    }

    pub fn is_technical(&self, id: KeywordId) -> bool {
        self.technical.contains(&id)
    }

    pub fn is_integration(&self, id: KeywordId) -> bool {
        self.integration.contains(&id)
    }

    pub fn is_action(&self, id: KeywordId) -> bool {
        self.actions.contains(&id)
    }

    /// High-complexity check by term text.
    pub fn is_high_complexity_term(&self, term: &str) -> bool {
        self.term_id(term)
            .is_some_and(|id| self.is_high_complexity_signal(id))
    }

    /// Indicators of a pattern, in declaration order. Empty for `Hybrid`.
    pub fn indicators(&self, pattern: PatternType) -> &[CompiledIndicator] {
        self.indicators
            .get(&pattern)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn indicator_count(&self) -> usize {
        self.indicators.values().map(Vec::len).sum()
    }

    pub fn context_rule(&self, pattern: PatternType) -> Option<&ContextRule> {
        self.context_rules.get(&pattern)
    }

    /// Highest raw score a pattern can reach: every indicator matched, and
    /// contextual ones at the multiplier when the pattern has a context rule.
    pub fn max_attainable(&self, pattern: PatternType, multiplier_override: Option<f64>) -> f64 {
        let multiplier = self
            .context_rule(pattern)
            .map(|r| r.effective_multiplier(multiplier_override));
        self.indicators(pattern)
            .iter()
            .map(|ci| match multiplier {
                Some(m) if ci.indicator.is_contextual() => ci.indicator.weight * m,
                _ => ci.indicator.weight,
            })
            .sum()
    }

    pub fn overrides(&self) -> &[OverrideRule] {
        &self.overrides
    }

    /// Combination rules in evaluation order.
    pub fn combinations(&self) -> &[CombinationRule] {
        &self.combinations
    }

    /// Checklist for a pattern. Empty if the lexicon declares none.
    pub fn customizations(&self, pattern: PatternType) -> &[String] {
        self.customizations
            .get(&pattern)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

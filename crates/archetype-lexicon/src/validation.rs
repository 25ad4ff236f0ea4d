//! Structural validation of a lexicon definition.
//!
//! Runs before compilation. Every rejection is a `LexiconLoadError`, which is
//! fatal: a lexicon that fails here is never served.

use archetype_core::errors::LexiconLoadError;
use archetype_core::types::collections::FxHashSet;
use archetype_core::PatternType;

use crate::definition::LexiconDef;
use crate::text;

/// Validate `def`, returning the first problem found.
pub fn validate(def: &LexiconDef) -> Result<(), LexiconLoadError> {
    if def.version.trim().is_empty() {
        return Err(LexiconLoadError::InvalidRule {
            rule: "version".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    validate_vocabulary(def)?;
    validate_indicators(def)?;
    validate_context_rules(def)?;
    validate_overrides(def)?;
    validate_combinations(def)?;
    Ok(())
}

fn check_term(kind: &str, term: &str) -> Result<(), LexiconLoadError> {
    if text::is_normalized(term) {
        Ok(())
    } else {
        Err(LexiconLoadError::InvalidTerm {
            kind: kind.to_string(),
            term: term.to_string(),
            reason: format!(
                "not reachable by the tokenizer; use lower-case words of letters, digits, '-' or '_' (at most {} words)",
                text::MAX_TERM_WORDS
            ),
        })
    }
}

fn validate_vocabulary(def: &LexiconDef) -> Result<(), LexiconLoadError> {
    let v = &def.vocabulary;
    let lists: [(&str, &Vec<String>); 6] = [
        ("general", &v.general),
        ("complexity", &v.complexity),
        ("high_complexity", &v.high_complexity),
        ("technical", &v.technical),
        ("integration", &v.integration),
        ("action", &v.actions),
    ];
    for (kind, terms) in lists {
        for term in terms {
            check_term(kind, term)?;
        }
    }
    Ok(())
}

fn validate_indicators(def: &LexiconDef) -> Result<(), LexiconLoadError> {
    let mut seen: FxHashSet<(PatternType, &str)> = FxHashSet::default();
    for ind in &def.indicators {
        let malformed = |reason: &str| LexiconLoadError::MalformedIndicator {
            pattern: ind.pattern.to_string(),
            keyword: ind.keyword.clone(),
            reason: reason.to_string(),
        };
        if !ind.pattern.is_scored() {
            return Err(malformed("HYBRID is not scored and cannot carry indicators"));
        }
        if !ind.weight.is_finite() || ind.weight <= 0.0 {
            return Err(malformed("weight must be a finite number greater than 0"));
        }
        if !text::is_normalized(&ind.keyword) {
            return Err(malformed(
                "keyword is not reachable by the tokenizer (lower-case, no punctuation, at most 4 words)",
            ));
        }
        if !seen.insert((ind.pattern, ind.keyword.as_str())) {
            return Err(LexiconLoadError::DuplicateIndicator {
                pattern: ind.pattern.to_string(),
                keyword: ind.keyword.clone(),
            });
        }
    }
    for pattern in PatternType::SCORED {
        if def.indicators_for(pattern).next().is_none() {
            return Err(LexiconLoadError::EmptyPattern {
                pattern: pattern.to_string(),
            });
        }
    }
    Ok(())
}

fn validate_context_rules(def: &LexiconDef) -> Result<(), LexiconLoadError> {
    let mut seen = FxHashSet::default();
    for rule in &def.context_rules {
        let name = format!("context/{}", rule.pattern);
        let invalid = |reason: &str| LexiconLoadError::InvalidRule {
            rule: name.clone(),
            reason: reason.to_string(),
        };
        if !rule.pattern.is_scored() {
            return Err(invalid("pattern must be a scored pattern"));
        }
        if !seen.insert(rule.pattern) {
            return Err(invalid("only one context rule per pattern"));
        }
        if !rule.multiplier.is_finite() || rule.multiplier <= 1.0 {
            return Err(invalid("multiplier must be a finite number greater than 1.0"));
        }
        if rule.triggers.is_empty() {
            return Err(invalid("at least one trigger signal is required"));
        }
        for trigger in &rule.triggers {
            check_term("context trigger", trigger)?;
        }
    }
    Ok(())
}

fn validate_overrides(def: &LexiconDef) -> Result<(), LexiconLoadError> {
    for rule in &def.overrides {
        let invalid = |reason: &str| LexiconLoadError::InvalidRule {
            rule: format!("override/{}", rule.pattern),
            reason: reason.to_string(),
        };
        if !rule.pattern.is_scored() {
            return Err(invalid("pattern must be a scored pattern"));
        }
        if !(rule.floor > 0.0 && rule.floor <= 1.0) {
            return Err(invalid("floor must be in (0, 1]"));
        }
        if rule.terms.is_empty() {
            return Err(invalid("at least one term is required"));
        }
        for term in &rule.terms {
            check_term("override", term)?;
        }
    }
    Ok(())
}

fn validate_combinations(def: &LexiconDef) -> Result<(), LexiconLoadError> {
    let mut names = FxHashSet::default();
    for rule in &def.combinations {
        let invalid = |reason: &str| LexiconLoadError::InvalidRule {
            rule: format!("combination/{}", rule.name),
            reason: reason.to_string(),
        };
        if rule.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if !names.insert(rule.name.as_str()) {
            return Err(invalid("duplicate combination name"));
        }
        if !rule.first.is_scored() || !rule.second.is_scored() {
            return Err(invalid("both patterns must be scored patterns"));
        }
        if rule.first == rule.second {
            return Err(invalid("a combination needs two distinct patterns"));
        }
        if !(0.0..1.0).contains(&rule.min_normalized) {
            return Err(invalid("min_normalized must be in [0, 1)"));
        }
        if !(0.0..=1.0).contains(&rule.max_divergence) {
            return Err(invalid("max_divergence must be in [0, 1]"));
        }
    }
    Ok(())
}

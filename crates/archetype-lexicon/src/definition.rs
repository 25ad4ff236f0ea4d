//! Declarative lexicon definitions, editable as TOML without recompiling.
//!
//! Pattern names and indicator categories deserialize into the typed
//! `PatternType` / `IndicatorCategory` enums, so an unknown name fails the
//! load instead of producing a dead entry.

use std::path::Path;

use serde::{Deserialize, Serialize};

use archetype_core::errors::LexiconLoadError;
use archetype_core::{IndicatorCategory, PatternType};

/// A complete lexicon as authored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconDef {
    pub version: String,
    #[serde(default)]
    pub vocabulary: VocabularyDef,
    #[serde(default)]
    pub indicators: Vec<IndicatorDef>,
    #[serde(default)]
    pub context_rules: Vec<ContextRuleDef>,
    #[serde(default)]
    pub overrides: Vec<OverrideRuleDef>,
    #[serde(default)]
    pub combinations: Vec<CombinationRuleDef>,
    #[serde(default)]
    pub customizations: Vec<CustomizationDef>,
}

/// The independent signal lexicons the extractor intersects text against.
///
/// Indicator keywords and override terms are added to `general`, and
/// context-rule triggers to `complexity`, during compilation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyDef {
    pub general: Vec<String>,
    pub complexity: Vec<String>,
    /// Complexity signals that force the `complex` tier on their own.
    pub high_complexity: Vec<String>,
    pub technical: Vec<String>,
    pub integration: Vec<String>,
    /// Verb-like tokens that mark a sentence as a functional requirement.
    pub actions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorDef {
    pub pattern: PatternType,
    pub keyword: String,
    pub weight: f64,
    pub category: IndicatorCategory,
}

/// Boost a pattern's contextual indicators when any trigger signal co-occurs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextRuleDef {
    pub pattern: PatternType,
    pub triggers: Vec<String>,
    pub multiplier: f64,
}

/// Force a normalized score floor on a pattern when any term is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideRuleDef {
    pub pattern: PatternType,
    pub terms: Vec<String>,
    pub floor: f64,
}

/// Flag two co-dominant patterns as a named hybrid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationRuleDef {
    pub name: String,
    pub first: PatternType,
    pub second: PatternType,
    pub min_normalized: f64,
    pub max_divergence: f64,
}

/// Static checklist handed to the user for a pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationDef {
    pub pattern: PatternType,
    pub items: Vec<String>,
}

impl LexiconDef {
    /// Parse a lexicon definition from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, LexiconLoadError> {
        toml::from_str(toml_str).map_err(|e| LexiconLoadError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Parse a lexicon definition from a file.
    pub fn from_file(path: &Path) -> Result<Self, LexiconLoadError> {
        let content = std::fs::read_to_string(path).map_err(|_| LexiconLoadError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| LexiconLoadError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize back to TOML, e.g. to export the built-in table for editing.
    pub fn to_toml(&self) -> Result<String, LexiconLoadError> {
        toml::to_string_pretty(self).map_err(|e| LexiconLoadError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Indicators declared for one pattern, in declaration order.
    pub fn indicators_for(&self, pattern: PatternType) -> impl Iterator<Item = &IndicatorDef> {
        self.indicators.iter().filter(move |i| i.pattern == pattern)
    }
}

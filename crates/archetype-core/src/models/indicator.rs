use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pattern::PatternType;

/// How strongly an indicator's keyword points at its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorCategory {
    /// Near-unambiguous vocabulary for the pattern.
    Primary,
    /// Supporting vocabulary.
    Secondary,
    /// Only meaningful alongside a trigger complexity signal; eligible for
    /// the context multiplier.
    Contextual,
}

impl IndicatorCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Contextual => "contextual",
        }
    }
}

impl fmt::Display for IndicatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single weighted keyword signal tied to one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub pattern: PatternType,
    pub keyword: String,
    pub weight: f64,
    pub category: IndicatorCategory,
}

impl Indicator {
    pub fn new(
        pattern: PatternType,
        keyword: impl Into<String>,
        weight: f64,
        category: IndicatorCategory,
    ) -> Self {
        Self {
            pattern,
            keyword: keyword.into(),
            weight,
            category,
        }
    }

    pub fn is_contextual(&self) -> bool {
        self.category == IndicatorCategory::Contextual
    }
}

//! Lexicon source configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Path to a lexicon TOML file. The built-in table is used when unset.
    pub path: Option<String>,
}

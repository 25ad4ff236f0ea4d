//! # archetype-lexicon
//!
//! The static, versioned pattern indicator table and the signal vocabularies
//! the extractor intersects text against.
//!
//! A lexicon is authored as a [`LexiconDef`] (built in, or TOML on disk),
//! validated and compiled once into an immutable, interned [`Lexicon`], and
//! shared through a [`LexiconStore`] that swaps whole lexicons atomically.

pub mod builtin;
pub mod definition;
pub mod interning;
pub mod lexicon;
pub mod store;
pub mod text;
pub mod validation;

pub use definition::{
    CombinationRuleDef, ContextRuleDef, CustomizationDef, IndicatorDef, LexiconDef,
    OverrideRuleDef, VocabularyDef,
};
pub use interning::KeywordId;
pub use lexicon::{CombinationRule, CompiledIndicator, ContextRule, Lexicon, OverrideRule};
pub use store::LexiconStore;

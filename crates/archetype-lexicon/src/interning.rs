//! Keyword interning.
//!
//! Terms are interned with `lasso::ThreadedRodeo` while a lexicon is being
//! compiled, then frozen into a `lasso::RodeoReader` for contention-free
//! reads. Indicator and rule tables refer to terms by [`KeywordId`] only.

use lasso::{RodeoReader, Spur, ThreadedRodeo};

/// Interned identifier of a lexicon term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeywordId(Spur);

/// Build-phase interner for lexicon terms.
pub struct TermInterner {
    inner: ThreadedRodeo,
}

impl TermInterner {
    pub fn new() -> Self {
        Self {
            inner: ThreadedRodeo::default(),
        }
    }

    /// Intern a term that is already in canonical form.
    pub fn intern(&self, term: &str) -> KeywordId {
        KeywordId(self.inner.get_or_intern(term))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Freeze into a read-only table.
    pub fn freeze(self) -> FrozenTerms {
        FrozenTerms {
            reader: self.inner.into_reader(),
        }
    }
}

impl Default for TermInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only term table of a compiled lexicon.
pub struct FrozenTerms {
    reader: RodeoReader,
}

impl FrozenTerms {
    pub fn get(&self, term: &str) -> Option<KeywordId> {
        self.reader.get(term).map(KeywordId)
    }

    pub fn resolve(&self, id: KeywordId) -> &str {
        self.reader.resolve(&id.0)
    }

    pub fn len(&self) -> usize {
        self.reader.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }
}

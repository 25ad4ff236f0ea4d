//! Atomic lexicon hand-off between loaders and scorers.
//!
//! A scoring call takes one snapshot and uses it for the whole call, so it
//! sees either the old lexicon or the new one, never a mix. Replacing is
//! RCU-style: readers holding an old snapshot keep it alive until they drop it.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::lexicon::Lexicon;

/// Holds the currently active lexicon.
pub struct LexiconStore {
    current: ArcSwap<Lexicon>,
}

impl LexiconStore {
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            current: ArcSwap::from_pointee(lexicon),
        }
    }

    /// The active lexicon. Cheap; hold it for the duration of one call.
    pub fn snapshot(&self) -> Arc<Lexicon> {
        self.current.load_full()
    }

    /// Atomically install `lexicon`, returning the one it replaced.
    pub fn replace(&self, lexicon: Lexicon) -> Arc<Lexicon> {
        let next = Arc::new(lexicon);
        let version = next.version().to_string();
        let previous = self.current.swap(next);
        tracing::info!(from = %previous.version(), to = %version, "lexicon replaced");
        previous
    }

    pub fn version(&self) -> String {
        self.current.load().version().to_string()
    }
}

impl std::fmt::Debug for LexiconStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexiconStore")
            .field("version", &self.version())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definition::LexiconDef;

    fn with_version(version: &str) -> Lexicon {
        let mut def = LexiconDef::builtin();
        def.version = version.to_string();
        Lexicon::compile(def).unwrap()
    }

    #[test]
    fn replace_returns_previous_and_old_snapshots_survive() {
        let store = LexiconStore::new(with_version("v1"));
        let held = store.snapshot();
        let previous = store.replace(with_version("v2"));

        assert_eq!(previous.version(), "v1");
        assert_eq!(held.version(), "v1");
        assert_eq!(store.version(), "v2");
        assert_eq!(store.snapshot().version(), "v2");
    }
}

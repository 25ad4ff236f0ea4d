//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

/// SmallVec sized for per-keyword indicator lists (a keyword rarely
/// indicates more than a few patterns).
pub type SmallVec4<T> = SmallVec<[T; 4]>;

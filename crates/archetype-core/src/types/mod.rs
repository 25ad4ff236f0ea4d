//! Performance-oriented collection types shared across the workspace.

pub mod collections;

pub use collections::{FxHashMap, FxHashSet, SmallVec, SmallVec4};

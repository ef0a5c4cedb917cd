//! Collaborator traits for the recommender.
//!
//! The recommender owns no storage of its own. It is wired to three
//! collaborators, each behind a small trait so that tests (and other hosts)
//! can swap in their own implementations:
//!
//! - [`ReadOnlyDao`]: id -> item lookup (the catalog)
//! - [`RecencyTracker`]: bounded history of watched items
//! - [`RandomSource`]: uniform index generator

use std::fmt;

/// Read-only key to value lookup.
///
/// Implementations must be deterministic for a fixed data set.
pub trait ReadOnlyDao<K, V> {
    /// Returns the value for `key`, or `None` if it does not exist
    fn get(&self, key: &K) -> Option<&V>;
}

/// Bounded, insertion-ordered container of recently added items.
///
/// Index `0` is the oldest entry and `size() - 1` the most recent. The
/// eviction policy on overflow belongs to the implementation.
pub trait RecencyTracker<T> {
    /// Append an item, evicting the oldest entry if the tracker is full
    fn add(&mut self, item: T);

    /// Returns the item at `index`, or `None` when `index >= size()`
    fn get(&self, index: usize) -> Option<&T>;

    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Returns an index uniformly distributed in `[0, bound)`.
    ///
    /// Callers guarantee `bound > 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// An item that may point at one other "most similar" item
pub trait SimilarItem {
    type Id: Copy + fmt::Display + fmt::Debug;

    fn id(&self) -> Self::Id;

    /// The id of the most similar item, which may no longer exist
    fn most_similar_id(&self) -> Option<Self::Id>;
}

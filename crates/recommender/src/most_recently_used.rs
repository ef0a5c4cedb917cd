//! Bounded most-recently-used history.

use crate::error::{RecommenderError, Result};
use crate::traits::RecencyTracker;
use std::collections::VecDeque;

/// Fixed-capacity history that drops its oldest entry on overflow.
///
/// Duplicates are kept: watching the same video twice records it twice.
#[derive(Debug, Clone)]
pub struct MostRecentlyUsed<T> {
    capacity: usize,
    items: VecDeque<T>,
}

impl<T> MostRecentlyUsed<T> {
    /// Create an empty history holding at most `capacity` items
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RecommenderError::InvalidCapacity { capacity });
        }
        Ok(Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The item added last, if any
    pub fn most_recent(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterate from oldest to most recent
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T> RecencyTracker<T> for MostRecentlyUsed<T> {
    fn add(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(item);
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn size(&self) -> usize {
        self.items.len()
    }
}

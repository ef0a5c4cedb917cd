//! Error types for the recommender crate.

use thiserror::Error;

/// Errors returned by the recommender and its collaborators.
///
/// A missing recommendation is not an error: `get_recommendation` returns
/// `None` for that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommenderError {
    /// `watch` was called with an id the catalog does not know
    #[error("Invalid argument: item {id} does not exist")]
    InvalidArgument { id: String },

    /// A recency tracker must be able to hold at least one item
    #[error("Invalid capacity {capacity}: must be at least 1")]
    InvalidCapacity { capacity: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommenderError>;

//! Settings used to build a [`VideoRecommender`].

use crate::error::Result;
use crate::most_recently_used::MostRecentlyUsed;
use crate::random::RngSource;
use crate::recommender::{Recommender, VideoRecommender};
use catalog::VideoCatalog;
use std::sync::Arc;
use tracing::info;

/// Default number of watched videos remembered
pub const DEFAULT_HISTORY_CAPACITY: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommenderConfig {
    /// How many recently watched videos are remembered
    pub capacity: usize,
    /// Fixed seed for reproducible picks; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_HISTORY_CAPACITY,
            seed: None,
        }
    }
}

impl RecommenderConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a recommender over `catalog` with an empty watch history
    pub fn build(&self, catalog: Arc<VideoCatalog>) -> Result<VideoRecommender> {
        let history = MostRecentlyUsed::new(self.capacity)?;
        let random = match self.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_os(),
        };
        info!(
            capacity = self.capacity,
            seeded = self.seed.is_some(),
            "Built video recommender"
        );
        Ok(Recommender::new(history, catalog, random))
    }
}

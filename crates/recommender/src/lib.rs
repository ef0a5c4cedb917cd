//! # Recommender Crate
//!
//! Recommends a video based on the most recently watched videos.
//!
//! ## Components
//!
//! - **traits**: collaborator seams (`ReadOnlyDao`, `RecencyTracker`,
//!   `RandomSource`, `SimilarItem`)
//! - **most_recently_used**: bounded watch history
//! - **random**: `rand`-backed random source
//! - **recommender**: `watch` and `get_recommendation`
//! - **config**: builds a `VideoRecommender` from settings
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::VideoCatalog;
//! use recommender::RecommenderConfig;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(VideoCatalog::load_from_file("data/videos.dat".as_ref())?);
//! let mut recommender = RecommenderConfig::default().with_seed(7).build(catalog)?;
//!
//! recommender.watch(1)?;
//! recommender.watch(3)?;
//!
//! match recommender.get_recommendation() {
//!     Some(video) => println!("Watch next: {}", video.title),
//!     None => println!("No recommendation"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod most_recently_used;
pub mod random;
pub mod recommender;
pub mod traits;
mod video;

pub use config::{RecommenderConfig, DEFAULT_HISTORY_CAPACITY};
pub use error::{RecommenderError, Result};
pub use most_recently_used::MostRecentlyUsed;
pub use random::RngSource;
pub use recommender::{scan_order, Recommender, VideoRecommender};
pub use traits::{RandomSource, ReadOnlyDao, RecencyTracker, SimilarItem};

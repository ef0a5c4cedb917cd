//! Core domain types for the video catalog.
//!
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (VideoId)
//! - `Option<T>` for a reference that may be missing
//! - HashMap for O(1) lookups
//! - Borrowing: getters return `&T` instead of cloning

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a video in the catalog
pub type VideoId = u64;

// =============================================================================
// Video
// =============================================================================

/// A video in the catalog.
///
/// `most_similar_id` is a precomputed pointer to a single other video. It is
/// never followed transitively and may point at an id that is no longer in
/// the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    /// Year extracted from the title, e.g. "The Grand Tour (2016)"
    pub year: Option<u16>,
    pub most_similar_id: Option<VideoId>,
}

impl Video {
    /// Create a video with no year and no similar video
    pub fn new(id: VideoId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            year: None,
            most_similar_id: None,
        }
    }

    /// Set the most similar video (builder pattern)
    pub fn with_most_similar(mut self, similar_id: VideoId) -> Self {
        self.most_similar_id = Some(similar_id);
        self
    }

    /// Set the release year (builder pattern)
    pub fn with_year(mut self, year: u16) -> Self {
        self.year = Some(year);
        self
    }
}

// =============================================================================
// VideoCatalog - The In-Memory Store
// =============================================================================

/// Read-only (once loaded) store of every known video.
///
/// Shared between consumers as `Arc<VideoCatalog>`; nothing mutates it after
/// loading, so no locking is needed.
#[derive(Debug, Default)]
pub struct VideoCatalog {
    pub(crate) videos: HashMap<VideoId, Video>,
}

impl VideoCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Get a video by ID
    ///
    /// Returns `None` when the id is unknown
    pub fn get_video(&self, id: VideoId) -> Option<&Video> {
        self.videos.get(&id)
    }

    /// Whether the catalog knows this id
    pub fn contains(&self, id: VideoId) -> bool {
        self.videos.contains_key(&id)
    }

    /// Insert a video, replacing any previous video with the same id.
    ///
    /// Returns the replaced video, if any.
    pub fn insert_video(&mut self, video: Video) -> Option<Video> {
        self.videos.insert(video.id, video)
    }

    /// All video ids, sorted ascending
    pub fn video_ids(&self) -> Vec<VideoId> {
        let mut ids: Vec<VideoId> = self.videos.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

impl FromIterator<Video> for VideoCatalog {
    fn from_iter<I: IntoIterator<Item = Video>>(iter: I) -> Self {
        let mut catalog = VideoCatalog::new();
        for video in iter {
            catalog.insert_video(video);
        }
        catalog
    }
}

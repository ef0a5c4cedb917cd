//! Catalog loading, validation and queries.
//!
//! Building a catalog happens in two steps:
//! 1. Parse the data file (in parallel, see `parser`)
//! 2. Insert videos in file order, rejecting duplicate ids
//!
//! Dangling `most_similar_id` references are allowed by the data model, so
//! validation only reports them.

use crate::error::{CatalogError, Result};
use crate::parser::{self, ParsedVideo};
use crate::types::{Video, VideoCatalog, VideoId};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// A similar-video reference that does not resolve in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DanglingReference {
    pub video_id: VideoId,
    pub missing_id: VideoId,
}

impl VideoCatalog {
    /// Load a catalog from a videos.dat file
    #[instrument(skip(path), fields(path = %path.display()))]
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading video catalog from {:?}", path);

        let parsed = parser::parse_videos(path)?;
        let catalog = Self::from_parsed(parsed)?;

        let dangling = catalog.dangling_references();
        if !dangling.is_empty() {
            warn!(
                "{} videos reference a most similar video that is not in the catalog",
                dangling.len()
            );
        }

        info!("Loaded {} videos", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from parsed lines, failing on the first duplicate id
    pub fn from_parsed(parsed: Vec<ParsedVideo>) -> Result<Self> {
        let mut catalog = VideoCatalog::new();
        for ParsedVideo { line, video } in parsed {
            let id = video.id;
            if catalog.contains(id) {
                return Err(CatalogError::DuplicateId { id, line });
            }
            catalog.insert_video(video);
        }
        debug!("Built catalog with {} videos", catalog.len());
        Ok(catalog)
    }

    /// Every similar-video reference that does not resolve, sorted by video id
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling: Vec<DanglingReference> = self
            .videos
            .values()
            .filter_map(|video| {
                let missing_id = video.most_similar_id?;
                (!self.contains(missing_id)).then_some(DanglingReference {
                    video_id: video.id,
                    missing_id,
                })
            })
            .collect();
        dangling.sort_unstable_by_key(|d| d.video_id);
        dangling
    }

    /// Case-insensitive title search.
    ///
    /// Exact title matches come first, then substring matches; ties are
    /// broken by id so the output is stable.
    pub fn search_title(&self, query: &str) -> Vec<&Video> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(u8, &Video)> = self
            .videos
            .values()
            .filter_map(|video| {
                let title = video.title.to_lowercase();
                if title == query {
                    Some((0, video))
                } else if title.contains(&query) {
                    Some((1, video))
                } else {
                    None
                }
            })
            .collect();

        matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.id.cmp(&b.1.id)));
        matches.into_iter().map(|(_, video)| video).collect()
    }
}

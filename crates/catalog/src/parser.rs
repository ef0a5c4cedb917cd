//! Parser for the videos.dat catalog file.
//!
//! Format, one video per line:
//!
//! ```text
//! videoId::title::mostSimilarId
//! ```
//!
//! `mostSimilarId` may be empty when the video has no similar video. Blank
//! lines and lines starting with `#` are ignored.

use crate::error::{CatalogError, Result};
use crate::types::{Video, VideoId};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

const FILE_NAME: &str = "videos.dat";
const FIELD_COUNT: usize = 3;

/// A parsed video together with the line it came from.
///
/// The line number is kept so that validation can point at the offending
/// line (e.g. for duplicate ids).
#[derive(Debug, Clone)]
pub struct ParsedVideo {
    pub line: usize,
    pub video: Video,
}

/// Parse an entire videos.dat file.
///
/// Lines are parsed in parallel with Rayon; the result keeps file order.
pub fn parse_videos(path: &Path) -> Result<Vec<ParsedVideo>> {
    let content = fs::read_to_string(path)?;
    parse_videos_str(&content)
}

/// Parse the contents of a videos.dat file that is already in memory
pub fn parse_videos_str(content: &str) -> Result<Vec<ParsedVideo>> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    // Collecting into Result<Vec<_>> stops at the first error
    lines
        .par_iter()
        .map(|&(line_no, line)| {
            parse_video_line(line, line_no).map(|video| ParsedVideo {
                line: line_no,
                video,
            })
        })
        .collect()
}

/// Parse a single `id::title::most_similar_id` line
pub fn parse_video_line(line: &str, line_no: usize) -> Result<Video> {
    let parts: Vec<&str> = line.split("::").collect();
    if parts.len() != FIELD_COUNT {
        return Err(CatalogError::FieldCountMismatch {
            expected: FIELD_COUNT,
            found: parts.len(),
            line: line_no,
        });
    }

    let id = parse_id(parts[0], "videoId", line_no)?;

    let title = parts[1].trim();
    if title.is_empty() {
        return Err(CatalogError::ParseError {
            file: FILE_NAME.to_string(),
            line: line_no,
            reason: "Missing title".to_string(),
        });
    }

    let similar = parts[2].trim();
    let most_similar_id = if similar.is_empty() {
        None
    } else {
        Some(parse_id(similar, "mostSimilarId", line_no)?)
    };

    Ok(Video {
        id,
        title: title.to_string(),
        year: extract_year(title),
        most_similar_id,
    })
}

fn parse_id(raw: &str, field: &str, line_no: usize) -> Result<VideoId> {
    raw.trim()
        .parse::<VideoId>()
        .map_err(|e| CatalogError::ParseError {
            file: FILE_NAME.to_string(),
            line: line_no,
            reason: format!("Invalid {} '{}': {}", field, raw.trim(), e),
        })
}

/// Extract a trailing "(YYYY)" year from a title.
///
/// "Top Gear (2002)" -> Some(2002), "Top Gear" -> None
pub fn extract_year(title: &str) -> Option<u16> {
    let inner = title.trim_end().strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let digits = &inner[open + 1..];
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

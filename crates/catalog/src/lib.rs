//! # Catalog Crate
//!
//! This crate holds the video catalog: the read-only id-to-video store that
//! the recommender resolves watched and similar videos against.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (VideoId, Video, VideoCatalog)
//! - **parser**: Parse videos.dat into Rust structs
//! - **index**: Build and validate the catalog, title search
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::VideoCatalog;
//! use std::path::Path;
//!
//! let catalog = VideoCatalog::load_from_file(Path::new("data/videos.dat"))?;
//! let video = catalog.get_video(1).unwrap();
//! println!("{} -> {:?}", video.title, video.most_similar_id);
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use index::DanglingReference;
pub use types::{Video, VideoCatalog, VideoId};

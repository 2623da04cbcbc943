//! Instagram Downloader - download the media of an Instagram post as a zip archive.
//!
//! # Features
//!
//! - Resolve a post URL to its images and videos (single posts and carousels)
//! - Download every item or a chosen subset
//! - Pack the downloaded items into one in-memory zip archive
//! - Load item previews for selection
//! - Partial downloads: failed items are reported, the rest is archived
//!
//! # Example
//!
//! ```no_run
//! use instagram_downloader::{
//!     config::parse_shortcode, download::DownloadOptions, download_full, Config, InstagramApi,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let api = InstagramApi::new(&config.api)?;
//!
//!     let shortcode = parse_shortcode("https://www.instagram.com/p/Cabc123/")?;
//!     let media = api.resolve(&shortcode).await?;
//!
//!     let outcome = download_full(&api, &media, &DownloadOptions::new("instagram_media")).await?;
//!     let archive = outcome.into_result()?;
//!     std::fs::write(&archive.file_name, &archive.data)?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod archive;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::{InstagramApi, MediaFetcher};
pub use archive::{pack, unpack, Archive, ArchiveBundle};
pub use config::{Config, DownloadMode};
pub use download::{download_full, download_selected, DownloadOutcome, SelectionSet, Session};
pub use error::{Error, Result};
pub use media::{MediaDescriptor, MediaKind, MediaSource, PostMediaSet};

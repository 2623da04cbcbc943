//! Download module.
//!
//! This module provides:
//! - Session state and item selection
//! - Fetching items into an archive bundle
//! - Full and selective post downloads
//! - Download outcomes and statistics

pub mod media;
pub mod outcome;
pub mod post;
pub mod selection;
pub mod state;

pub use media::{fetch_items, DownloadOptions, FetchReport};
pub use outcome::{DownloadOutcome, FetchFailure};
pub use post::{download_full, download_selected};
pub use selection::SelectionSet;
pub use state::{DownloadStats, Session};

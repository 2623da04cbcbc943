//! Configuration module for the instagram-downloader.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Download modes and archive names
//! - Configuration validation and input parsing

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{ApiConfig, Config, OptionsConfig};
pub use modes::{DownloadMode, FULL_ARCHIVE_NAME, SELECTED_ARCHIVE_NAME};
pub use validation::{parse_selection, parse_shortcode, validate_config, IndexSelection};

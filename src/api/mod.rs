//! Instagram API module.
//!
//! This module provides:
//! - HTTP client resolving post metadata
//! - The byte fetching abstraction used for downloads and previews
//! - API response types

pub mod client;
pub mod fetcher;
pub mod types;

pub use client::InstagramApi;
pub use fetcher::MediaFetcher;

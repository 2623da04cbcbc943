//! Archive module.
//!
//! Provides:
//! - The in-memory bundle of named files
//! - Zip packing and unpacking
//! - The finished archive handed to the front end

pub mod bundle;
pub mod packer;

pub use bundle::{ArchiveBundle, ArchiveEntry};
pub use packer::{pack, unpack};

/// MIME type of produced archives.
pub const ARCHIVE_MIME_TYPE: &str = "application/zip";

/// A finished archive ready to be offered for download.
#[derive(Debug, Clone)]
pub struct Archive {
    /// Suggested file name for the download.
    pub file_name: String,

    /// Names of the packed entries, in archive order.
    pub entries: Vec<String>,

    /// Complete zip content.
    pub data: Vec<u8>,
}

impl Archive {
    pub fn mime_type(&self) -> &'static str {
        ARCHIVE_MIME_TYPE
    }
}

//! Download mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Archive name used for full downloads.
pub const FULL_ARCHIVE_NAME: &str = "instagram_downloads.zip";

/// Archive name used for selective downloads.
pub const SELECTED_ARCHIVE_NAME: &str = "instagram_selected_downloads.zip";

/// Available download modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMode {
    /// Download every item of the post (default).
    #[default]
    Full,
    /// Download only the selected items.
    Selective,
    /// List the items and load previews without downloading.
    Preview,
}

impl DownloadMode {
    /// Name of the archive produced in this mode.
    pub fn archive_file_name(&self) -> Option<&'static str> {
        match self {
            DownloadMode::Full => Some(FULL_ARCHIVE_NAME),
            DownloadMode::Selective => Some(SELECTED_ARCHIVE_NAME),
            DownloadMode::Preview => None,
        }
    }
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Full => write!(f, "full"),
            DownloadMode::Selective => write!(f, "selective"),
            DownloadMode::Preview => write!(f, "preview"),
        }
    }
}

impl FromStr for DownloadMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(DownloadMode::Full),
            "selective" => Ok(DownloadMode::Selective),
            "preview" => Ok(DownloadMode::Preview),
            _ => Err(format!("Unknown download mode: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_file_name() {
        assert_eq!(
            DownloadMode::Full.archive_file_name(),
            Some("instagram_downloads.zip")
        );
        assert_eq!(
            DownloadMode::Selective.archive_file_name(),
            Some("instagram_selected_downloads.zip")
        );
        assert_eq!(DownloadMode::Preview.archive_file_name(), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("FULL".parse::<DownloadMode>(), Ok(DownloadMode::Full));
        assert_eq!(
            "selective".parse::<DownloadMode>(),
            Ok(DownloadMode::Selective)
        );
        assert!("everything".parse::<DownloadMode>().is_err());
    }
}

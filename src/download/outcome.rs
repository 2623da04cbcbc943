//! Results of a download action.

use crate::archive::Archive;
use crate::download::state::DownloadStats;
use crate::error::{Error, Result};

/// One item that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub index: usize,
    pub url: String,
    pub reason: String,
}

/// How a full or selective download ended.
#[derive(Debug)]
pub enum DownloadOutcome {
    /// The post resolved to zero items.
    NoMedia,
    /// Selective mode was asked to download an empty selection.
    NothingSelected,
    /// Every fetch failed; no archive was produced.
    Failed { failures: Vec<FetchFailure> },
    /// Some items failed; the archive holds the rest.
    Partial {
        archive: Archive,
        stats: DownloadStats,
        failures: Vec<FetchFailure>,
    },
    /// Every item made it into the archive.
    Complete {
        archive: Archive,
        stats: DownloadStats,
    },
}

impl DownloadOutcome {
    pub fn archive(&self) -> Option<&Archive> {
        match self {
            DownloadOutcome::Partial { archive, .. } | DownloadOutcome::Complete { archive, .. } => {
                Some(archive)
            }
            _ => None,
        }
    }

    pub fn failures(&self) -> &[FetchFailure] {
        match self {
            DownloadOutcome::Failed { failures } | DownloadOutcome::Partial { failures, .. } => {
                failures
            }
            _ => &[],
        }
    }

    /// Collapse into the archive, turning every non-archive outcome into an error.
    pub fn into_result(self) -> Result<Archive> {
        match self {
            DownloadOutcome::Partial { archive, .. } | DownloadOutcome::Complete { archive, .. } => {
                Ok(archive)
            }
            DownloadOutcome::NoMedia => Err(Error::Resolution(
                "No downloadable media found in this post".to_string(),
            )),
            DownloadOutcome::NothingSelected => Err(Error::ConfigValidation {
                field: "selection".to_string(),
                message: "No items selected".to_string(),
            }),
            DownloadOutcome::Failed { .. } => Err(Error::EmptyBundle),
        }
    }
}

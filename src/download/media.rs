//! Fetching media items into an archive bundle.

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;

use crate::api::MediaFetcher;
use crate::archive::ArchiveBundle;
use crate::download::outcome::FetchFailure;
use crate::download::state::DownloadStats;
use crate::error::Error;
use crate::media::MediaDescriptor;

/// Settings shared by every download mode.
#[derive(Clone, Copy)]
pub struct DownloadOptions<'a> {
    /// Prefix of archive entry names.
    pub file_prefix: &'a str,

    /// Maximum number of items fetched at the same time.
    pub concurrency: usize,

    /// Bar advanced once per finished item.
    pub progress: Option<&'a ProgressBar>,
}

impl<'a> DownloadOptions<'a> {
    pub fn new(file_prefix: &'a str) -> Self {
        Self {
            file_prefix,
            concurrency: 1,
            progress: None,
        }
    }
}

/// What came back from fetching a batch of items.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub bundle: ArchiveBundle,
    pub stats: DownloadStats,
    pub failures: Vec<FetchFailure>,
}

/// Fetch each item's content; failed items are recorded and skipped.
///
/// Entries are added in the order of `items` regardless of concurrency.
pub async fn fetch_items(
    fetcher: &dyn MediaFetcher,
    items: &[&MediaDescriptor],
    options: &DownloadOptions<'_>,
) -> FetchReport {
    let progress = options.progress;

    let results: Vec<_> = stream::iter(items.iter().copied().map(|item| async move {
        let result = fetcher.fetch_bytes(item.source_url()).await;
        if let Some(pb) = progress {
            pb.inc(1);
        }
        (item, result)
    }))
    .buffered(options.concurrency.max(1))
    .collect()
    .await;

    let mut report = FetchReport::default();

    for (item, result) in results {
        match result {
            Ok(data) => {
                tracing::debug!("Fetched item {} ({} bytes)", item.index, data.len());
                report.stats.record(item.kind(), data.len());
                report
                    .bundle
                    .insert(item.file_name(options.file_prefix), data);
            }
            Err(e) => {
                tracing::warn!("Failed to download item {}: {}", item.index, e);
                let reason = match e {
                    Error::Fetch { reason, .. } => reason,
                    other => other.to_string(),
                };
                report.failures.push(FetchFailure {
                    index: item.index,
                    url: item.source_url().to_string(),
                    reason,
                });
            }
        }
    }

    report
}

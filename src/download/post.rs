//! Full and selective post downloads.

use crate::api::MediaFetcher;
use crate::archive::{pack, Archive};
use crate::config::{FULL_ARCHIVE_NAME, SELECTED_ARCHIVE_NAME};
use crate::download::media::{fetch_items, DownloadOptions, FetchReport};
use crate::download::outcome::DownloadOutcome;
use crate::download::selection::SelectionSet;
use crate::error::{Error, Result};
use crate::media::{MediaDescriptor, PostMediaSet};

/// Download every item of a post into one archive.
pub async fn download_full(
    fetcher: &dyn MediaFetcher,
    media: &PostMediaSet,
    options: &DownloadOptions<'_>,
) -> Result<DownloadOutcome> {
    if media.is_empty() {
        tracing::info!("No media found in post {}", media.shortcode);
        return Ok(DownloadOutcome::NoMedia);
    }

    tracing::info!(
        "Downloading all {} item(s) of post {}",
        media.len(),
        media.shortcode
    );

    let items: Vec<&MediaDescriptor> = media.iter().collect();
    let report = fetch_items(fetcher, &items, options).await;

    finish(report, FULL_ARCHIVE_NAME)
}

/// Download only the selected items of a post into one archive.
pub async fn download_selected(
    fetcher: &dyn MediaFetcher,
    media: &PostMediaSet,
    selection: &SelectionSet,
    options: &DownloadOptions<'_>,
) -> Result<DownloadOutcome> {
    if media.is_empty() {
        tracing::info!("No media found in post {}", media.shortcode);
        return Ok(DownloadOutcome::NoMedia);
    }

    if selection.is_empty() {
        return Ok(DownloadOutcome::NothingSelected);
    }

    let items = selection
        .iter()
        .map(|index| {
            media.get(index).ok_or(Error::InvalidSelection {
                index,
                len: media.len(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(
        "Downloading {} selected item(s) of post {}",
        items.len(),
        media.shortcode
    );

    let report = fetch_items(fetcher, &items, options).await;

    finish(report, SELECTED_ARCHIVE_NAME)
}

/// Pack whatever was fetched and classify the outcome.
fn finish(report: FetchReport, archive_name: &str) -> Result<DownloadOutcome> {
    let FetchReport {
        bundle,
        stats,
        failures,
    } = report;

    if bundle.is_empty() {
        tracing::warn!("None of the {} item(s) could be downloaded", failures.len());
        return Ok(DownloadOutcome::Failed { failures });
    }

    let entries: Vec<String> = bundle.names().map(str::to_string).collect();
    let data = pack(bundle)?;
    let archive = Archive {
        file_name: archive_name.to_string(),
        entries,
        data,
    };

    tracing::info!(
        "Packed {} item(s) into {} ({} bytes)",
        archive.entries.len(),
        archive.file_name,
        archive.data.len()
    );

    if failures.is_empty() {
        Ok(DownloadOutcome::Complete { archive, stats })
    } else {
        Ok(DownloadOutcome::Partial {
            archive,
            stats,
            failures,
        })
    }
}

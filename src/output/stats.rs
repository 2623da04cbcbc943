//! Reporting of post contents and download results.

use console::style;

use crate::download::{DownloadOutcome, DownloadStats, FetchFailure};
use crate::media::{MediaKind, PostMediaSet, Preview};

/// Print the items of a post, one line each.
pub fn print_media_list(media: &PostMediaSet) {
    println!();
    println!(
        "{}",
        style(format!(
            "Post {} ({} item(s): {} image(s), {} video(s))",
            media.shortcode,
            media.len(),
            media.count_kind(MediaKind::Image),
            media.count_kind(MediaKind::Video)
        ))
        .bold()
    );
    for item in media.iter() {
        println!(
            "  [{}] {:<5} {}",
            item.index,
            item.kind().to_string(),
            item.source_url()
        );
    }
}

/// Print the preview status of one item.
pub fn print_preview_line(index: usize, preview: &Preview) {
    match preview {
        Preview::Image { width, height, bytes } => println!(
            "  [{}] preview {}x{} ({} bytes)",
            index,
            width,
            height,
            bytes.len()
        ),
        Preview::Placeholder { kind, reason } => println!(
            "  [{}] {} {}",
            index,
            style(format!("{} placeholder:", kind)).yellow(),
            reason
        ),
    }
}

/// Print statistics for a finished archive.
pub fn print_download_stats(stats: &DownloadStats) {
    println!();
    println!("{}", style("Download Statistics:").bold());
    println!("  Images: {}", stats.image_count);
    println!("  Videos: {}", stats.video_count);
    println!("  Total:  {} item(s), {} bytes", stats.total_items(), stats.total_bytes);
}

/// Print the items that could not be fetched.
pub fn print_failures(failures: &[FetchFailure]) {
    if failures.is_empty() {
        return;
    }

    println!();
    println!(
        "{}",
        style(format!("{} item(s) failed:", failures.len())).red().bold()
    );
    for failure in failures {
        println!("  [{}] {} ({})", failure.index, failure.reason, failure.url);
    }
}

/// Print whatever an outcome has to report.
pub fn print_outcome(outcome: &DownloadOutcome) {
    match outcome {
        DownloadOutcome::Complete { stats, .. } => print_download_stats(stats),
        DownloadOutcome::Partial {
            stats, failures, ..
        } => {
            print_download_stats(stats);
            print_failures(failures);
        }
        DownloadOutcome::Failed { failures } => print_failures(failures),
        DownloadOutcome::NoMedia | DownloadOutcome::NothingSelected => {}
    }
}

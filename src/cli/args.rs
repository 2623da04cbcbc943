//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, DownloadMode};

/// Instagram post downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "instagram-downloader",
    version,
    about = "Download the images and videos of an Instagram post as a zip archive",
    long_about = "A CLI tool to download every item of an Instagram post, or a chosen subset, \
                  into a single zip archive.\n\n\
                  Supports single images, videos and multi-item carousel posts."
)]
pub struct Args {
    /// Post URL (https://www.instagram.com/p/<shortcode>/) or bare shortcode.
    pub url: String,

    /// Download mode.
    #[arg(long, value_enum, conflicts_with_all = ["select", "preview"])]
    pub mode: Option<DownloadModeArg>,

    /// Download only these items: comma-separated 0-based indices, or "all".
    #[arg(short, long, conflicts_with = "preview")]
    pub select: Option<String>,

    /// List the items and load their previews without downloading.
    #[arg(long)]
    pub preview: bool,

    /// Write preview images to the download directory (preview mode).
    #[arg(long)]
    pub save_previews: bool,

    /// Directory the archive is written to.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Prefix of the file names inside the archive.
    #[arg(long)]
    pub prefix: Option<String>,

    /// Number of items fetched at the same time.
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// HTTP timeout in seconds.
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Browser user agent string.
    #[arg(long = "user-agent", env = "INSTAGRAM_USER_AGENT")]
    pub user_agent: Option<String>,

    /// GraphQL document id of the post query.
    #[arg(long = "doc-id", env = "INSTAGRAM_DOC_ID")]
    pub doc_id: Option<String>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide download progress information.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI download mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DownloadModeArg {
    /// Download every item of the post.
    Full,
    /// Download the items chosen with --select or the config file.
    Selective,
    /// List items and previews only.
    Preview,
}

impl From<DownloadModeArg> for DownloadMode {
    fn from(arg: DownloadModeArg) -> Self {
        match arg {
            DownloadModeArg::Full => DownloadMode::Full,
            DownloadModeArg::Selective => DownloadMode::Selective,
            DownloadModeArg::Preview => DownloadMode::Preview,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    ///
    /// Returns the post URL, which is not part of the config.
    pub fn merge_into_config(self, config: &mut Config) -> String {
        if let Some(user_agent) = self.user_agent {
            config.api.user_agent = user_agent;
        }

        if let Some(doc_id) = self.doc_id {
            config.api.doc_id = doc_id;
        }

        if let Some(timeout) = self.timeout {
            config.api.timeout_seconds = timeout;
        }

        if let Some(dir) = self.download_directory {
            config.options.download_directory = Some(dir);
        }

        if let Some(prefix) = self.prefix {
            config.options.file_prefix = prefix;
        }

        if let Some(concurrency) = self.concurrency {
            config.options.concurrency = concurrency;
        }

        if let Some(mode) = self.mode {
            config.options.download_mode = mode.into();
        }

        // --select and --preview imply their mode
        if let Some(selection) = self.select {
            config.options.selection = Some(selection);
            config.options.download_mode = DownloadMode::Selective;
        }

        if self.preview {
            config.options.download_mode = DownloadMode::Preview;
        }

        if self.save_previews {
            config.options.save_previews = true;
        }

        if self.quiet {
            config.options.show_downloads = false;
        }

        self.url
    }
}

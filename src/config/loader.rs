//! Configuration structures and loading logic.

use crate::config::modes::DownloadMode;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Instagram endpoint settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the Instagram web API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Persisted GraphQL query ID for post metadata.
    #[serde(default = "default_doc_id")]
    pub doc_id: String,

    /// Web application ID sent as `X-IG-App-ID`.
    #[serde(default = "default_app_id")]
    pub app_id: String,

    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Download options configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Download mode (full, selective, preview).
    #[serde(default)]
    pub download_mode: DownloadMode,

    /// Directory the archive is written to.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Prefix of archive entry names.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Item indices for selective mode ("0,2" or "all").
    #[serde(default)]
    pub selection: Option<String>,

    /// Maximum number of items fetched at the same time.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Whether preview mode writes preview images to the download directory.
    #[serde(default)]
    pub save_previews: bool,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            doc_id: default_doc_id(),
            app_id: default_app_id(),
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            download_mode: DownloadMode::default(),
            download_directory: None,
            file_prefix: default_file_prefix(),
            selection: None,
            concurrency: default_concurrency(),
            save_previews: false,
            show_downloads: true,
        }
    }
}

fn default_base_url() -> String {
    "https://www.instagram.com".to_string()
}

fn default_doc_id() -> String {
    "8845758582119845".to_string()
}

fn default_app_id() -> String {
    "936619743392459".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/144.0.0.0 Safari/537.36".to_string()
}

fn default_timeout() -> u64 {
    60
}

fn default_file_prefix() -> String {
    "instagram_media".to_string()
}

fn default_concurrency() -> usize {
    1
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}

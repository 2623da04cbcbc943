//! Output paths for archives and previews.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::next_free_path;

/// Write bytes to `file_name` inside the download directory without
/// overwriting an existing file. Returns the path actually written.
pub fn write_output_file(config: &Config, file_name: &str, data: &[u8]) -> Result<PathBuf> {
    let dir = config.download_directory();
    ensure_dir(&dir)?;

    let path = next_free_path(&dir.join(file_name))?;
    std::fs::write(&path, data)?;
    tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());

    Ok(path)
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_file_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.options.download_directory = Some(dir.path().join("out"));

        let first = write_output_file(&config, "instagram_downloads.zip", b"one").unwrap();
        let second = write_output_file(&config, "instagram_downloads.zip", b"two").unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read(&first).unwrap(), b"one");
        assert_eq!(std::fs::read(&second).unwrap(), b"two");
    }
}

//! Entry name prefixes and collision-free output names.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Highest suffix tried before giving up on finding a free name.
const MAX_NAME_SUFFIX: u32 = 9999;

/// Check a user-supplied entry name prefix and replace characters that are
/// not portable in file names.
///
/// Anything that could escape the archive root or the download directory
/// is rejected rather than rewritten.
pub fn sanitize_prefix(prefix: &str) -> Result<String> {
    let reject = |why: &str| Err(Error::InvalidFilename(format!("{}: '{}'", why, prefix)));

    if prefix.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Prefix cannot be empty or whitespace-only".to_string(),
        ));
    }
    if prefix.contains("..") || prefix.starts_with('.') {
        return reject("Relative path components not allowed");
    }
    if prefix.contains(['/', '\\']) {
        return reject("Path separators not allowed");
    }
    if prefix.contains('\0') {
        return reject("Null bytes not allowed");
    }

    Ok(prefix
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect())
}

/// First path that does not exist yet: `path` itself, then
/// `stem_1.ext`, `stem_2.ext`, ...
pub fn next_free_path(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
    let ext = path.extension().and_then(|e| e.to_str());
    let parent = path.parent().unwrap_or(Path::new("."));

    (1..=MAX_NAME_SUFFIX)
        .map(|n| match ext {
            Some(ext) => parent.join(format!("{}_{}.{}", stem, n, ext)),
            None => parent.join(format!("{}_{}", stem, n)),
        })
        .find(|candidate| !candidate.exists())
        .ok_or_else(|| {
            Error::InvalidFilename(format!("No free file name left for {}", path.display()))
        })
}

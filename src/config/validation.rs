//! Configuration validation and input parsing.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::config::loader::Config;
use crate::config::modes::DownloadMode;
use crate::error::{Error, Result};
use crate::fs::sanitize_prefix;

/// Maximum number of parallel item fetches.
const MAX_CONCURRENCY: usize = 16;

/// Path segments that precede a post shortcode.
const POST_PATH_MARKERS: [&str; 4] = ["p", "reel", "reels", "tv"];

static SHORTCODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid shortcode pattern"));

/// Item indices requested for selective mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSelection {
    All,
    Indices(Vec<usize>),
}

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_base_url(&config.api.base_url)?;

    if config.api.timeout_seconds == 0 {
        return Err(Error::ConfigValidation {
            field: "timeout_seconds".to_string(),
            message: "Timeout must be at least 1 second".to_string(),
        });
    }

    if config.options.concurrency == 0 || config.options.concurrency > MAX_CONCURRENCY {
        return Err(Error::ConfigValidation {
            field: "concurrency".to_string(),
            message: format!(
                "Concurrency must be between 1 and {} (got {})",
                MAX_CONCURRENCY, config.options.concurrency
            ),
        });
    }

    sanitize_prefix(&config.options.file_prefix).map_err(|e| Error::ConfigValidation {
        field: "file_prefix".to_string(),
        message: e.to_string(),
    })?;

    if config.options.download_mode == DownloadMode::Selective {
        let selection = config.options.selection.as_deref().ok_or_else(|| {
            Error::ConfigValidation {
                field: "selection".to_string(),
                message: "Selective mode requires a selection (e.g. \"0,2\" or \"all\")"
                    .to_string(),
            }
        })?;
        parse_selection(selection)?;
    }

    Ok(())
}

/// Validate the API base URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::ConfigValidation {
            field: "base_url".to_string(),
            message: format!("Unsupported URL scheme: {}", url.scheme()),
        });
    }
    Ok(())
}

/// Extract a post shortcode from a post URL or a bare shortcode.
///
/// Recognizes `/p/`, `/reel/`, `/reels/` and `/tv/` links, with or without a
/// profile prefix, trailing slash or query string. Other URLs fall back to
/// their last path segment.
pub fn parse_shortcode(input: &str) -> Result<String> {
    let input = input.trim();

    if input.is_empty() {
        return Err(Error::Resolution("No post URL given".to_string()));
    }

    let candidate = if input.contains('/') {
        let url = if input.starts_with("http://") || input.starts_with("https://") {
            Url::parse(input)
        } else {
            Url::parse(&format!("https://{}", input))
        }
        .map_err(|e| Error::Resolution(format!("Invalid post URL '{}': {}", input, e)))?;

        let segments: Vec<&str> = url
            .path_segments()
            .map(|segments| segments.filter(|s| !s.is_empty()).collect())
            .unwrap_or_default();

        let shortcode = match segments
            .iter()
            .position(|segment| POST_PATH_MARKERS.contains(segment))
        {
            Some(pos) => segments.get(pos + 1),
            None => segments.last(),
        };

        shortcode
            .map(|s| s.to_string())
            .ok_or_else(|| {
                Error::Resolution(format!("Could not find a post shortcode in '{}'", input))
            })?
    } else {
        input.to_string()
    };

    if !SHORTCODE_PATTERN.is_match(&candidate) {
        return Err(Error::Resolution(format!(
            "Invalid post shortcode: '{}'",
            candidate
        )));
    }

    Ok(candidate)
}

/// Parse a selection such as `"0,2"`, `"1 3"` or `"all"`.
pub fn parse_selection(input: &str) -> Result<IndexSelection> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("all") {
        return Ok(IndexSelection::All);
    }

    let indices = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>().map_err(|_| Error::ConfigValidation {
                field: "selection".to_string(),
                message: format!("'{}' is not a valid item index", part),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if indices.is_empty() {
        return Err(Error::ConfigValidation {
            field: "selection".to_string(),
            message: "Selection is empty".to_string(),
        });
    }

    Ok(IndexSelection::Indices(indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shortcode_post_url() {
        assert_eq!(
            parse_shortcode("https://www.instagram.com/p/CxYz123_-a/").unwrap(),
            "CxYz123_-a"
        );
        assert_eq!(
            parse_shortcode("https://www.instagram.com/p/CxYz123").unwrap(),
            "CxYz123"
        );
        assert_eq!(
            parse_shortcode("https://www.instagram.com/p/CxYz123/?igsh=abc&img_index=2").unwrap(),
            "CxYz123"
        );
    }

    #[test]
    fn test_parse_shortcode_reel_and_profile_urls() {
        assert_eq!(
            parse_shortcode("https://www.instagram.com/reel/DAbc987/").unwrap(),
            "DAbc987"
        );
        assert_eq!(
            parse_shortcode("https://instagram.com/someone/p/DAbc987/").unwrap(),
            "DAbc987"
        );
        assert_eq!(parse_shortcode("instagram.com/tv/B1c2d3/").unwrap(), "B1c2d3");
    }

    #[test]
    fn test_parse_shortcode_fallback_segment() {
        assert_eq!(
            parse_shortcode("https://example.com/share/Zq9/").unwrap(),
            "Zq9"
        );
    }

    #[test]
    fn test_parse_shortcode_bare() {
        assert_eq!(parse_shortcode("  CxYz123 ").unwrap(), "CxYz123");
    }

    #[test]
    fn test_parse_shortcode_invalid() {
        assert!(matches!(parse_shortcode(""), Err(Error::Resolution(_))));
        assert!(matches!(
            parse_shortcode("https://www.instagram.com/"),
            Err(Error::Resolution(_))
        ));
        assert!(matches!(
            parse_shortcode("https://www.instagram.com/p/"),
            Err(Error::Resolution(_))
        ));
        assert!(matches!(parse_shortcode("not a code"), Err(Error::Resolution(_))));
        assert!(matches!(
            parse_shortcode("https://www.instagram.com/p/abc$def/"),
            Err(Error::Resolution(_))
        ));
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("all").unwrap(), IndexSelection::All);
        assert_eq!(parse_selection("ALL").unwrap(), IndexSelection::All);
        assert_eq!(
            parse_selection("0,2").unwrap(),
            IndexSelection::Indices(vec![0, 2])
        );
        assert_eq!(
            parse_selection(" 1 3, 4 ").unwrap(),
            IndexSelection::Indices(vec![1, 3, 4])
        );
    }

    #[test]
    fn test_parse_selection_invalid() {
        assert!(parse_selection("").is_err());
        assert!(parse_selection("one,two").is_err());
        assert!(parse_selection("-1").is_err());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.options.concurrency = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.options.file_prefix = "../escape".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.options.download_mode = DownloadMode::Selective;
        assert!(validate_config(&config).is_err());
        config.options.selection = Some("0,1".to_string());
        assert!(validate_config(&config).is_ok());
    }
}

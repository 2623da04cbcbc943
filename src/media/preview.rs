//! Preview loading for the item picker.

use crate::api::MediaFetcher;
use crate::media::item::{MediaDescriptor, MediaKind};

/// Result of loading a preview for one item.
#[derive(Debug, Clone)]
pub enum Preview {
    /// A decodable preview image.
    Image {
        bytes: Vec<u8>,
        width: u32,
        height: u32,
    },
    /// No preview could be shown; the front end displays an icon instead.
    Placeholder { kind: MediaKind, reason: String },
}

impl Preview {
    pub fn is_image(&self) -> bool {
        matches!(self, Preview::Image { .. })
    }
}

/// Fetch and decode the preview image of a descriptor.
///
/// Never fails: missing URLs, transfer errors and undecodable bytes all
/// degrade to [`Preview::Placeholder`].
pub async fn fetch_preview(fetcher: &dyn MediaFetcher, item: &MediaDescriptor) -> Preview {
    let kind = item.kind();

    let Some(url) = item.preview_url() else {
        return Preview::Placeholder {
            kind,
            reason: "no preview available".to_string(),
        };
    };

    let bytes = match fetcher.fetch_bytes(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!("Failed to load preview for item {}: {}", item.index, e);
            return Preview::Placeholder {
                kind,
                reason: e.to_string(),
            };
        }
    };

    match image::load_from_memory(&bytes) {
        Ok(decoded) => Preview::Image {
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        },
        Err(e) => {
            tracing::warn!("Preview for item {} is not an image: {}", item.index, e);
            Preview::Placeholder {
                kind,
                reason: format!("invalid preview image: {}", e),
            }
        }
    }
}

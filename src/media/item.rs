//! Media descriptor representation.

use std::fmt;

/// Kind of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// File extension (with dot) used for archive entries.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Image => ".jpg",
            MediaKind::Video => ".mp4",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => write!(f, "image"),
            MediaKind::Video => write!(f, "video"),
        }
    }
}

/// Where a media item's content lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    Image {
        url: String,
    },
    Video {
        url: String,
        thumbnail_url: Option<String>,
    },
}

/// One downloadable item of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    /// Position within the parent post.
    pub index: usize,

    pub source: MediaSource,
}

impl MediaDescriptor {
    pub fn image(index: usize, url: impl Into<String>) -> Self {
        Self {
            index,
            source: MediaSource::Image { url: url.into() },
        }
    }

    pub fn video(index: usize, url: impl Into<String>, thumbnail_url: Option<String>) -> Self {
        Self {
            index,
            source: MediaSource::Video {
                url: url.into(),
                thumbnail_url,
            },
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self.source {
            MediaSource::Image { .. } => MediaKind::Image,
            MediaSource::Video { .. } => MediaKind::Video,
        }
    }

    /// URL of the full media content.
    pub fn source_url(&self) -> &str {
        match &self.source {
            MediaSource::Image { url } | MediaSource::Video { url, .. } => url,
        }
    }

    /// Thumbnail URL. Only videos carry one.
    pub fn thumbnail_url(&self) -> Option<&str> {
        match &self.source {
            MediaSource::Image { .. } => None,
            MediaSource::Video { thumbnail_url, .. } => thumbnail_url.as_deref(),
        }
    }

    /// URL of an image suitable for previewing this item.
    ///
    /// Images preview themselves; videos use their thumbnail, if any.
    pub fn preview_url(&self) -> Option<&str> {
        match &self.source {
            MediaSource::Image { url } => Some(url),
            MediaSource::Video { thumbnail_url, .. } => thumbnail_url.as_deref(),
        }
    }

    pub fn extension(&self) -> &'static str {
        self.kind().extension()
    }

    /// Archive entry name: `{prefix}_{index}{extension}`.
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}_{}{}", prefix, self.index, self.extension())
    }
}

/// Ordered media items resolved from one post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMediaSet {
    /// Shortcode of the post the items came from.
    pub shortcode: String,

    /// Items in the platform's native order.
    pub items: Vec<MediaDescriptor>,
}

impl PostMediaSet {
    pub fn new(shortcode: impl Into<String>, items: Vec<MediaDescriptor>) -> Self {
        Self {
            shortcode: shortcode.into(),
            items,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaDescriptor> {
        self.items.iter().find(|item| item.index == index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MediaDescriptor> {
        self.items.iter()
    }

    /// Count items of the given kind.
    pub fn count_kind(&self, kind: MediaKind) -> usize {
        self.items.iter().filter(|item| item.kind() == kind).count()
    }
}

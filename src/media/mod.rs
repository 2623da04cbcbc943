//! Media module for descriptor representation and parsing.

pub mod item;
pub mod parser;
pub mod preview;

pub use item::{MediaDescriptor, MediaKind, MediaSource, PostMediaSet};
pub use parser::{parse_media_node, parse_post_media};
pub use preview::{fetch_preview, Preview};

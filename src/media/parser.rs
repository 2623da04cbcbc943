//! Post metadata parsing.

use crate::api::types::{MediaNode, PostType, ShortcodeMedia};
use crate::media::item::{MediaDescriptor, PostMediaSet};

/// Expand a post into its ordered media descriptors.
///
/// Sidecars yield one descriptor per child in native order, single image and
/// video posts yield one descriptor. Unknown post types yield an empty set.
pub fn parse_post_media(shortcode: &str, media: &ShortcodeMedia) -> PostMediaSet {
    let nodes: Vec<&MediaNode> = match media.post_type() {
        PostType::Image | PostType::Video => vec![&media.node],
        PostType::Sidecar => media
            .edge_sidecar_to_children
            .as_ref()
            .map(|children| children.edges.iter().map(|edge| &edge.node).collect())
            .unwrap_or_default(),
        PostType::Unknown => {
            tracing::debug!("Unsupported post type: {}", media.typename);
            Vec::new()
        }
    };

    let items = nodes
        .into_iter()
        .enumerate()
        .filter_map(|(index, node)| {
            let descriptor = parse_media_node(index, node);
            if descriptor.is_none() {
                tracing::warn!("Item {} of post {} has no media URL", index, shortcode);
            }
            descriptor
        })
        .collect();

    PostMediaSet::new(shortcode, items)
}

/// Classify a single media node.
///
/// A node is a video only if it is flagged as one and exposes a video URL;
/// everything else falls back to its display image.
pub fn parse_media_node(index: usize, node: &MediaNode) -> Option<MediaDescriptor> {
    if node.is_video {
        if let Some(video_url) = non_empty(&node.video_url) {
            return Some(MediaDescriptor::video(
                index,
                video_url,
                select_thumbnail(node),
            ));
        }
    }

    non_empty(&node.display_url).map(|url| MediaDescriptor::image(index, url))
}

/// Thumbnail URL for a node: explicit thumbnail first, then the display image.
fn select_thumbnail(node: &MediaNode) -> Option<String> {
    non_empty(&node.thumbnail_src)
        .or_else(|| non_empty(&node.display_url))
        .map(str::to_string)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{SidecarEdge, SidecarEdges};
    use crate::media::MediaKind;

    fn image_node(url: &str) -> MediaNode {
        MediaNode {
            display_url: Some(url.to_string()),
            ..Default::default()
        }
    }

    fn video_node(display: &str, video: Option<&str>, thumb: Option<&str>) -> MediaNode {
        MediaNode {
            display_url: Some(display.to_string()),
            is_video: true,
            video_url: video.map(str::to_string),
            thumbnail_src: thumb.map(str::to_string),
        }
    }

    fn post(typename: &str, node: MediaNode, children: Option<Vec<MediaNode>>) -> ShortcodeMedia {
        ShortcodeMedia {
            typename: typename.to_string(),
            id: None,
            shortcode: Some("Cabc123".to_string()),
            node,
            edge_sidecar_to_children: children.map(|nodes| SidecarEdges {
                edges: nodes.into_iter().map(|node| SidecarEdge { node }).collect(),
            }),
        }
    }

    #[test]
    fn test_single_image_post() {
        let media = post("GraphImage", image_node("https://cdn/a.jpg"), None);
        let set = parse_post_media("Cabc123", &media);

        assert_eq!(set.len(), 1);
        assert_eq!(set.items[0].index, 0);
        assert_eq!(set.items[0].kind(), MediaKind::Image);
        assert_eq!(set.items[0].source_url(), "https://cdn/a.jpg");
    }

    #[test]
    fn test_single_video_post() {
        let media = post(
            "GraphVideo",
            video_node("https://cdn/v.jpg", Some("https://cdn/v.mp4"), None),
            None,
        );
        let set = parse_post_media("Cabc123", &media);

        assert_eq!(set.len(), 1);
        assert_eq!(set.items[0].kind(), MediaKind::Video);
        assert_eq!(set.items[0].source_url(), "https://cdn/v.mp4");
        // no explicit thumbnail, display URL is used
        assert_eq!(set.items[0].thumbnail_url(), Some("https://cdn/v.jpg"));
    }

    #[test]
    fn test_sidecar_preserves_order() {
        let media = post(
            "GraphSidecar",
            image_node("https://cdn/cover.jpg"),
            Some(vec![
                image_node("https://cdn/0.jpg"),
                video_node("https://cdn/1.jpg", Some("https://cdn/1.mp4"), Some("https://cdn/1t.jpg")),
                image_node("https://cdn/2.jpg"),
            ]),
        );
        let set = parse_post_media("Cabc123", &media);

        assert_eq!(set.len(), 3);
        let indices: Vec<usize> = set.iter().map(|item| item.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(set.items[0].source_url(), "https://cdn/0.jpg");
        assert_eq!(set.items[1].kind(), MediaKind::Video);
        assert_eq!(set.items[1].thumbnail_url(), Some("https://cdn/1t.jpg"));
        assert_eq!(set.items[2].source_url(), "https://cdn/2.jpg");
    }

    #[test]
    fn test_video_flag_without_url_is_image() {
        let node = video_node("https://cdn/x.jpg", None, Some("https://cdn/t.jpg"));
        let descriptor = parse_media_node(4, &node).unwrap();

        assert_eq!(descriptor.kind(), MediaKind::Image);
        assert_eq!(descriptor.source_url(), "https://cdn/x.jpg");
        assert_eq!(descriptor.index, 4);
    }

    #[test]
    fn test_video_url_without_flag_is_image() {
        let node = MediaNode {
            display_url: Some("https://cdn/x.jpg".to_string()),
            is_video: false,
            video_url: Some("https://cdn/x.mp4".to_string()),
            thumbnail_src: None,
        };
        let descriptor = parse_media_node(0, &node).unwrap();
        assert_eq!(descriptor.kind(), MediaKind::Image);
    }

    #[test]
    fn test_node_without_urls_is_skipped() {
        let media = post(
            "GraphSidecar",
            MediaNode::default(),
            Some(vec![MediaNode::default(), image_node("https://cdn/1.jpg")]),
        );
        let set = parse_post_media("Cabc123", &media);

        assert_eq!(set.len(), 1);
        assert_eq!(set.items[0].index, 1);
    }

    #[test]
    fn test_unknown_post_type_is_empty() {
        let media = post("GraphStory", image_node("https://cdn/a.jpg"), None);
        assert!(parse_post_media("Cabc123", &media).is_empty());
    }

    #[test]
    fn test_sidecar_without_children_is_empty() {
        let media = post("GraphSidecar", image_node("https://cdn/a.jpg"), None);
        assert!(parse_post_media("Cabc123", &media).is_empty());
    }
}

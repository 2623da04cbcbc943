//! API response type definitions.

use serde::Deserialize;

/// GraphQL query response wrapper.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub data: Option<QueryData>,
    pub status: Option<String>,
    pub message: Option<String>,
}

/// Payload of a post query.
#[derive(Debug, Deserialize)]
pub struct QueryData {
    /// Absent or null when the post does not exist or is private.
    #[serde(alias = "shortcode_media")]
    pub xdt_shortcode_media: Option<ShortcodeMedia>,
}

/// Post type as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostType {
    Image,
    Video,
    Sidecar,
    Unknown,
}

impl PostType {
    /// Parse a `__typename` value, with or without the `XDT` prefix.
    pub fn from_typename(typename: &str) -> Self {
        match typename.trim_start_matches("XDT") {
            "GraphImage" => PostType::Image,
            "GraphVideo" => PostType::Video,
            "GraphSidecar" => PostType::Sidecar,
            _ => PostType::Unknown,
        }
    }
}

/// A post and its top-level media fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortcodeMedia {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub id: Option<String>,
    pub shortcode: Option<String>,
    #[serde(flatten)]
    pub node: MediaNode,
    pub edge_sidecar_to_children: Option<SidecarEdges>,
}

impl ShortcodeMedia {
    pub fn post_type(&self) -> PostType {
        PostType::from_typename(&self.typename)
    }
}

/// Media fields shared by posts and sidecar children.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaNode {
    pub display_url: Option<String>,
    #[serde(default)]
    pub is_video: bool,
    pub video_url: Option<String>,
    pub thumbnail_src: Option<String>,
}

/// Children of a sidecar post.
#[derive(Debug, Clone, Deserialize)]
pub struct SidecarEdges {
    #[serde(default)]
    pub edges: Vec<SidecarEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SidecarEdge {
    pub node: MediaNode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_type_from_typename() {
        assert_eq!(PostType::from_typename("GraphImage"), PostType::Image);
        assert_eq!(PostType::from_typename("XDTGraphVideo"), PostType::Video);
        assert_eq!(PostType::from_typename("GraphSidecar"), PostType::Sidecar);
        assert_eq!(PostType::from_typename("GraphStory"), PostType::Unknown);
    }

    #[test]
    fn test_deserialize_sidecar() {
        let json = r#"{
            "data": {
                "xdt_shortcode_media": {
                    "__typename": "XDTGraphSidecar",
                    "shortcode": "Cabc123",
                    "display_url": "https://cdn.example.com/cover.jpg",
                    "is_video": false,
                    "edge_sidecar_to_children": {
                        "edges": [
                            {"node": {"display_url": "https://cdn.example.com/0.jpg", "is_video": false}},
                            {"node": {"display_url": "https://cdn.example.com/1.jpg", "is_video": true,
                                      "video_url": "https://cdn.example.com/1.mp4"}}
                        ]
                    }
                }
            },
            "status": "ok"
        }"#;

        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let media = response.data.unwrap().xdt_shortcode_media.unwrap();
        assert_eq!(media.post_type(), PostType::Sidecar);
        assert_eq!(
            media.node.display_url.as_deref(),
            Some("https://cdn.example.com/cover.jpg")
        );

        let edges = media.edge_sidecar_to_children.unwrap().edges;
        assert_eq!(edges.len(), 2);
        assert!(edges[1].node.is_video);
    }

    #[test]
    fn test_deserialize_missing_media() {
        let json = r#"{"data": {"xdt_shortcode_media": null}, "status": "ok"}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().xdt_shortcode_media.is_none());
    }

    #[test]
    fn test_deserialize_legacy_field_name() {
        let json = r#"{"data": {"shortcode_media": {"__typename": "GraphImage",
            "display_url": "https://cdn.example.com/a.jpg"}}}"#;
        let response: QueryResponse = serde_json::from_str(json).unwrap();
        let media = response.data.unwrap().xdt_shortcode_media.unwrap();
        assert_eq!(media.post_type(), PostType::Image);
        assert!(!media.node.is_video);
    }
}

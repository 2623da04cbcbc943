//! Instagram HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};

use crate::api::fetcher::MediaFetcher;
use crate::api::types::QueryResponse;
use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::media::{parse_post_media, PostMediaSet};

/// Path of the GraphQL query endpoint, relative to the API base URL.
const QUERY_PATH: &str = "/graphql/query";

/// Instagram client resolving posts and downloading media.
pub struct InstagramApi {
    client: Client,
    base_url: String,
    doc_id: String,
    app_id: String,
}

impl InstagramApi {
    /// Create a new client from API settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            doc_id: config.doc_id.clone(),
            app_id: config.app_id.clone(),
        })
    }

    /// Resolve a post shortcode into its ordered media items.
    pub async fn resolve(&self, shortcode: &str) -> Result<PostMediaSet> {
        let url = format!("{}{}", self.base_url, QUERY_PATH);
        let variables = serde_json::json!({ "shortcode": shortcode }).to_string();

        tracing::debug!("GET {} (shortcode {})", url, shortcode);

        let response = self
            .client
            .get(&url)
            .query(&[("doc_id", self.doc_id.as_str()), ("variables", variables.as_str())])
            .header("X-IG-App-ID", &self.app_id)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::Resolution(format!("Metadata request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        match status {
            StatusCode::NOT_FOUND => {
                return Err(Error::Resolution(format!("Post not found: {}", shortcode)));
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(Error::Resolution(format!(
                    "Post {} is private or requires login (HTTP {})",
                    shortcode, status
                )));
            }
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(Error::Resolution(
                    "Rate limited by Instagram, try again later".to_string(),
                ));
            }
            s if !s.is_success() => {
                return Err(Error::Resolution(format!(
                    "Metadata request failed: HTTP {}",
                    status
                )));
            }
            _ => {}
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Resolution(format!("Failed to read metadata: {}", e)))?;
        tracing::debug!("Post metadata response length: {} bytes", text.len());

        let query: QueryResponse = serde_json::from_str(&text).map_err(|e| {
            Error::Resolution(format!(
                "Unexpected metadata response (login required?): {} - Response: {}",
                e,
                text.chars().take(200).collect::<String>()
            ))
        })?;

        if query.status.as_deref() == Some("fail") {
            return Err(Error::Resolution(
                query
                    .message
                    .unwrap_or_else(|| "Instagram rejected the request".to_string()),
            ));
        }

        let media = query
            .data
            .and_then(|data| data.xdt_shortcode_media)
            .ok_or_else(|| {
                Error::Resolution(format!(
                    "Post {} does not exist or is private",
                    shortcode
                ))
            })?;

        let set = parse_post_media(shortcode, &media);
        tracing::info!(
            "Resolved post {} ({}): {} media item(s)",
            shortcode,
            media.typename,
            set.len()
        );

        Ok(set)
    }
}

#[async_trait]
impl MediaFetcher for InstagramApi {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let fetch_error = |reason: String| Error::Fetch {
            url: url.to_string(),
            reason,
        };

        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_error(format!("HTTP {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;
        tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);

        Ok(bytes.to_vec())
    }
}

//! Byte fetching abstraction.

use async_trait::async_trait;

use crate::error::Result;

/// Retrieves the full content behind a media URL.
///
/// Implementations must not cache or retry; every call is one complete
/// transfer. Failures are reported as [`crate::Error::Fetch`].
#[async_trait]
pub trait MediaFetcher: Send + Sync {
    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>>;
}

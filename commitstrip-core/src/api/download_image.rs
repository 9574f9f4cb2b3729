use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use tracing::info;

use crate::iri::iri_to_uri;
use crate::{Request, Result};

/// Fetch the raw bytes of a comic image.
///
/// The locator comes straight out of post content and may be an IRI; it is
/// escaped to plain ASCII before the request goes out.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DownloadImage {
    url: String,
}

impl DownloadImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl Request for DownloadImage {
    type Response = Bytes;

    async fn request(self) -> Result<Self::Response> {
        let url: Url = iri_to_uri(&self.url).parse()?;
        info!("downloading image {url}");
        let response = reqwest::get(url).await?.error_for_status()?;
        Ok(response.bytes().await?)
    }
}

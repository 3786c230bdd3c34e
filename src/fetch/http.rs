// src/fetch/http.rs
// =============================================================================
// Fetches pages with a plain HTTP GET.
//
// Behavior:
// - One GET per call, no retries
// - No timeout: a hung server hangs the run, failures come from the transport
// - Any non-2xx status is a RetrievalError (redirects are followed first)
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use super::{Page, PageFetcher};
use crate::error::RetrievalError;

/// PageFetcher backed by a reqwest Client.
///
/// The client is reused for every page so connections to the docs host get
/// pooled across the base page and all of its links.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Page, RetrievalError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| RetrievalError::new(url.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RetrievalError::new(url.as_str(), status));
        }

        let html = response
            .text()
            .await
            .map_err(|e| RetrievalError::new(url.as_str(), e))?;

        Ok(Page {
            url: url.clone(),
            html,
        })
    }
}

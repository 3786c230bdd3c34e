// src/fetch/mod.rs
// =============================================================================
// This module retrieves pages over the network.
//
// Submodules:
// - http: The real fetcher, built on reqwest
//
// The scraper only ever talks to the PageFetcher trait, so tests can hand it
// an in-memory set of pages instead of a live server.
// =============================================================================

mod http;

pub use http::HttpFetcher;

use async_trait::async_trait;
use url::Url;

use crate::error::RetrievalError;

/// A fetched page: the URL it came from and its raw markup.
#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub html: String,
}

/// Retrieves one page per call. Implementations must not retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url`, failing with a RetrievalError on transport errors or a
    /// non-success status.
    async fn fetch(&self, url: &Url) -> Result<Page, RetrievalError>;
}

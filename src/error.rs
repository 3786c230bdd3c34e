// src/error.rs
// =============================================================================
// Error types shared by the fetcher, extractor and output writer.
//
// There are three flavors of failure in a scrape run:
// - Fatal: bad configuration, the base page can't be retrieved, or the
//   output file can't be written. These surface as ScrapeError.
// - Recoverable: a linked page can't be retrieved. The scraper logs the
//   RetrievalError and moves on to the next link.
// - Soft fallback: a selector matches nothing. That's not an error at all,
//   so it never shows up here (see extract/).
// =============================================================================

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Why a page could not be retrieved.
#[derive(Debug, Error)]
pub enum RetrievalCause {
    /// Connection, TLS, DNS or body read failure reported by the transport
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered, but not with a 2xx status
    #[error("HTTP {0}")]
    Status(StatusCode),
}

/// A failed page retrieval, carrying the URL that was requested.
#[derive(Debug, Error)]
#[error("error retrieving {url}: {cause}")]
pub struct RetrievalError {
    pub url: String,
    #[source]
    pub cause: RetrievalCause,
}

impl RetrievalError {
    pub fn new(url: impl Into<String>, cause: impl Into<RetrievalCause>) -> Self {
        Self {
            url: url.into(),
            cause: cause.into(),
        }
    }
}

impl From<StatusCode> for RetrievalCause {
    fn from(status: StatusCode) -> Self {
        RetrievalCause::Status(status)
    }
}

/// Errors that abort a scrape run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid CSS selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error("could not write {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// src/scrape.rs
// =============================================================================
// The scrape pipeline: fetch the table-of-contents page, save its text,
// then fetch and append every internal link it points to.
//
// How it works:
// 1. Fetch the base URL (failure here aborts the run)
// 2. Extract its text and write it to a fresh output file
// 3. Collect internal links from the links container
// 4. For each link, in order: fetch, extract, append
//    (a link that can't be retrieved is logged and skipped)
//
// Everything runs one request at a time. There is no dedup and no depth
// beyond the base page's own links.
// =============================================================================

use std::path::PathBuf;

use url::Url;

use crate::error::ScrapeError;
use crate::extract::{collect_internal_links, extract_text, CssSelector};
use crate::fetch::PageFetcher;
use crate::output::{output_filename, written_authority, OutputFile};

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// The base URL as typed on the command line (names the output file)
    pub raw_url: String,
    pub base_url: Url,
    pub links_selector: CssSelector,
    pub content_selector: Option<CssSelector>,
    pub output_dir: PathBuf,
}

impl ScrapeConfig {
    /// Parses the raw CLI strings. Invalid URLs and selectors are rejected
    /// here, before any network I/O happens.
    pub fn parse(
        url: &str,
        links_selector: &str,
        content_selector: Option<&str>,
        output_dir: impl Into<PathBuf>,
    ) -> Result<Self, ScrapeError> {
        let base_url = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        Ok(Self {
            raw_url: url.trim().to_string(),
            base_url,
            links_selector: CssSelector::parse(links_selector)?,
            content_selector: content_selector.map(CssSelector::parse).transpose()?,
            output_dir: output_dir.into(),
        })
    }

    /// Where this run's output file lives.
    ///
    /// The filename uses the authority as the user wrote it (case, explicit
    /// ports and all), falling back to the parsed one for URLs written
    /// without `//`, like `http:example.com`.
    pub fn output_path(&self) -> PathBuf {
        let authority =
            written_authority(&self.raw_url).unwrap_or_else(|| self.base_url.authority());

        self.output_dir.join(output_filename(
            authority,
            &self.links_selector,
            self.content_selector.as_ref(),
        ))
    }
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub output_path: PathBuf,
    pub links_found: usize,
    pub appended: Vec<Url>,
    pub skipped: Vec<Url>,
}

/// Drives the fetch-extract-append pipeline.
pub struct Scraper<F> {
    fetcher: F,
    config: ScrapeConfig,
}

impl<F: PageFetcher> Scraper<F> {
    pub fn new(fetcher: F, config: ScrapeConfig) -> Self {
        Self { fetcher, config }
    }

    pub async fn run(&self) -> Result<ScrapeSummary, ScrapeError> {
        let config = &self.config;
        let content_selector = config.content_selector.as_ref();

        // Base page first: if this fails, the whole run fails
        let base = self.fetcher.fetch(&config.base_url).await?;
        let base_text = extract_text(&base.html, content_selector);

        let mut output = OutputFile::create(config.output_path(), &base_text)?;
        tracing::info!(
            "Saved text content from {} to {}",
            base.url,
            output.path().display()
        );

        let links = collect_internal_links(&base.html, &config.base_url, &config.links_selector);
        tracing::info!("Found {} internal link(s) in the container.", links.len());

        let mut summary = ScrapeSummary {
            output_path: output.path().to_path_buf(),
            links_found: links.len(),
            appended: Vec::new(),
            skipped: Vec::new(),
        };

        // One link at a time, in document order
        for link in links {
            match self.fetcher.fetch(&link).await {
                Ok(page) => {
                    let text = extract_text(&page.html, content_selector);
                    output.append_section(&link, &text)?;
                    tracing::info!("Appended text content from {}", link);
                    summary.appended.push(link);
                }
                Err(e) => {
                    // Recoverable: this page is simply left out of the output
                    tracing::warn!("{}", e);
                    summary.skipped.push(link);
                }
            }
        }

        Ok(summary)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is Scraper generic over F: PageFetcher?
//    - In the binary, F is HttpFetcher and pages come from the network
//    - In tests, F is an in-memory fake, so no server is needed
//    - The compiler generates a version of run() for each F we use
//
// 2. Why does `?` appear on the base fetch but not inside the loop?
//    - `?` returns the error to our caller, ending the run
//    - A missing base page means there's nothing to scrape, so that's fatal
//    - Inside the loop we match on the Result instead, log the error and
//      continue with the next link
//
// 3. Why `for link in links` and not `for link in &links`?
//    - We move each Url out of the Vec, so it can be pushed into the
//      summary without cloning
// -----------------------------------------------------------------------------

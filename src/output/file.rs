// src/output/file.rs
// =============================================================================
// The output file: one flat text dump per run.
//
// Name:    <authority>_<links-selector>[_<content-selector>].txt (all sanitized)
//          where <authority> is taken from the URL as the user typed it
// Content: the base page's text, then for every internal link
//
//            \n\n<!-- Content from <url> -->\n\n<text>
//
// The file is created fresh (truncating an earlier run's output) once the
// base page is in hand, and only ever appended to after that.
// =============================================================================

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use url::Url;

use super::sanitize_filename;
use crate::error::ScrapeError;
use crate::extract::CssSelector;

/// Returns the authority (`[userinfo@]host[:port]`) exactly as it was typed in
/// `raw_url`: the text between `//` and the first `/`, `?` or `#`.
///
/// Unlike `Url::authority()` this keeps host case, explicit default ports and
/// non-ASCII hosts, so `https://Docs.Example.ORG:443/x` gives
/// `Docs.Example.ORG:443`. Returns None when the URL has no `//` authority.
pub fn written_authority(raw_url: &str) -> Option<&str> {
    let (_scheme, rest) = raw_url.trim().split_once(':')?;
    let rest = rest.strip_prefix("//")?;
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#'))
        .unwrap_or(rest.len());

    Some(&rest[..end]).filter(|authority| !authority.is_empty())
}

/// Builds the deterministic output filename for a run.
///
/// Example:
///   authority = "docs.example.org", links = ".nav", content = None
///   result = "docs.example.org_.nav.txt"
pub fn output_filename(
    authority: &str,
    links_selector: &CssSelector,
    content_selector: Option<&CssSelector>,
) -> String {
    let authority = sanitize_filename(authority);
    let links = sanitize_filename(links_selector.as_str());

    match content_selector {
        Some(content) => format!(
            "{}_{}_{}.txt",
            authority,
            links,
            sanitize_filename(content.as_str())
        ),
        None => format!("{}_{}.txt", authority, links),
    }
}

/// An open, append-only output file.
#[derive(Debug)]
pub struct OutputFile {
    path: PathBuf,
    file: File,
}

impl OutputFile {
    /// Creates (or truncates) the file at `path` and writes the base page's
    /// text into it.
    pub fn create(path: impl Into<PathBuf>, base_text: &str) -> Result<Self, ScrapeError> {
        let path = path.into();

        File::create(&path)
            .and_then(|mut f| f.write_all(base_text.as_bytes()))
            .map_err(|source| ScrapeError::Output {
                path: path.clone(),
                source,
            })?;

        let file = OpenOptions::new()
            .append(true)
            .open(&path)
            .map_err(|source| ScrapeError::Output {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, file })
    }

    /// Appends one linked page's text under a separator naming its URL.
    pub fn append_section(&mut self, url: &Url, text: &str) -> Result<(), ScrapeError> {
        write!(self.file, "\n\n<!-- Content from {} -->\n\n{}", url, text)
            .and_then(|()| self.file.flush())
            .map_err(|source| ScrapeError::Output {
                path: self.path.clone(),
                source,
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

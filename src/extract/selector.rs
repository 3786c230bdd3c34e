// src/extract/selector.rs
// =============================================================================
// A parsed CSS selector that remembers the string it was parsed from.
//
// scraper::Selector can't give us the original text back, and we need it for
// log messages and for naming the output file.
// =============================================================================

use std::fmt;

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;

#[derive(Debug, Clone)]
pub struct CssSelector {
    raw: String,
    selector: Selector,
}

impl CssSelector {
    /// Parses a user-supplied selector like `#nav` or `div.sidebar > ul`.
    pub fn parse(raw: &str) -> Result<Self, ScrapeError> {
        let selector = Selector::parse(raw).map_err(|e| ScrapeError::InvalidSelector {
            selector: raw.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            raw: raw.to_string(),
            selector,
        })
    }

    /// The selector exactly as the user typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the first element in document order matching this selector.
    pub fn select_first<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        document.select(&self.selector).next()
    }
}

impl fmt::Display for CssSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

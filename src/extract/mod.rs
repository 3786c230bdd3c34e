// src/extract/mod.rs
// =============================================================================
// This module turns fetched HTML into the two things the scraper needs:
//
// - text: the flattened, newline-separated text of a page (or of one element)
// - links: same-authority links found inside the navigation container
//
// Both take a CssSelector, which is parsed once up front so a typo in a
// selector fails the run before we touch the network.
//
// Neither function fails when a selector matches nothing. That's a soft
// fallback: we log a warning and use the whole page (text) or return no
// links (links).
// =============================================================================

mod links;
mod selector;
mod text;

pub use links::collect_internal_links;
pub use selector::CssSelector;
pub use text::extract_text;

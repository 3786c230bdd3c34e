// src/extract/text.rs
// =============================================================================
// Flattens HTML into plain text.
//
// How it works:
// 1. Pick the root: the element matched by the content selector, or the whole
//    document if there's no selector (or it matches nothing)
// 2. Walk every text node under the root, in document order
// 3. Trim each one, drop the empty ones, join the rest with newlines
//
// So `<h1>Title</h1><p>  Some text </p>` becomes "Title\nSome text".
// =============================================================================

use scraper::node::Node;
use scraper::{ElementRef, Html};

use super::CssSelector;

// Elements whose text content isn't readable page text
const SKIPPED_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Extracts the text of the element matched by `content_selector`, or of the
/// whole document when the selector is absent or matches nothing.
pub fn extract_text(html: &str, content_selector: Option<&CssSelector>) -> String {
    let document = Html::parse_document(html);

    if let Some(selector) = content_selector {
        match selector.select_first(&document) {
            Some(element) => return element_text(element),
            None => tracing::warn!(
                "No element found for content selector: {}. Using full page text.",
                selector
            ),
        }
    }

    element_text(document.root_element())
}

fn element_text(element: ElementRef<'_>) -> String {
    let mut pieces = Vec::new();
    collect_text(element, &mut pieces);
    pieces.join("\n")
}

// Recursively collects trimmed, non-empty text nodes under `element`
fn collect_text(element: ElementRef<'_>, pieces: &mut Vec<String>) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    pieces.push(trimmed.to_string());
                }
            }
            Node::Element(el) if SKIPPED_ELEMENTS.contains(&el.name()) => {}
            Node::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    collect_text(child_element, pieces);
                }
            }
            _ => {}
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Nodes vs elements
//    - The parsed document is a tree of nodes
//    - Elements (<p>, <div>) are one kind of node, text is another,
//      comments and the doctype are others
//    - ElementRef::wrap only succeeds for element nodes
//
// 2. Why recursion?
//    - HTML nests arbitrarily deep, and walking children recursively visits
//      text in the same order it appears in the source
// -----------------------------------------------------------------------------

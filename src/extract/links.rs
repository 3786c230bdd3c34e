// src/extract/links.rs
// =============================================================================
// Collects the internal links inside a navigation container.
//
// Steps:
// 1. Find the container with the links selector (first match only)
// 2. Select every <a href> inside it
// 3. Resolve each href against the base URL (relative -> absolute)
// 4. Keep only links with the same origin (scheme + host + port) as the base
//
// Document order is preserved and duplicates are kept: if the nav links to
// the same page twice, the page is fetched twice.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

use super::CssSelector;

/// Returns the same-origin links found inside the element matched by
/// `links_selector`, in document order.
///
/// Example:
///   html = `<div id="nav"><a href="/b">B</a><a href="https://other.org/">X</a></div>`
///   base = "http://example.com/"
///   result = ["http://example.com/b"]
pub fn collect_internal_links(html: &str, base_url: &Url, links_selector: &CssSelector) -> Vec<Url> {
    let document = Html::parse_document(html);

    let Some(container) = links_selector.select_first(&document) else {
        tracing::warn!("No container found for selector: {}", links_selector);
        return Vec::new();
    };

    // Constant selector, known to be valid
    let anchors = Selector::parse("a[href]").expect("static anchor selector");
    let base_origin = base_url.origin();

    container
        .select(&anchors)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| base_url.join(href).ok())
        .filter(|link| link.origin() == base_origin)
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is an origin?
//    - scheme + host + port, e.g. ("http", "example.com", 80)
//    - http://example.com/a and http://example.com:80/b share an origin
//    - https://example.com/ does NOT (different scheme, different port)
//
// 2. Why Url::join instead of string concatenation?
//    - join follows the same rules a browser does for relative links
//    - "intro.html" on /docs/index.html -> /docs/intro.html
//    - "/b" -> /b, "https://x.org/" stays as-is
//
// 3. What's `let ... else`?
//    - Like `if let`, but the else branch must leave the function
//    - Keeps the happy path unindented
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> Url {
        Url::parse("http://example.com/docs/index.html").unwrap()
    }

    fn nav() -> CssSelector {
        CssSelector::parse("#nav").unwrap()
    }

    fn strings(links: &[Url]) -> Vec<&str> {
        links.iter().map(Url::as_str).collect()
    }

    #[test]
    fn test_resolves_relative_links() {
        let html = r#"<div id="nav"><a href="/b">B</a><a href="intro.html">Intro</a></div>"#;
        let links = collect_internal_links(html, &base(), &nav());
        assert_eq!(
            strings(&links),
            vec!["http://example.com/b", "http://example.com/docs/intro.html"]
        );
    }

    #[test]
    fn test_ignores_links_outside_container() {
        let html = r#"
            <a href="/outside">Out</a>
            <div id="nav"><a href="/inside">In</a></div>
        "#;
        let links = collect_internal_links(html, &base(), &nav());
        assert_eq!(strings(&links), vec!["http://example.com/inside"]);
    }

    #[test]
    fn test_drops_other_origins() {
        let html = r#"<div id="nav">
            <a href="https://example.com/tls">different scheme</a>
            <a href="http://example.com:8080/port">different port</a>
            <a href="http://docs.example.com/sub">different host</a>
            <a href="mailto:me@example.com">mail</a>
            <a href="http://example.com/ok">same</a>
        </div>"#;
        let links = collect_internal_links(html, &base(), &nav());
        assert_eq!(strings(&links), vec!["http://example.com/ok"]);
    }

    #[test]
    fn test_keeps_duplicates_in_order() {
        let html = r#"<div id="nav">
            <a href="/c">C</a><a href="/a">A</a><a href="/c">C again</a>
        </div>"#;
        let links = collect_internal_links(html, &base(), &nav());
        assert_eq!(
            strings(&links),
            vec!["http://example.com/c", "http://example.com/a", "http://example.com/c"]
        );
    }

    #[test]
    fn test_skips_anchors_without_href() {
        let html = r#"<div id="nav"><a name="top">Top</a><a href="/x">X</a></div>"#;
        let links = collect_internal_links(html, &base(), &nav());
        assert_eq!(strings(&links), vec!["http://example.com/x"]);
    }

    #[test]
    fn test_missing_container_returns_empty() {
        let html = r#"<div id="menu"><a href="/x">X</a></div>"#;
        assert!(collect_internal_links(html, &base(), &nav()).is_empty());
    }

    proptest! {
        #[test]
        fn prop_never_leaves_base_origin(
            hrefs in proptest::collection::vec(
                prop_oneof![
                    "/[a-z]{0,8}",
                    "[a-z]{1,8}\\.html",
                    "(http|https)://(example\\.com|evil\\.org)(:[0-9]{2,4})?/[a-z]{0,5}",
                    "\\PC{0,12}",
                ],
                0..12,
            )
        ) {
            let anchors: String = hrefs
                .iter()
                .map(|h| format!(r#"<a href="{}">x</a>"#, h.replace('&', "&amp;").replace('"', "&quot;")))
                .collect();
            let html = format!(r#"<div id="nav">{}</div>"#, anchors);

            let base = base();
            for link in collect_internal_links(&html, &base, &nav()) {
                prop_assert_eq!(link.origin(), base.origin());
            }
        }

        #[test]
        fn prop_preserves_document_order(names in proptest::collection::vec("[a-z]{1,6}", 0..10)) {
            let anchors: String = names
                .iter()
                .map(|n| format!(r#"<a href="/{}">{}</a>"#, n, n))
                .collect();
            let html = format!(r#"<div id="nav">{}</div>"#, anchors);

            let links = collect_internal_links(&html, &base(), &nav());
            let paths: Vec<String> = links.iter().map(|l| l.path().trim_start_matches('/').to_string()).collect();
            prop_assert_eq!(paths, names);
        }
    }
}

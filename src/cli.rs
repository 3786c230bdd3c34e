// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Usage:
//   docscrape <URL> <LINKS_SELECTOR> [CONTENT_SELECTOR] [--output-dir DIR]
//
// Example:
//   docscrape https://docs.example.org/index ".nav" "main"
//   -> writes docs.example.org_.nav_main.txt
// =============================================================================

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "docscrape",
    version,
    about = "Download text content from a URL and its internal links within a container",
    long_about = "docscrape fetches a table-of-contents page, saves its text, then follows every \
                  same-site link inside the container matched by LINKS_SELECTOR and appends \
                  each linked page's text to the same file."
)]
pub struct Cli {
    /// The base URL to download
    pub url: String,

    /// CSS selector for the container with links (e.g. "#nav" or ".toc ul")
    pub links_selector: String,

    /// Optional CSS selector for text extraction
    ///
    /// If omitted (or if it matches nothing on a page), the full page text is used.
    pub content_selector: Option<String>,

    /// Directory to write the output file into
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

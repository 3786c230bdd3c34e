// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (progress goes to stdout)
// 2. Parse command-line arguments using clap
// 3. Validate them into a ScrapeConfig
// 4. Run the scrape pipeline one request at a time
// 5. Exit 0 on success (even if some links were skipped), 1 on a fatal error
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod error;    // src/error.rs - error types
mod extract;  // src/extract/ - text and link extraction
mod fetch;    // src/fetch/ - page retrieval
mod logging;  // src/logging.rs - tracing subscriber setup
mod output;   // src/output/ - output file naming and writing
mod scrape;   // src/scrape.rs - the fetch-extract-append pipeline

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use fetch::HttpFetcher;
use scrape::{ScrapeConfig, ScrapeSummary, Scraper};

// A current-thread runtime: requests are awaited one after another, so the
// whole run is single-threaded.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Error: {:#}", e);
    }

    let exit_code = match run().await {
        Ok(summary) => {
            print_summary(&summary);
            0
        }
        Err(e) => {
            tracing::error!("{}", fatal_message(&e));
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<ScrapeSummary> {
    let cli = Cli::parse();

    let config = ScrapeConfig::parse(
        &cli.url,
        &cli.links_selector,
        cli.content_selector.as_deref(),
        cli.output_dir,
    )?;

    let fetcher = HttpFetcher::new()?;
    let summary = Scraper::new(fetcher, config).run().await?;

    Ok(summary)
}

// Our error types already spell out their cause in their own message, so
// only the top-level Display is printed (the `{:#}` chain would repeat it).
fn fatal_message(error: &anyhow::Error) -> String {
    error.to_string()
}

fn print_summary(summary: &ScrapeSummary) {
    println!();
    println!("📊 Summary:");
    println!("   🔗 Links found: {}", summary.links_found);
    println!("   ✅ Appended: {}", summary.appended.len());
    println!("   ❌ Skipped: {}", summary.skipped.len());
    println!("   📄 Output: {}", summary.output_path.display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{RetrievalError, ScrapeError};
    use reqwest::StatusCode;

    #[test]
    fn test_fatal_message_names_cause_once() {
        let err = anyhow::Error::from(ScrapeError::from(RetrievalError::new(
            "http://example.com/",
            StatusCode::NOT_FOUND,
        )));

        let message = fatal_message(&err);
        assert_eq!(message, "error retrieving http://example.com/: HTTP 404 Not Found");
        assert_eq!(message.matches("404").count(), 1);
    }
}

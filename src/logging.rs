// src/logging.rs
// =============================================================================
// Sets up logging with the `tracing` ecosystem.
//
// - tracing: the macros we log with (info!, warn!, error!, debug!)
// - tracing-subscriber: decides where those events go and how they look
//
// All progress and error messages go to stdout, one short line each, without
// timestamps or module paths. Set RUST_LOG to change the level, e.g.
//   RUST_LOG=debug docscrape https://example.com/ "#nav"
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs a stdout subscriber. Verbosity comes from `RUST_LOG`, defaulting
/// to `info` so progress messages are shown.
pub fn init_logging() -> Result<()> {
    // RUST_LOG wins if it's set and valid, otherwise show info and above
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why tracing instead of println!?
//    - Every message gets a level (info, warn, error) we can filter on
//    - RUST_LOG=warn hides progress but keeps the warnings
//    - Library code can log without caring where the output ends up
//
// 2. Why try_init() instead of init()?
//    - init() panics if a subscriber is already installed
//    - try_init() returns an error we can report and carry on from
// -----------------------------------------------------------------------------

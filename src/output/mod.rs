// src/output/mod.rs
// =============================================================================
// Everything about the text file we produce.
//
// Submodules:
// - sanitize: Turns URLs and selectors into filename-safe tokens
// - file: Names, creates and appends to the output file
// =============================================================================

mod file;
mod sanitize;

pub use file::{output_filename, written_authority, OutputFile};
pub use sanitize::sanitize_filename;

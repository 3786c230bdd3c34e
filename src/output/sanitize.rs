// src/output/sanitize.rs
// =============================================================================
// Turns arbitrary strings (hosts, CSS selectors) into filename-safe tokens.
//
// The rule is small: letters, digits, `_`, `-` and `.` are kept,
// everything else becomes `-`. One character in, one character out, so
// `#nav > ul` becomes `-nav---ul`.
// =============================================================================

/// Replaces every character outside `[A-Za-z0-9_.-]` with `-`.
///
/// Works per character, so `"é"` becomes a single `-`. Already-safe input is
/// returned unchanged.
pub fn sanitize_filename(s: &str) -> String {
    s.chars()
        .map(|c| if is_safe(c) { c } else { '-' })
        .collect()
}

// ASCII only: `é` is a letter to char::is_alphanumeric, but not safe here
fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')
}

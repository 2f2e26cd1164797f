//! Working-body construction and separator cleanup.
//!
//! The working body is a copy of the input text with postcode-classified
//! characters blanked out. Blanking rather than deleting keeps every char
//! position aligned with the classification mask, so positions collected
//! by [`gq_core::MaskIndex`] stay valid lookups into the body.

use gq_core::MaskCode;

/// Copy `text` with every character whose mask code is `P` replaced by a
/// single space; all other characters, classified or not, pass through.
///
/// A mask shorter than the text leaves the uncovered tail intact; those
/// characters are simply unclassified.
pub fn build_body(text: &str, mask: &str) -> String {
    let mut codes = mask.chars();
    text.chars()
        .map(|c| match codes.next().map(MaskCode::from_char) {
            Some(MaskCode::Postcode) => ' ',
            _ => c,
        })
        .collect()
}

/// Strip leading and trailing spaces and commas.
pub fn trim_edges(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == ',')
}

/// Rewrite comma, newline, and tab separators to a uniform `", "`.
pub fn join_separators(s: &str) -> String {
    s.split(|c| c == ',' || c == '\n' || c == '\t')
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collapse runs of whitespace into single spaces and trim the ends.
pub fn squash_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

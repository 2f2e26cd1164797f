//! Prefix/postfix segmentation of unclassified text.
//!
//! The mask encodes, left to right, where recognized tokens occur.
//! Everything before recognized content is assumed to be a business or
//! venue name; everything from the first administrative boundary onward
//! is assumed to be geography (locality/region/country chain). This
//! mirrors common postal ordering — local part first, coarser geography
//! last — without caring which specific admin levels were found.

use serde::{Deserialize, Serialize};

use gq_core::MaskIndex;

use crate::text::{join_separators, squash_whitespace, trim_edges};

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

/// Unclassified text bucketed around the recognized span region.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segments {
    /// Unparsed text preceding any classified content; a venue/name
    /// candidate.
    pub prefix: String,
    /// Text from the first admin-bearing boundary to the end of the body;
    /// a geography candidate.
    pub postfix: String,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Split the working body into prefix and postfix buckets using positions
/// collected from the classification mask.
///
/// The prefix ends at the first classified address character, or one past
/// the venue name when the solution classified one. The postfix starts one
/// past the last house-number/street character; failing that, at the first
/// admin character; failing that, one past the venue name; failing all,
/// at the end of the body (empty postfix).
pub fn segment(index: &MaskIndex, body: &str) -> Segments {
    let chars: Vec<char> = body.chars().collect();

    let mut cursor = index.first_field.unwrap_or(chars.len());
    if let Some(venue) = index.last_venue {
        cursor = venue + 1;
    }
    let prefix = take(&chars, 0, cursor);

    let cursor = match index.last_address() {
        Some(last) => last + 1,
        None => match (index.first_admin, index.last_venue) {
            (Some(admin), _) => admin,
            (None, Some(venue)) => venue + 1,
            (None, None) => chars.len(),
        },
    };
    let postfix = take(&chars, cursor, chars.len());

    Segments {
        prefix: normalize(&prefix),
        postfix: normalize(&postfix),
    }
}

/// Recover the naive "name, locality" split for inputs where the solver
/// classified nothing: text before the first comma becomes the name, the
/// remaining segments (each trimmed, rejoined with `", "`) become the
/// geography tail. Returns `None` when the prefix carries no comma.
pub fn naive_split(prefix: &str) -> Option<(String, String)> {
    let (head, tail) = prefix.split_once(',')?;
    let tail = tail
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(", ");
    Some((head.trim().to_string(), tail.trim().to_string()))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn take(chars: &[char], start: usize, end: usize) -> String {
    let end = end.min(chars.len());
    let start = start.min(end);
    chars[start..end].iter().collect()
}

fn normalize(s: &str) -> String {
    squash_whitespace(&join_separators(trim_edges(s)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Classification mask scanning.
//!
//! The external solver emits a mask string carrying exactly one code
//! character per character of the input text, e.g.:
//!
//! ```text
//! 'Foo Cafe 10 Main St London 10010 Earth'
//! '    VVVV NN SSSSSSS AAAAAA PPPPP      '
//! ```
//!
//! Segmentation only ever needs a handful of positions out of the mask
//! (first classified address character, last venue character, and so on),
//! so a single linear pass collects them all into a [`MaskIndex`] instead
//! of rescanning the mask string per question.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// MaskCode
// ---------------------------------------------------------------------------

/// Per-character classification code as emitted by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskCode {
    /// `V` — part of a venue/name span.
    Venue,
    /// `N` — part of a house-number span.
    Housenumber,
    /// `S` — part of a street span (primary or cross street).
    Street,
    /// `A` — part of an admin span.
    Admin,
    /// `P` — part of a postcode span.
    Postcode,
    /// Any other character — claimed by no classification.
    Unclassified,
}

impl MaskCode {
    pub fn from_char(c: char) -> Self {
        match c {
            'V' => MaskCode::Venue,
            'N' => MaskCode::Housenumber,
            'S' => MaskCode::Street,
            'A' => MaskCode::Admin,
            'P' => MaskCode::Postcode,
            _ => MaskCode::Unclassified,
        }
    }
}

// ---------------------------------------------------------------------------
// MaskIndex
// ---------------------------------------------------------------------------

/// Positions of interest within one classification mask.
///
/// All positions are char indices, not byte offsets, so they remain valid
/// lookups into the postcode-erased working body (which preserves char
/// alignment with the mask).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaskIndex {
    /// First position claimed by an address classification
    /// (`N`, `S`, `A`, or `P`).
    pub first_field: Option<usize>,
    /// Last position of a venue (`V`) character.
    pub last_venue: Option<usize>,
    /// Last position of a house-number (`N`) character.
    pub last_housenumber: Option<usize>,
    /// Last position of a street (`S`) character.
    pub last_street: Option<usize>,
    /// First position of an admin (`A`) character.
    pub first_admin: Option<usize>,
}

impl MaskIndex {
    /// Scan `mask` once, left to right, recording every position that
    /// prefix/postfix segmentation consults.
    pub fn scan(mask: &str) -> Self {
        let mut index = MaskIndex::default();
        for (i, c) in mask.chars().enumerate() {
            match MaskCode::from_char(c) {
                MaskCode::Venue => {
                    index.last_venue = Some(i);
                }
                MaskCode::Housenumber => {
                    index.first_field.get_or_insert(i);
                    index.last_housenumber = Some(i);
                }
                MaskCode::Street => {
                    index.first_field.get_or_insert(i);
                    index.last_street = Some(i);
                }
                MaskCode::Admin => {
                    index.first_field.get_or_insert(i);
                    index.first_admin.get_or_insert(i);
                }
                MaskCode::Postcode => {
                    index.first_field.get_or_insert(i);
                }
                MaskCode::Unclassified => {}
            }
        }
        index
    }

    /// Last position claimed by either a house-number or a street
    /// character, whichever comes later.
    pub fn last_address(&self) -> Option<usize> {
        match (self.last_housenumber, self.last_street) {
            (Some(n), Some(s)) => Some(n.max(s)),
            (n, s) => n.or(s),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

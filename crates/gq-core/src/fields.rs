use serde::{Deserialize, Serialize};

use crate::label::FieldLabel;

// ---------------------------------------------------------------------------
// ParsedQuery
// ---------------------------------------------------------------------------

/// Normalized field record driving a search-index query.
///
/// One `ParsedQuery` is built from scratch per input string and never
/// reused across calls. Every slot except `subject` is optional and
/// omitted from JSON when absent. `subject` is set exactly once, last,
/// after all other fields are final.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    /// Venue/business name, when the solver labeled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housenumber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Second street of an intersection, e.g. "Main St & Elm St".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Geographic trailer: either an admin-labeled span or the postfix
    /// bucket of unclassified trailing text, whichever wins last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    /// The single string targeting fulltext name matching downstream.
    #[serde(default)]
    pub subject: String,
}

impl ParsedQuery {
    /// Store one classified span into its slot.
    ///
    /// The first street-labeled span fills `street`; a second fills
    /// `cross_street` (an intersection). A third street span overwrites
    /// `cross_street`, and a repeat of any other label overwrites its
    /// slot: last write wins.
    pub fn assign(&mut self, label: FieldLabel, text: &str) {
        let value = Some(text.to_string());
        match label {
            FieldLabel::Name => self.name = value,
            FieldLabel::Housenumber => self.housenumber = value,
            FieldLabel::Street => {
                if self.street.is_none() {
                    self.street = value;
                } else {
                    self.cross_street = value;
                }
            }
            FieldLabel::Postcode => self.postcode = value,
            FieldLabel::Locality => self.locality = value,
            FieldLabel::Region => self.region = value,
            FieldLabel::Country => self.country = value,
            FieldLabel::Admin => self.admin = value,
        }
    }

    /// `true` when no classification has landed in any slot.
    ///
    /// This is the gate for the naive comma-split fallback: the solver
    /// produced a solution that classified nothing at all, which is common
    /// for venue names.
    pub fn is_unclassified(&self) -> bool {
        self.name.is_none()
            && self.housenumber.is_none()
            && self.street.is_none()
            && self.cross_street.is_none()
            && self.postcode.is_none()
            && self.locality.is_none()
            && self.region.is_none()
            && self.country.is_none()
            && self.admin.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReconError;

// ---------------------------------------------------------------------------
// FieldLabel
// ---------------------------------------------------------------------------

/// Classification attached to one span by the external solver.
///
/// The solver hands labels over as strings; parsing them into this closed
/// enum up front means the label→slot mapping in
/// [`crate::fields::ParsedQuery::assign`] is exhaustively checked and an
/// unrecognised label is rejected at the boundary rather than silently
/// keyed into the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldLabel {
    /// Venue or business name.
    Name,
    Housenumber,
    Street,
    Postcode,
    Locality,
    Region,
    Country,
    /// Catch-all geographic trailer (locality/region/country chain) not
    /// otherwise broken into individual levels.
    Admin,
}

impl FieldLabel {
    /// Return the canonical snake_case string representation of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldLabel::Name => "name",
            FieldLabel::Housenumber => "housenumber",
            FieldLabel::Street => "street",
            FieldLabel::Postcode => "postcode",
            FieldLabel::Locality => "locality",
            FieldLabel::Region => "region",
            FieldLabel::Country => "country",
            FieldLabel::Admin => "admin",
        }
    }
}

impl std::fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldLabel {
    type Err = ReconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FieldLabel::Name),
            "housenumber" => Ok(FieldLabel::Housenumber),
            "street" => Ok(FieldLabel::Street),
            "postcode" => Ok(FieldLabel::Postcode),
            "locality" => Ok(FieldLabel::Locality),
            "region" => Ok(FieldLabel::Region),
            "country" => Ok(FieldLabel::Country),
            "admin" => Ok(FieldLabel::Admin),
            other => Err(ReconError::UnknownLabel(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&FieldLabel::Housenumber).unwrap(),
            "\"housenumber\""
        );
        assert_eq!(
            serde_json::to_string(&FieldLabel::Name).unwrap(),
            "\"name\""
        );
        assert_eq!(
            serde_json::to_string(&FieldLabel::Admin).unwrap(),
            "\"admin\""
        );
    }

    #[test]
    fn label_round_trips_through_str() {
        let labels = [
            FieldLabel::Name,
            FieldLabel::Housenumber,
            FieldLabel::Street,
            FieldLabel::Postcode,
            FieldLabel::Locality,
            FieldLabel::Region,
            FieldLabel::Country,
            FieldLabel::Admin,
        ];
        for label in labels {
            assert_eq!(label.as_str().parse::<FieldLabel>().unwrap(), label);
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = "borough".parse::<FieldLabel>().unwrap_err();
        assert!(matches!(err, ReconError::UnknownLabel(ref s) if s == "borough"));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(FieldLabel::Locality.to_string(), "locality");
        assert_eq!(FieldLabel::Admin.to_string(), "admin");
    }
}

//! Subject selection and admin de-duplication.
//!
//! The subject is the single string targeted at fulltext name matching in
//! downstream search queries. It is chosen by a strict priority rule over
//! the finalized field record and the prefix bucket, and it is always the
//! last field to be set.

use gq_core::ParsedQuery;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Set `fields.subject` using the fixed priority rule, first match wins:
///
/// 1. housenumber + street → `"{housenumber} {street}"` (address query)
/// 2. street + cross_street → `"{street} & {cross_street}"` (intersection)
/// 3. street
/// 4. prefix (e.g. a venue query)
/// 5. postcode
/// 6. locality, then admin de-duplication
/// 7. region, then admin de-duplication
/// 8. country, then admin de-duplication
/// 9. the entire original input text
///
/// "Non-empty" throughout means present and not whitespace-only.
pub fn resolve_subject(fields: &mut ParsedQuery, prefix: &str, original: &str) {
    let (subject, dedupe) = choose(fields, prefix, original);
    fields.subject = subject;
    if dedupe {
        cut_admin(fields);
    }
}

/// Remove a verbatim copy of the subject from the head of `admin`.
///
/// The match is char-exact and case-sensitive; differing capitalization
/// between subject and admin leaves the field alone. The remainder is
/// trimmed of commas and spaces, and when nothing remains the admin field
/// is dropped entirely.
pub fn cut_admin(fields: &mut ParsedQuery) {
    let Some(admin) = fields.admin.as_deref() else {
        return;
    };
    let Some(rest) = admin.strip_prefix(&fields.subject) else {
        return;
    };
    let rest = rest.trim_matches(|c| c == ',' || c == ' ').to_string();
    fields.admin = if rest.is_empty() { None } else { Some(rest) };
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Pick the subject string. The flag requests admin de-duplication, which
/// applies when the subject came from a geography field that postfix
/// bucketing may have duplicated into `admin`.
fn choose(fields: &ParsedQuery, prefix: &str, original: &str) -> (String, bool) {
    if let (Some(number), Some(street)) = (filled(&fields.housenumber), filled(&fields.street)) {
        // An address query.
        (format!("{number} {street}"), false)
    } else if let (Some(street), Some(cross)) =
        (filled(&fields.street), filled(&fields.cross_street))
    {
        // An intersection query.
        (format!("{street} & {cross}"), false)
    } else if let Some(street) = filled(&fields.street) {
        (street.to_string(), false)
    } else if !prefix.trim().is_empty() {
        // A query led by unclassified text, e.g. a venue name.
        (prefix.to_string(), false)
    } else if let Some(postcode) = filled(&fields.postcode) {
        (postcode.to_string(), false)
    } else if let Some(locality) = filled(&fields.locality) {
        (locality.to_string(), true)
    } else if let Some(region) = filled(&fields.region) {
        (region.to_string(), true)
    } else if let Some(country) = filled(&fields.country) {
        (country.to_string(), true)
    } else {
        // Unknown query type: fall back to the whole input.
        (original.to_string(), false)
    }
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

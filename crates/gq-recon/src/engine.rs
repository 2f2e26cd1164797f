//! Reconciliation entry points.
//!
//! Three phases run in fixed sequence with no branching back:
//!
//! 1. **Span mapping** — labeled spans into field slots, with duplicate
//!    street labels promoted to primary/cross street.
//! 2. **Mask segmentation** — unclassified characters bucketed into a
//!    prefix (venue/name candidate) and a postfix (geography candidate),
//!    over a working body with postcode characters erased.
//! 3. **Subject resolution** — the fixed priority rule picks the query
//!    subject, reconciling residual admin text against it.
//!
//! The whole pipeline is a pure, synchronous transformation: no I/O, no
//! shared state, no retries.

use gq_core::{MaskIndex, ParsedQuery, Result, Solution, Solver, SolverOutput};

use crate::segment::{naive_split, segment};
use crate::subject::resolve_subject;
use crate::text::build_body;

/// Run the injected solver over `text` and reconcile its first solution
/// into a [`ParsedQuery`].
///
/// A solver producing zero solutions is treated as having produced the
/// empty solution (no pairs, empty mask), so reconciliation always has a
/// defined input and ultimately degrades to the raw text as subject.
pub fn parse<S: Solver>(solver: &S, text: &str) -> Result<ParsedQuery> {
    let output = solver.solve(text)?;
    Ok(reconcile(&output))
}

/// Reconcile one solver run into a normalized field record.
///
/// Only the first solution is consumed; accommodating further candidates
/// is an explicit non-goal for now.
pub fn reconcile(output: &SolverOutput) -> ParsedQuery {
    let empty = Solution::default();
    let solution = output.solutions.first().unwrap_or(&empty);

    // Phase 1: map labeled spans into field slots.
    let mut fields = ParsedQuery::default();
    for pair in &solution.pairs {
        fields.assign(pair.label, &pair.text);
    }

    // Phase 2: bucket the unclassified characters. The working body blanks
    // out postcode characters so they never leak into either bucket.
    let body = build_body(&output.body, &solution.mask);
    let index = MaskIndex::scan(&solution.mask);
    let mut segments = segment(&index, &body);

    // When the solver classified nothing at all, fall back to the naive
    // comma split: 'Friendly Cafe, Footown' → name plus geography tail.
    if fields.is_unclassified() && !segments.prefix.is_empty() && segments.postfix.is_empty() {
        if let Some((prefix, postfix)) = naive_split(&segments.prefix) {
            segments.prefix = prefix;
            segments.postfix = postfix;
        }
    }

    // Trailing free text co-describes the same geographic tail as any
    // admin-labeled span, so the postfix bucket takes the admin slot.
    if !segments.postfix.is_empty() {
        fields.admin = Some(segments.postfix.clone());
    }

    // Phase 3: pick the subject, last.
    resolve_subject(&mut fields, &segments.prefix, &output.body);
    fields
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use gq_core::{ClassifiedSpan, FieldLabel, ReconError};

    fn span(label: FieldLabel, text: &str) -> ClassifiedSpan {
        ClassifiedSpan {
            label,
            text: text.to_string(),
        }
    }

    fn output(text: &str, mask: &str, pairs: Vec<ClassifiedSpan>) -> SolverOutput {
        SolverOutput {
            body: text.to_string(),
            solutions: vec![Solution {
                pairs,
                mask: mask.to_string(),
            }],
        }
    }

    /// Canned solver returning a fixed output regardless of input.
    struct StubSolver(SolverOutput);

    impl Solver for StubSolver {
        fn solve(&self, _text: &str) -> Result<SolverOutput> {
            Ok(self.0.clone())
        }
    }

    /// Solver that always fails, for error propagation tests.
    struct FailingSolver;

    impl Solver for FailingSolver {
        fn solve(&self, _text: &str) -> Result<SolverOutput> {
            Err(ReconError::Solver("classifier unavailable".to_string()))
        }
    }

    // -----------------------------------------------------------------------
    // Worked examples
    // -----------------------------------------------------------------------

    #[test]
    fn address_with_admin_trailer() {
        // '10 Main St, Springfield'
        let out = output(
            "10 Main St, Springfield",
            "NN SSSSSSS  AAAAAAAAAAA",
            vec![
                span(FieldLabel::Housenumber, "10"),
                span(FieldLabel::Street, "Main St"),
            ],
        );
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "10 Main St");
        assert_eq!(fields.housenumber.as_deref(), Some("10"));
        assert_eq!(fields.street.as_deref(), Some("Main St"));
        assert_eq!(fields.admin.as_deref(), Some("Springfield"));
    }

    #[test]
    fn unclassified_venue_with_comma() {
        // 'Friendly Cafe, Footown' — the classifier found nothing.
        let out = output("Friendly Cafe, Footown", "", vec![]);
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "Friendly Cafe");
        assert_eq!(fields.admin.as_deref(), Some("Footown"));
    }

    #[test]
    fn intersection_subject() {
        // 'Main St & Elm St'
        let out = output(
            "Main St & Elm St",
            "SSSSSSS   SSSSSS",
            vec![
                span(FieldLabel::Street, "Main St"),
                span(FieldLabel::Street, "Elm St"),
            ],
        );
        let fields = reconcile(&out);
        assert_eq!(fields.street.as_deref(), Some("Main St"));
        assert_eq!(fields.cross_street.as_deref(), Some("Elm St"));
        assert_eq!(fields.subject, "Main St & Elm St");
    }

    #[test]
    fn bare_locality_deduplicates_admin() {
        // 'London' classified wholly as locality; the postfix bucket lands
        // the same text in admin, which de-duplication then removes.
        let out = output(
            "London",
            "AAAAAA",
            vec![span(FieldLabel::Locality, "London")],
        );
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "London");
        assert!(fields.admin.is_none());
    }

    // -----------------------------------------------------------------------
    // Degradation paths
    // -----------------------------------------------------------------------

    #[test]
    fn unclassified_without_comma_uses_whole_text() {
        let out = output("Friendly Cafe", "", vec![]);
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "Friendly Cafe");
        assert!(fields.admin.is_none());
        assert!(fields.is_unclassified());
    }

    #[test]
    fn zero_solutions_substitutes_empty_solution() {
        let out = SolverOutput {
            body: "Friendly Cafe, Footown".to_string(),
            solutions: vec![],
        };
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "Friendly Cafe");
        assert_eq!(fields.admin.as_deref(), Some("Footown"));
    }

    #[test]
    fn empty_input_yields_empty_subject() {
        let out = SolverOutput {
            body: String::new(),
            solutions: vec![],
        };
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "");
        assert!(fields.is_unclassified());
    }

    #[test]
    fn only_first_solution_is_used() {
        let out = SolverOutput {
            body: "Main St".to_string(),
            solutions: vec![
                Solution {
                    pairs: vec![span(FieldLabel::Street, "Main St")],
                    mask: "SSSSSSS".to_string(),
                },
                Solution {
                    pairs: vec![span(FieldLabel::Locality, "Main St")],
                    mask: "AAAAAAA".to_string(),
                },
            ],
        };
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "Main St");
        assert_eq!(fields.street.as_deref(), Some("Main St"));
        assert!(fields.locality.is_none());
    }

    // -----------------------------------------------------------------------
    // Postcode erasure
    // -----------------------------------------------------------------------

    #[test]
    fn postcode_chars_never_reach_the_buckets() {
        // 'Main St 10010' — postcode erased from the body, street subject.
        let out = output(
            "Main St 10010",
            "SSSSSSS PPPPP",
            vec![
                span(FieldLabel::Street, "Main St"),
                span(FieldLabel::Postcode, "10010"),
            ],
        );
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "Main St");
        assert_eq!(fields.postcode.as_deref(), Some("10010"));
        assert!(fields.admin.is_none(), "erased chars leave no postfix");
    }

    #[test]
    fn postcode_only_query() {
        let out = output(
            "10010",
            "PPPPP",
            vec![span(FieldLabel::Postcode, "10010")],
        );
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "10010");
    }

    // -----------------------------------------------------------------------
    // Venue handling
    // -----------------------------------------------------------------------

    #[test]
    fn venue_prefix_becomes_subject() {
        let out = output(
            "Foo Cafe London",
            "VVVVVVVV AAAAAA",
            vec![
                span(FieldLabel::Name, "Foo Cafe"),
                span(FieldLabel::Locality, "London"),
            ],
        );
        let fields = reconcile(&out);
        assert_eq!(fields.subject, "Foo Cafe");
        assert_eq!(fields.name.as_deref(), Some("Foo Cafe"));
        assert_eq!(fields.admin.as_deref(), Some("London"));
    }

    #[test]
    fn postfix_overwrites_span_mapped_admin() {
        // An admin span and trailing free text co-describe the same
        // geographic tail; the postfix bucket wins the slot.
        let out = output(
            "10 Main St, Springfield USA",
            "NN SSSSSSS  AAAAAAAAAAAAAAA",
            vec![
                span(FieldLabel::Housenumber, "10"),
                span(FieldLabel::Street, "Main St"),
                span(FieldLabel::Admin, "Springfield"),
            ],
        );
        let fields = reconcile(&out);
        assert_eq!(fields.admin.as_deref(), Some("Springfield USA"));
    }

    // -----------------------------------------------------------------------
    // Round-trip of non-erased characters
    // -----------------------------------------------------------------------

    fn letters(s: &str) -> String {
        s.chars().filter(|c| *c != ' ' && *c != ',').collect()
    }

    #[test]
    fn unclassified_buckets_cover_the_whole_body() {
        // With nothing classified, prefix + postfix recover every
        // character of the input up to separator normalization.
        let out = output("Friendly Cafe, Footown", "", vec![]);
        let fields = reconcile(&out);
        let recovered = format!(
            "{}{}",
            letters(&fields.subject),
            letters(fields.admin.as_deref().unwrap_or(""))
        );
        assert_eq!(recovered, letters("Friendly Cafe, Footown"));
    }

    #[test]
    fn venue_buckets_cover_the_whole_body() {
        let out = output(
            "Foo Cafe London",
            "VVVVVVVV AAAAAA",
            vec![span(FieldLabel::Name, "Foo Cafe")],
        );
        let fields = reconcile(&out);
        let recovered = format!(
            "{}{}",
            letters(&fields.subject),
            letters(fields.admin.as_deref().unwrap_or(""))
        );
        assert_eq!(recovered, letters("Foo Cafe London"));
    }

    #[test]
    fn reconciled_record_serializes_without_absent_fields() {
        let out = output("Friendly Cafe, Footown", "", vec![]);
        let json = serde_json::to_string(&reconcile(&out)).expect("serialize");
        assert!(json.contains("\"subject\":\"Friendly Cafe\""));
        assert!(json.contains("\"admin\":\"Footown\""));
        assert!(!json.contains("street"));
        assert!(!json.contains("postcode"));
    }

    // -----------------------------------------------------------------------
    // Solver injection
    // -----------------------------------------------------------------------

    #[test]
    fn parse_delegates_to_injected_solver() {
        let solver = StubSolver(output(
            "10 Main St, Springfield",
            "NN SSSSSSS  AAAAAAAAAAA",
            vec![
                span(FieldLabel::Housenumber, "10"),
                span(FieldLabel::Street, "Main St"),
            ],
        ));
        let fields = parse(&solver, "10 Main St, Springfield").expect("parse");
        assert_eq!(fields.subject, "10 Main St");
        assert_eq!(fields.admin.as_deref(), Some("Springfield"));
    }

    #[test]
    fn parse_propagates_solver_errors() {
        let err = parse(&FailingSolver, "anything").unwrap_err();
        assert!(matches!(err, ReconError::Solver(_)));
    }

    #[test]
    fn separate_invocations_share_nothing() {
        let solver = StubSolver(output("Friendly Cafe, Footown", "", vec![]));
        let first = parse(&solver, "Friendly Cafe, Footown").expect("parse");
        let second = parse(&solver, "Friendly Cafe, Footown").expect("parse");
        assert_eq!(first, second);
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{ReconError, Result};
use crate::label::FieldLabel;

// ---------------------------------------------------------------------------
// ClassifiedSpan / Solution
// ---------------------------------------------------------------------------

/// One labeled span from a solver solution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedSpan {
    pub label: FieldLabel,
    /// Span text exactly as it appears in the input.
    pub text: String,
}

/// One candidate labeling of the input string.
///
/// `pairs` is ordered by left-to-right occurrence in the source text.
/// `mask` carries one classification code character per input character
/// (see [`crate::mask::MaskCode`]).
///
/// `Default` is the empty solution — no pairs, empty mask — substituted
/// when the solver produces no solutions at all, so that downstream logic
/// never operates on an undefined solution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub pairs: Vec<ClassifiedSpan>,
    pub mask: String,
}

// ---------------------------------------------------------------------------
// SolverOutput / Solver
// ---------------------------------------------------------------------------

/// Everything the reconciler consumes from one solver run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverOutput {
    /// The full original input text as seen by the solver. Used as the
    /// base for the postcode-erased working body and as the last-resort
    /// subject.
    pub body: String,
    /// Candidate solutions, best first. Only the first is consumed.
    pub solutions: Vec<Solution>,
}

impl SolverOutput {
    /// Boundary check for untrusted collaborators: every solution's mask
    /// must carry exactly one code character per character of `body`.
    ///
    /// Reconciliation degrades gracefully on malformed masks (a short mask
    /// leaves the tail unclassified), so this check is opt-in rather than
    /// enforced by the parse entry point.
    pub fn validate(&self) -> Result<()> {
        let text_len = self.body.chars().count();
        for solution in &self.solutions {
            let mask_len = solution.mask.chars().count();
            if mask_len != text_len {
                return Err(ReconError::MaskLength {
                    mask: mask_len,
                    text: text_len,
                });
            }
        }
        Ok(())
    }
}

/// The external tokenizer/classifier/solver, injected by the caller.
///
/// The reconciler holds no solver state between calls; implementations
/// that are not reentrant should construct a fresh instance per call.
pub trait Solver {
    fn solve(&self, text: &str) -> Result<SolverOutput>;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

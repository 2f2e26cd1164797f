use thiserror::Error;

/// Top-level error type for the gq-core crate and dependents.
///
/// Reconciliation itself never fails — it degrades to coarser output
/// instead — so these variants cover the collaborator boundary only:
/// solver failures, unknown label strings, and malformed masks.
#[derive(Debug, Error)]
pub enum ReconError {
    #[error("solver error: {0}")]
    Solver(String),

    #[error("unknown field label: {0:?}")]
    UnknownLabel(String),

    #[error("mask has {mask} characters but text has {text}")]
    MaskLength { mask: usize, text: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, ReconError>;

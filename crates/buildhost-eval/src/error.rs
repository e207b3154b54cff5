//! Error types for the evaluation pipeline.
//!
//! Only fatal conditions surface as [`EvalError`]; recoverable outcomes
//! (missing file, failed design-time build) are returned as data through
//! [`crate::loader::LoadResult`].

use thiserror::Error;

/// Fatal errors raised by project evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// No installed toolset has both a parsable version and an existing
    /// path. Nothing can be evaluated; hosts are expected to abort startup.
    #[error("no legal build toolsets available")]
    NoLegalToolsets,

    /// The evaluation engine rejected the project file.
    #[error("evaluation failed for '{path}': {message}")]
    Evaluation { path: String, message: String },

    /// The build collaborator faulted (distinct from an orderly build
    /// failure, which is reported through diagnostics).
    #[error("design-time build fault: {message}")]
    BuildFault { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

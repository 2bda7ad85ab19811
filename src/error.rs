//! Error type shared by the rewriter, interpreter, renderers and configuration loader.

/// Crate-level error type.
#[derive(thiserror::Error, Debug)]
pub enum PlantError {
    /// A `]` was reached while the branch stack was empty.
    #[error("unbalanced branch: `]` at position {position} has no matching `[`")]
    UnbalancedBranch { position: usize },

    /// A `[` would push the branch stack past its configured depth.
    #[error("branch nesting at position {position} exceeds the maximum depth of {max}")]
    BranchTooDeep { position: usize, max: usize },

    /// A rewrite round produced a sentence longer than the configured cap.
    #[error("sentence grew to {len} symbols after iteration {iteration} (limit {max})")]
    SentenceTooLong {
        iteration: usize,
        len: usize,
        max: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlantError>;

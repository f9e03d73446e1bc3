//! Error types for skel-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] skel_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Iteration cap must be at least 1
    #[error("max_iterations must be a positive integer")]
    InvalidMaxIterations,
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;

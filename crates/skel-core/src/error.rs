//! Error types for skel-core

use thiserror::Error;

/// Errors produced by the binary-image substrate
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// A raw pixel buffer contained a value other than the two sentinels
    /// (0 for background, 255 for foreground)
    #[error("non-binary pixel value {value} at ({x}, {y})")]
    NonBinaryValue { x: u32, y: u32, value: u8 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Image dimension mismatch
    #[error("dimension mismatch: expected {}x{}, got {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for skel-core operations
pub type Result<T> = std::result::Result<T, Error>;

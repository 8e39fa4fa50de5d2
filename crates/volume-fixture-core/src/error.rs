//! Error types for volume-fixture.

use thiserror::Error;

/// The main error type for volume-fixture operations.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The shape is not a triple of positive extents.
    #[error("shape {dims:?} must be 3 positive extents (depth, height, width)")]
    InvalidShape { dims: Vec<usize> },

    /// The cube edge is non-positive or does not fit inside the shape.
    #[error("cube size {cube_size} must be > 0 and <= every extent of shape {shape:?}")]
    InvalidCubeSize { cube_size: i64, shape: Vec<usize> },

    /// The shape has more cells than can be addressed.
    #[error("shape {dims:?} has too many cells to allocate")]
    VolumeTooLarge { dims: Vec<usize> },

    /// Data size mismatch.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for volume-fixture operations.
pub type Result<T> = std::result::Result<T, FixtureError>;

//! Error types for pattern generation

use std::path::PathBuf;
use thiserror::Error;

/// Common result type used throughout the library
pub type Result<T> = std::result::Result<T, MoireFieldError>;

/// Errors raised while loading coefficient tables or generating patterns
#[derive(Debug, Error)]
pub enum MoireFieldError {
    #[error("coefficient source unavailable: {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed coefficient table at line {line}: {message}")]
    MalformedTable { line: usize, message: String },

    #[error("grid coordinate arrays are empty")]
    EmptyGrid,

    #[error("grid shape mismatch: xx is {xx:?}, yy is {yy:?}")]
    GridShapeMismatch {
        xx: (usize, usize),
        yy: (usize, usize),
    },

    #[error("lattice constant must be positive and finite, got {value}")]
    NonPositiveLatticeConstant { value: f64 },
}

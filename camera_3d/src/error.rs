//! Error types for the Camera3D crate
//!
//! The camera's regular mutators never fail. Errors only come out of the
//! validated `try_*` mutators, which reject input that would otherwise
//! produce degenerate (NaN) matrices.

use std::fmt;

/// Result type for Camera3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera3D errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument would leave the camera in a degenerate state
    /// (zero-length or non-finite vector, parallel forward/up,
    /// empty window, inverted clip planes)
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

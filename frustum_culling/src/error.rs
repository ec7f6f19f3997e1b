//! Error types for the culling core
//!
//! The geometric core (frustum extraction, AABB transform, visibility test)
//! never fails. Errors only come from the boundaries: malformed vertex
//! buffers handed over by the mesh subsystem, and camera settings rejected
//! before they reach the frustum extractor.

use std::fmt;

/// Result type for culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Culling errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Vertex buffer does not hold the announced number of positions
    InvalidVertexData(String),

    /// Clip range rejected at the camera boundary (near <= 0, far <= near, NaN)
    InvalidClipRange {
        /// Requested near distance
        near: f32,
        /// Requested far distance
        far: f32,
    },

    /// Viewport with zero or non-finite size
    InvalidViewport(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidVertexData(msg) => write!(f, "Invalid vertex data: {}", msg),
            Error::InvalidClipRange { near, far } => {
                write!(f, "Invalid clip range: near={} far={}", near, far)
            }
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an [`Error`], logging it with file:line at ERROR severity.
///
/// ```ignore
/// return Err(cull_err!(
///     "culling::AABB",
///     Error::InvalidVertexData(format!("{} floats", len))
/// ));
/// ```
#[macro_export]
macro_rules! cull_err {
    ($source:expr, $error:expr) => {{
        let error = $error;
        $crate::cull_error!($source, "{}", error);
        error
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

use std::fmt;

use thiserror::Error;

/// Errors raised while constructing or measuring a shape.
///
/// The message text is shown to users verbatim, so callers may match on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("{0}")]
    InvalidArgument(String),
}

impl GeometryError {
    /// Shorthand for building an [`GeometryError::InvalidArgument`].
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidArgument(message) => message,
        }
    }
}

/// Which form a text value failed to parse in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// Side count, side length or height of a regular polygon.
    RegularInput,
    /// Vertex coordinates or height of an arbitrary polygon.
    VertexInput,
}

/// Errors produced at the compute boundary, rendered as display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComputeError {
    #[error("Error: {0}")]
    Parse(ParseFailure),

    #[error("Error: {0}")]
    Invalid(#[from] GeometryError),
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::RegularInput => "Please enter numeric values",
            Self::VertexInput => "Check vertex coordinates and height",
        })
    }
}

/// Convenience type alias for results using [`GeometryError`].
pub type Result<T> = std::result::Result<T, GeometryError>;

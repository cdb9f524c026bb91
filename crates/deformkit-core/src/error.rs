//! Error handling for Deformkit
//!
//! Only usage and invariant violations are errors. They mean the caller broke
//! the lifecycle contract of a contour or an interaction:
//! - attaching an interaction twice, or detaching one that is not attached
//! - addressing a contour point that does not exist
//! - asking a parametric shape for an edit it cannot express
//!
//! Constraint rejections are not errors; they are plain booleans inside the
//! gesture protocol. All error types use `thiserror`.

use thiserror::Error;

/// Usage or invariant violation raised by the kernel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The interaction is already attached to a host surface.
    #[error("Interaction already attached")]
    AlreadyAttached,

    /// The interaction is not attached to a host surface.
    #[error("Interaction not attached")]
    NotAttached,

    /// A point index outside the contour's point list.
    #[error("Point index {index} out of bounds for contour with {len} points")]
    PointIndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of points in the contour.
        len: usize,
    },

    /// The shape cannot perform the requested edit.
    #[error("Operation '{operation}' is not supported by {shape}")]
    Unsupported {
        /// The rejected operation.
        operation: &'static str,
        /// The shape kind that rejected it.
        shape: &'static str,
    },

    /// Shape parameters that cannot describe a valid contour.
    #[error("Invalid shape: {reason}")]
    InvalidShape {
        /// Why the parameters were rejected.
        reason: String,
    },

    /// No controller with the given id is registered.
    #[error("Unknown controller {0}")]
    UnknownController(String),
}

impl Error {
    /// Shorthand for [`Error::Unsupported`].
    pub fn unsupported(operation: &'static str, shape: &'static str) -> Self {
        Self::Unsupported { operation, shape }
    }

    /// Shorthand for [`Error::InvalidShape`].
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }
}

/// Result type alias using the kernel [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for codec operations.

use thiserror::Error;

/// Result type alias for codec operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Codec error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Decode input is malformed: a truncated tree, a bit sequence that
    /// runs out before reaching a leaf, a partial triple, or a
    /// back-reference pointing before the start of the output.
    #[error("corrupt stream: {message}")]
    CorruptStream { message: String },

    /// A parameter is outside its documented range.
    #[error("invalid parameter {name}={value}: must be in range [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// Caller-provided output buffer too small.
    #[error("buffer too small: need {required} bytes, got {provided}")]
    BufferTooSmall { required: usize, provided: usize },
}

impl Error {
    /// Create a corrupt stream error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Error::CorruptStream {
            message: message.into(),
        }
    }

    /// Create a corrupt stream error with offset context.
    pub fn corrupt_at(message: impl Into<String>, offset: usize) -> Self {
        Error::CorruptStream {
            message: format!("{} at offset {}", message.into(), offset),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(name: &'static str, value: u32, min: u32, max: u32) -> Self {
        Error::InvalidParameter {
            name,
            value,
            min,
            max,
        }
    }

    /// Create a buffer too small error.
    pub fn buffer_too_small(required: usize, provided: usize) -> Self {
        Error::BufferTooSmall { required, provided }
    }

    /// Get error category for metrics.
    pub fn category(&self) -> &'static str {
        match self {
            Error::CorruptStream { .. } => "corrupt_stream",
            Error::InvalidParameter { .. } => "invalid_parameter",
            Error::BufferTooSmall { .. } => "buffer_too_small",
        }
    }
}

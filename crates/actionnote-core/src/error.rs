//! Error types for the ActionNote library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all ActionNote operations.
#[derive(Error, Debug)]
pub enum ActionNoteError {
    /// Malformed time range or date string
    #[error("Invalid format for '{field}' ({input:?}): {reason}")]
    Format {
        field: String,
        input: String,
        reason: String,
    },
    /// Event end time is not after its start time
    #[error("Invalid time range: end {end} is not after start {start}")]
    InvalidRange {
        start: jiff::civil::Time,
        end: jiff::civil::Time,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating format errors.
pub struct FormatErrorBuilder {
    field: String,
    input: String,
}

impl FormatErrorBuilder {
    /// Create a new format error builder for a field and the offending input.
    pub fn new(field: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            input: input.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ActionNoteError {
        ActionNoteError::Format {
            field: self.field,
            input: self.input,
            reason: reason.into(),
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ActionNoteError {
        ActionNoteError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ActionNoteError {
    /// Creates a builder for format errors.
    pub fn format(field: impl Into<String>, input: impl Into<String>) -> FormatErrorBuilder {
        FormatErrorBuilder::new(field, input)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error for the given path.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors caused by caller-supplied values rather than
    /// the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Format { .. } | Self::InvalidRange { .. } | Self::InvalidInput { .. }
        )
    }
}

/// Result type alias for ActionNote operations
pub type Result<T> = std::result::Result<T, ActionNoteError>;

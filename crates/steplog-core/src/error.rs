//! Error types for steplog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the whole conversion pipeline.
///
/// Every variant carries enough context (document, step id/index, field,
/// offending value) for the caller to print an actionable message.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum StepLogError {
    /// A required input document is missing.
    #[error("Input not found: {document} at '{path}'")]
    InputNotFound { document: String, path: String },

    /// A step entry cannot be turned into a Step.
    #[error("Malformed step #{index} (id {step_id}): {field} - {reason}")]
    MalformedStep {
        index: usize,
        step_id: String,
        field: String,
        reason: String,
    },

    /// A timestamp field is not a representable instant.
    #[error("Invalid timestamp in '{field}': {value}")]
    InvalidTimestamp { field: String, value: String },

    /// The display zone is not a known IANA identifier.
    #[error("Unknown time zone '{zone}'")]
    TimezoneResolution { zone: String },

    /// A step media directory exists but could not be listed, or a media
    /// file could not be copied.
    #[error("Media access error for step #{index} (id {step_id}) at '{path}': {message}")]
    MediaAccess {
        index: usize,
        step_id: String,
        path: String,
        message: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Template rendering error
    #[error("Render error: {0}")]
    Render(String),
}

impl StepLogError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InputNotFound error
    pub fn input_not_found(document: impl Into<String>, path: impl Into<String>) -> Self {
        Self::InputNotFound {
            document: document.into(),
            path: path.into(),
        }
    }

    /// Creates a MalformedStep error
    pub fn malformed_step(
        index: usize,
        step_id: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedStep {
            index,
            step_id: step_id.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an InvalidTimestamp error
    pub fn invalid_timestamp(field: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidTimestamp {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Creates a TimezoneResolution error
    pub fn timezone(zone: impl Into<String>) -> Self {
        Self::TimezoneResolution { zone: zone.into() }
    }

    /// Creates a MediaAccess error without step context; see
    /// [`StepLogError::with_step`].
    pub fn media_access(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MediaAccess {
            index: 0,
            step_id: String::new(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Render error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// Returns the same error with the step's index and id attached.
    ///
    /// Only `MediaAccess` errors are raised without step context; other
    /// variants are returned unchanged.
    pub fn with_step(self, index: usize, id: impl Into<String>) -> Self {
        match self {
            Self::MediaAccess { path, message, .. } => Self::MediaAccess {
                index,
                step_id: id.into(),
                path,
                message,
            },
            other => other,
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InputNotFound error
    pub fn is_input_not_found(&self) -> bool {
        matches!(self, Self::InputNotFound { .. })
    }

    /// Check if this is a MalformedStep error
    pub fn is_malformed_step(&self) -> bool {
        matches!(self, Self::MalformedStep { .. })
    }

    /// Check if this is a TimezoneResolution error
    pub fn is_timezone(&self) -> bool {
        matches!(self, Self::TimezoneResolution { .. })
    }

    /// Check if this is a MediaAccess error
    pub fn is_media_access(&self) -> bool {
        matches!(self, Self::MediaAccess { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Whether the pipeline may drop the offending step and keep going
    /// when configured to skip malformed steps.
    pub fn is_step_scoped(&self) -> bool {
        matches!(
            self,
            Self::MalformedStep { .. } | Self::MediaAccess { .. } | Self::InvalidTimestamp { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for StepLogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for StepLogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for StepLogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, StepLogError>`.
pub type Result<T> = std::result::Result<T, StepLogError>;

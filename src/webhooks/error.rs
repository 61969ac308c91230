//! Error types for admission callbacks.
//!
//! Callbacks return these errors and the validator and mutator hand the first
//! one back to the caller unchanged.

use thiserror::Error;

/// Error type for validation and mutation callbacks
#[derive(Error, Debug)]
pub enum Error {
    /// Callback rejected the object with a machine-readable reason
    #[error("[{reason}] {message}")]
    Denied { reason: String, message: String },

    /// Plain rejection message
    #[error("{0}")]
    Message(String),

    /// Object could not be interpreted by the callback
    #[error("Invalid object: {0}")]
    Invalid(String),

    /// Admission operation arrived without the object it requires
    #[error("{operation} request is missing {field}")]
    MissingObject {
        operation: &'static str,
        field: &'static str,
    },

    /// Context was cancelled before the callback finished
    #[error("Context cancelled")]
    Cancelled,

    /// Kubernetes API error raised by a callback that consults the cluster
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Any other callback failure
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Create a denial carrying a reason and a message
    pub fn denied(reason: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Denied {
            reason: reason.into(),
            message: message.into(),
        }
    }

    /// Create an error that displays exactly `message`
    pub fn msg(message: impl Into<String>) -> Self {
        Error::Message(message.into())
    }

    /// Check if the callback explicitly denied the object
    pub fn is_denied(&self) -> bool {
        matches!(self, Error::Denied { .. })
    }

    /// Short reason for the rejection, suitable for an admission response
    pub fn reason(&self) -> &str {
        match self {
            Error::Denied { reason, .. } => reason,
            Error::Message(_) => "ValidationFailed",
            Error::Invalid(_) | Error::MissingObject { .. } => "InvalidRequest",
            Error::Cancelled => "Cancelled",
            Error::Kube(_) | Error::Serialization(_) | Error::Other(_) => "InternalError",
        }
    }
}

/// Result type alias for admission callbacks
pub type Result<T> = std::result::Result<T, Error>;

// Error types for ingestion and retrieval
//
// Every resolution failure is one of five kinds. The HTTP layer maps kinds to
// status codes in one place (server::response), so nothing below this module
// knows about HTTP.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Failure kinds surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    MissingParameter,
    NotFound,
    InvalidFormat,
    PayloadTooLarge,
    IoFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingParameter => "missing_parameter",
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::PayloadTooLarge => "payload_too_large",
            ErrorKind::IoFailure => "io_failure",
        }
    }

    /// Client errors are the caller's to fix; everything else is ours.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ErrorKind::IoFailure)
    }
}

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{context}: {source}")]
    IoFailure {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            IngestError::MissingParameter(_) => ErrorKind::MissingParameter,
            IngestError::NotFound(_) => ErrorKind::NotFound,
            IngestError::InvalidFormat(_) => ErrorKind::InvalidFormat,
            IngestError::PayloadTooLarge(_) => ErrorKind::PayloadTooLarge,
            IngestError::IoFailure { .. } => ErrorKind::IoFailure,
        }
    }

    pub fn missing(what: &str) -> Self {
        IngestError::MissingParameter(what.to_string())
    }

    pub fn file_not_found(path: &Path) -> Self {
        IngestError::NotFound(format!("File not found: {}", path.display()))
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        IngestError::IoFailure {
            context: context.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(IngestError::missing("x").kind(), ErrorKind::MissingParameter);
        assert_eq!(
            IngestError::file_not_found(Path::new("/nope")).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            IngestError::InvalidFormat("bad".into()).kind(),
            ErrorKind::InvalidFormat
        );
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(IngestError::io("reading", io).kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_io_failure_message_carries_underlying_error() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream truncated");
        let err = IngestError::io("Failed to read upload", io);
        assert_eq!(err.to_string(), "Failed to read upload: stream truncated");
    }

    #[test]
    fn test_only_io_failure_is_server_side() {
        assert!(ErrorKind::MissingParameter.is_client_error());
        assert!(ErrorKind::NotFound.is_client_error());
        assert!(ErrorKind::InvalidFormat.is_client_error());
        assert!(ErrorKind::PayloadTooLarge.is_client_error());
        assert!(!ErrorKind::IoFailure.is_client_error());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorKind::InvalidFormat).unwrap();
        assert_eq!(json, "\"invalid_format\"");
        assert_eq!(ErrorKind::IoFailure.as_str(), "io_failure");
    }
}

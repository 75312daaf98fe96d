//! Unified error types for Wire-Driver

use crate::transport::WireStatus;
use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Wire-Driver
#[derive(Error, Debug)]
pub enum Error {
    /// Command identifier not present in the catalog
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Command catalog violates one of its structural invariants
    #[error("Invalid command catalog: {0}")]
    Catalog(String),

    /// No session id supplied for a session-scoped command
    #[error("Missing session: a session id is required to resolve this command")]
    MissingSession,

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status with a body that is not a wire response
    #[error("HTTP status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Server base address or resolved url could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The remote end answered with a non-zero wire status
    #[error("Protocol error ({status}): {message}")]
    Protocol { status: WireStatus, message: String },

    /// Response value did not have the expected shape
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Payload decoding errors (base64 screenshots)
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new unknown command error
    pub fn unknown_command<S: Into<String>>(id: S) -> Self {
        Error::UnknownCommand(id.into())
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        Error::Catalog(msg.into())
    }

    /// Create a new invalid URL error
    pub fn invalid_url<S: Into<String>>(msg: S) -> Self {
        Error::InvalidUrl(msg.into())
    }

    /// Create a new protocol error
    pub fn protocol<S: Into<String>>(status: WireStatus, message: S) -> Self {
        Error::Protocol {
            status,
            message: message.into(),
        }
    }

    /// Create a new unexpected response error
    pub fn unexpected_response<S: Into<String>>(msg: S) -> Self {
        Error::UnexpectedResponse(msg.into())
    }

    /// Create a new decode error
    pub fn decode<S: Into<String>>(msg: S) -> Self {
        Error::Decode(msg.into())
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Wire status carried by a protocol error, if any
    pub fn wire_status(&self) -> Option<WireStatus> {
        match self {
            Error::Protocol { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the remote end reported that no element matched a locator
    pub fn is_no_such_element(&self) -> bool {
        matches!(self.wire_status(), Some(WireStatus::NoSuchElement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_error_display() {
        let err = Error::protocol(WireStatus::NoSuchElement, "Unable to locate element");
        assert_eq!(
            err.to_string(),
            "Protocol error (7 NoSuchElement): Unable to locate element"
        );
        assert!(err.is_no_such_element());
    }

    #[test]
    fn test_non_protocol_error_has_no_status() {
        let err = Error::MissingSession;
        assert!(err.wire_status().is_none());
        assert!(!err.is_no_such_element());
    }
}

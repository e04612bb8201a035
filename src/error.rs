//! Error types for the Skalin SDK
//!
//! Every public API returns `Result<T, Error>` where Error is defined here.
//! No error is retried internally.

use thiserror::Error;

/// The main error type for the Skalin SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    // ============================================================================
    // Local Preconditions
    // ============================================================================
    #[error("{message}")]
    Precondition { message: String },

    #[error("Invalid field '{field}': {message}")]
    Validation { field: String, message: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Authentication failed: {message}")]
    Auth { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The vendor answered with an unexpected status and an error message
    #[error("{message}")]
    Vendor { status: u16, message: String },

    /// The vendor answered with an unexpected status and no usable message
    #[error("error to call skalin API (status {actual}, expected {expected}) with code: {code}")]
    StatusMismatch {
        expected: u16,
        actual: u16,
        code: i64,
    },

    /// Unexpected status with an empty body
    #[error("undefined error")]
    Undefined { status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Data Processing Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Invalid date '{value}': expected YYYY-MM-DD or RFC3339")]
    DateParse { value: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Create a vendor error carrying the message the API sent back
    pub fn vendor(status: u16, message: impl Into<String>) -> Self {
        Self::Vendor {
            status,
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status of the response that caused this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Vendor { status, .. } | Error::Undefined { status } => Some(*status),
            Error::StatusMismatch { actual, .. } => Some(*actual),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the server answered but with an unexpected status
    pub fn is_status_error(&self) -> bool {
        matches!(
            self,
            Error::Vendor { .. } | Error::StatusMismatch { .. } | Error::Undefined { .. }
        )
    }

    /// Check if the error was raised locally, before any network call
    pub fn is_local(&self) -> bool {
        matches!(self, Error::Precondition { .. } | Error::Validation { .. })
    }
}

/// Result type alias for the Skalin SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

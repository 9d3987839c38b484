//! Error types module
//!
//! All errors in the request path are unified under the `AppError` enum. Each
//! variant self-describes its HTTP presentation through the `ErrorMetadata`
//! trait; the API crate renders the status and the client message, nothing is
//! retried anywhere.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like missing credentials
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Machine-readable error code (e.g., "INVALID_INPUT")
    fn error_code(&self) -> &'static str;

    /// Client-facing message (short plain-text reason)
    fn client_message(&self) -> String;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request: missing multipart fields, bad key, invalid JSON.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Required provider credentials absent from the environment.
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// The provider answered, but with a non-success status or unusable body.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Transport-level failure: timeout, refused connection, TLS.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        match self {
            AppError::InvalidInput(_) => 400,
            AppError::NotConfigured(_) => 503,
            AppError::Upstream(_) | AppError::Network(_) | AppError::Internal(_) => 500,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::NotConfigured(_) => "PROVIDER_NOT_CONFIGURED",
            AppError::Upstream(_) => "UPSTREAM_ERROR",
            AppError::Network(_) => "NETWORK_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(msg)
            | AppError::NotConfigured(msg)
            | AppError::Upstream(msg)
            | AppError::Network(msg) => msg.clone(),
            AppError::Internal(msg) => format!("Internal error: {}", msg),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidInput(_) => LogLevel::Debug,
            AppError::NotConfigured(_) => LogLevel::Warn,
            AppError::Upstream(_) | AppError::Network(_) | AppError::Internal(_) => {
                LogLevel::Error
            }
        }
    }
}

//! HTTP error response conversion
//!
//! **Preferred handler pattern:** Return `Result<impl IntoResponse, HttpAppError>`.
//! Use `AppError` (or types that implement `Into<AppError>`) for errors so they
//! become `HttpAppError` and render consistently (status, plain-text body,
//! logging). Error bodies are short plain-text reasons; the status and log
//! level come from `ErrorMetadata`.

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chunkstash_core::{AppError, ErrorMetadata, LogLevel, Provider};
use chunkstash_storage::StorageError;
use serde::de::DeserializeOwned;

/// Wrapper type for AppError to implement IntoResponse
/// This is necessary because of Rust's orphan rules - we can't implement
/// IntoResponse (external trait) for AppError (external type from chunkstash-core)
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

impl From<anyhow::Error> for HttpAppError {
    fn from(err: anyhow::Error) -> Self {
        HttpAppError(AppError::Internal(err.to_string()))
    }
}

/// Convert JSON body deserialization failures into a terse 400.
impl From<JsonRejection> for HttpAppError {
    fn from(_rejection: JsonRejection) -> Self {
        HttpAppError(AppError::InvalidInput("Invalid JSON".to_string()))
    }
}

// Convert adapter errors to HttpAppError (avoids orphan rule: we impl for local HttpAppError)
impl From<StorageError> for HttpAppError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::Transport(e) => {
                AppError::Network(format!("HTTP request failed: {}", e))
            }
            other => AppError::Upstream(other.to_string()),
        };
        HttpAppError(app)
    }
}

impl HttpAppError {
    /// Wrap an upload failure with the provider-specific message prefix the
    /// client already knows.
    pub fn upload(provider: Provider, err: StorageError) -> Self {
        let prefix = match provider {
            Provider::Discord => "Upload failed",
            Provider::Telegram => "Telegram upload failed",
        };
        let app = match err {
            StorageError::Transport(e) => {
                AppError::Network(format!("{}: HTTP request failed: {}", prefix, e))
            }
            other => AppError::Upstream(format!("{}: {}", prefix, other)),
        };
        HttpAppError(app)
    }
}

fn log_error(error: &AppError) {
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, code = code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, code = code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, code = code, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        log_error(app_error);

        let status = StatusCode::from_u16(app_error.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, app_error.client_message()).into_response()
    }
}

/// JSON body extractor that returns a plain 400 "Invalid JSON" on
/// deserialization failure (wrong content type, syntax error, unknown
/// provider). Use this instead of `Json<T>` for the download endpoint.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use movielink_core::error::CoreError;
use movielink_sources::MetadataError;
use serde_json::json;

/// Message returned for every 500. Details are logged, never sent.
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to fetch movie information";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`MetadataError`] for metadata
/// provider failures. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The metadata provider could not be queried.
    #[error("Metadata lookup failed: {0}")]
    Metadata(#[from] MetadataError),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "NOT_FOUND", core.to_string())
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },
            AppError::Metadata(err) => {
                tracing::error!(error = %err, "Metadata provider error");
                internal()
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        INTERNAL_ERROR_MESSAGE.to_string(),
    )
}

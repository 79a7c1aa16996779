use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use donations_core::error::CoreError;
use donations_db::StoreError;
use serde_json::json;

/// Client-facing message for every 500. Causes are logged, never returned.
const SERVER_ERROR: &str = "Server error";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `donations_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A record store fault.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity = *entity, id = %id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        json!({ "error": "Not found", "code": "NOT_FOUND" }),
                    )
                }
                CoreError::Validation(violations) => (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "error": "Invalid input",
                        "code": "VALIDATION_ERROR",
                        "details": violations,
                    }),
                ),
            },

            // --- Store faults ---
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                internal_error_body()
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": msg, "code": "BAD_REQUEST" }),
            ),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error_body()
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error_body() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": SERVER_ERROR, "code": "INTERNAL_ERROR" }),
    )
}

/// Responder for `CatchPanicLayer`: logs the panic payload and returns the
/// same opaque 500 body as [`AppError::InternalError`].
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}

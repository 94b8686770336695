use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// A required input is missing. The UI equivalent is a disabled submit button.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The panel already has a request in flight.
    #[error("Panel busy: {0}")]
    PanelBusy(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::PanelBusy(msg) => (StatusCode::CONFLICT, "PANEL_BUSY", msg.clone()),
            AppError::Clipboard(msg) => {
                tracing::error!("Clipboard error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CLIPBOARD_ERROR",
                    "Could not copy content".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

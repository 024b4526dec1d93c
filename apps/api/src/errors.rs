use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::oracle::OracleError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant is terminal for the request.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Oracle error: {0}")]
    Oracle(#[from] OracleError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::UnprocessableEntity(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "invalid_input", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "invalid_request",
                msg.clone(),
            ),
            AppError::MissingCredential(msg) => {
                tracing::error!("Missing credential: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "missing_api_key",
                    msg.clone(),
                )
            }
            AppError::Oracle(e) => {
                tracing::error!("Oracle error: {e}");
                let message = match e {
                    OracleError::Api { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "openai_error", message)
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::MethodNotAllowed(msg) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
                msg.clone(),
            ),
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

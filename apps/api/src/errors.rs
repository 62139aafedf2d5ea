use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// All generation failures are caught at the endpoint boundary and mapped to
/// an `{ "error": ..., "details": ... }` body — none crash the process, and a
/// partial template is never surfaced to the client.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Generation timed out")]
    GenerationTimeout,

    #[error("no JSON object found in provider output")]
    GenerationFormat,

    #[error("failed to parse generated JSON: {0}")]
    GenerationParse(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Provider(msg) => {
                tracing::error!("Provider error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "テンプレートの生成に失敗しました".to_string(),
                    Some(msg.clone()),
                )
            }
            AppError::GenerationTimeout => {
                tracing::error!("Generation request timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "テンプレートの生成に失敗しました".to_string(),
                    Some("provider call exceeded the time limit".to_string()),
                )
            }
            AppError::GenerationFormat => {
                tracing::error!("No JSON object found in provider output");
                (
                    StatusCode::BAD_GATEWAY,
                    "テンプレートの生成に失敗しました".to_string(),
                    Some("no JSON object found in provider output".to_string()),
                )
            }
            AppError::GenerationParse(msg) => {
                tracing::error!("Generated JSON failed to parse: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "テンプレートの生成に失敗しました".to_string(),
                    Some(msg.clone()),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let body = match details {
            Some(details) => Json(json!({ "error": message, "details": details })),
            None => Json(json!({ "error": message })),
        };

        (status, body).into_response()
    }
}

//! Axum route handlers for the Export API (placeholder implementation).

use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::template::FlyerTemplate;

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    // Accepted and validated for shape; unused until a real renderer exists.
    #[allow(dead_code)]
    pub template: FlyerTemplate,
    pub format: String,
}

/// POST /api/v1/export
///
/// Returns placeholder bytes for `png`, `pdf`, and `pptx` with the correct
/// MIME type and attachment filename. Unrecognized formats are a 400.
pub async fn handle_export(
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let (content_type, filename, body): (&str, &str, &[u8]) = match request.format.as_str() {
        "png" => (
            "image/png",
            "flyer.png",
            b"PNG export would be generated here",
        ),
        "pdf" => (
            "application/pdf",
            "flyer.pdf",
            b"PDF export would be generated here",
        ),
        "pptx" => (
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            "flyer.pptx",
            b"PPTX export would be generated here",
        ),
        _ => return Err(AppError::Validation("Invalid format".to_string())),
    };

    Ok((
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        Bytes::from_static(body),
    )
        .into_response())
}

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// The wire shape is a flat `{"error": "<message>"}` object. The three client
/// input errors carry fixed messages the upload page string-matches against;
/// everything internal collapses to one opaque 500 with details logged
/// server-side only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("multipart form has no 'file' field")]
    MissingFile,

    #[error("uploaded file has an empty filename")]
    NoFileSelected,

    #[error("rejected non-PDF upload: {0}")]
    InvalidFileType(String),

    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file uploaded"),
            AppError::NoFileSelected => (StatusCode::BAD_REQUEST, "No file selected"),
            AppError::InvalidFileType(filename) => {
                tracing::debug!("rejected upload '{filename}': not a PDF");
                (StatusCode::BAD_REQUEST, "Only PDF files are allowed")
            }
            AppError::Multipart(e) => {
                tracing::warn!("malformed multipart body: {e}");
                (StatusCode::BAD_REQUEST, "Malformed upload request")
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze resume")
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to analyze resume")
            }
        };

        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

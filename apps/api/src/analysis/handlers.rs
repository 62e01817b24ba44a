use axum::{
    body::Bytes,
    extract::{Multipart, State},
    response::Html,
    Json,
};
use serde::Serialize;

use crate::analysis::extract::extract_resume_text;
use crate::analysis::prompts::build_ats_prompt;
use crate::errors::AppError;
use crate::state::AppState;

/// Returned in a 200 `result` when the PDF yields no extractable text.
/// The model is never called in that case. Existing callers string-match
/// this value, so it must not change.
pub const EMPTY_TEXT_SENTINEL: &str = "ERROR: Resume text could not be extracted.";

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub result: String,
}

struct UploadedResume {
    filename: String,
    data: Bytes,
}

/// GET /
/// Serves the static upload page.
pub async fn handle_index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// POST /analyze
/// Multipart field `file` (PDF) -> `{"result": "<raw model text>"}`.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let upload = read_resume_field(&mut multipart).await?;
    validate_filename(&upload.filename)?;

    // Extraction is blocking and can panic on hostile input; isolate it so a
    // panic degrades to the generic failure response.
    let text = tokio::task::spawn_blocking(move || extract_resume_text(&upload.data))
        .await
        .map_err(|e| anyhow::anyhow!("extraction task panicked: {e}"))??;

    if text.is_empty() {
        tracing::info!("no extractable text in upload, returning sentinel");
        return Ok(Json(AnalyzeResponse {
            result: EMPTY_TEXT_SENTINEL.to_string(),
        }));
    }

    let prompt = build_ats_prompt(&text);
    let result = state.llm.generate(&prompt).await?;

    Ok(Json(AnalyzeResponse { result }))
}

/// Walks the multipart stream looking for the `file` field.
async fn read_resume_field(multipart: &mut Multipart) -> Result<UploadedResume, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field.bytes().await?;
            return Ok(UploadedResume { filename, data });
        }
    }
    Err(AppError::MissingFile)
}

/// Filename checks, in contract order: non-empty, then a case-insensitive
/// `.pdf` suffix.
fn validate_filename(filename: &str) -> Result<(), AppError> {
    if filename.is_empty() {
        return Err(AppError::NoFileSelected);
    }
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err(AppError::InvalidFileType(filename.to_string()));
    }
    Ok(())
}

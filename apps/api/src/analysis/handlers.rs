use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::models::AnalysisRecord;
use crate::analysis::orchestrator::{AnalysisOutcome, AnalysisSource, ProviderAttempt};
use crate::analysis::providers::truncate_chars;
use crate::documents::extract_text;
use crate::errors::AppError;
use crate::jobs::query::build_search_query;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub analysis: AnalysisRecord,
    pub source: AnalysisSource,
    pub providers: Vec<ProviderAttempt>,
    pub search_query: String,
}

impl From<AnalysisOutcome> for AnalyzeResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        let search_query = build_search_query(&outcome.record);
        Self {
            analysis: outcome.record,
            source: outcome.source,
            providers: outcome.attempts,
            search_query,
        }
    }
}

/// POST /api/analyze
/// Multipart upload with the resume in the `resume` field (PDF or plain text).
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut upload: Option<(Bytes, Option<String>, Option<String>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error("Malformed multipart body", e))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let content_type = field.content_type().map(str::to_string);
        let file_name = field.file_name().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error("Could not read upload", e))?;
        upload = Some((data, content_type, file_name));
        break;
    }

    let (data, content_type, file_name) = upload
        .ok_or_else(|| AppError::Validation(format!("Missing '{UPLOAD_FIELD}' file field")))?;

    if data.len() > state.config.max_upload_bytes {
        return Err(AppError::PayloadTooLarge(format!(
            "Upload of {} bytes exceeds the {} byte limit",
            data.len(),
            state.config.max_upload_bytes
        )));
    }

    info!(
        "Received resume upload ({} bytes, {})",
        data.len(),
        content_type.as_deref().unwrap_or("unknown type")
    );

    let text = extract_text(data, content_type.as_deref(), file_name.as_deref()).await?;
    run_analysis(&state, &text).await
}

/// The body limit surfaces as a multipart error; keep its 413 instead of
/// reporting a malformed request.
fn multipart_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!("{context}: upload exceeds the size limit"))
    } else {
        AppError::Validation(format!("{context}: {err}"))
    }
}

/// POST /api/analyze/text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    run_analysis(&state, &req.text).await
}

async fn run_analysis(state: &AppState, text: &str) -> Result<Json<AnalyzeResponse>, AppError> {
    let text = truncate_chars(text, state.config.max_resume_chars, "");
    let outcome = state.orchestrator.analyze(&text).await?;
    Ok(Json(outcome.into()))
}

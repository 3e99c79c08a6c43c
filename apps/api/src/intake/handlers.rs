use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::intake::{process_batch, scan_folder, IncomingDocument, ParsedDocument};
use crate::models::ParsedResume;
use crate::state::AppState;

/// Multipart field carrying resume files.
pub const UPLOAD_FIELD: &str = "resumes";

#[derive(Deserialize)]
pub struct ParseTextRequest {
    pub text: String,
}

#[derive(Deserialize)]
pub struct ScanFolderRequest {
    #[serde(default)]
    pub folder_path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResumeBatchResponse {
    pub resumes: Vec<ParsedDocument>,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(req): Json<ParseTextRequest>,
) -> Result<Json<ParsedResume>, AppError> {
    let parser = state.parser;
    let parsed = tokio::task::spawn_blocking(move || parser.parse(&req.text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in parse: {e}")))?;
    Ok(Json(parsed))
}

/// POST /api/v1/resumes/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeBatchResponse>, AppError> {
    let max_files = state.config.max_upload_files;
    let mut documents = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        if documents.len() == max_files {
            return Err(AppError::Validation(format!(
                "Too many files: at most {max_files} resumes per upload"
            )));
        }

        let file_name = field.file_name().unwrap_or("unnamed").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read '{file_name}': {e}")))?;
        documents.push(IncomingDocument { file_name, bytes });
    }

    if documents.is_empty() {
        return Err(AppError::Validation("No files uploaded".to_string()));
    }

    info!(files = documents.len(), "processing uploaded resumes");
    let resumes = process_batch(state.decoder.clone(), state.parser, documents).await;
    Ok(Json(ResumeBatchResponse { resumes }))
}

/// POST /api/v1/resumes/scan-folder
pub async fn handle_scan_folder(
    State(state): State<AppState>,
    Json(req): Json<ScanFolderRequest>,
) -> Result<Json<ResumeBatchResponse>, AppError> {
    let resumes = scan_folder(state.decoder.clone(), state.parser, &req.folder_path).await?;
    Ok(Json(ResumeBatchResponse { resumes }))
}

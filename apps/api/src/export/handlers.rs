use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::export::{write_csv_export, ExportRow};
use crate::intake::ParsedDocument;
use crate::state::AppState;

/// URL prefix under which written exports are served.
pub const EXPORTS_ROUTE: &str = "/exports";

#[derive(Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub resumes: Vec<ParsedDocument>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResponse {
    pub success: bool,
    pub download_url: String,
    pub file_name: String,
}

/// POST /api/v1/resumes/export
pub async fn handle_export(
    State(state): State<AppState>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<ExportResponse>, AppError> {
    let rows: Vec<ExportRow> = req.resumes.iter().map(ExportRow::from).collect();
    let dir = state.config.export_dir.clone();

    let path = tokio::task::spawn_blocking(move || write_csv_export(&dir, &rows))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in export: {e}")))??;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("export path has no file name")))?;

    Ok(Json(ExportResponse {
        success: true,
        download_url: format!("{EXPORTS_ROUTE}/{file_name}"),
        file_name,
    }))
}

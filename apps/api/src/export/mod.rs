//! Tabular export of processed resumes as CSV.

pub mod handlers;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::intake::ParsedDocument;

/// One spreadsheet row. Collections are joined with `", "`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportRow {
    #[serde(rename = "Applicant Name")]
    pub applicant_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Contact")]
    pub contact: String,
    #[serde(rename = "Place")]
    pub place: String,
    #[serde(rename = "Skills")]
    pub skills: String,
    #[serde(rename = "Tools")]
    pub tools: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Current CTC")]
    pub current_ctc: String,
    #[serde(rename = "Expected Pay")]
    pub expected_pay: String,
    #[serde(rename = "Availability to Join")]
    pub availability_to_join: String,
}

impl From<&ParsedDocument> for ExportRow {
    fn from(doc: &ParsedDocument) -> Self {
        let resume = &doc.resume;
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        ExportRow {
            applicant_name: text(&resume.full_name),
            email: text(&resume.email),
            contact: text(&resume.phone),
            place: text(&resume.location),
            skills: resume.skills.join(", "),
            tools: resume.tools_and_technologies.join(", "),
            experience: resume
                .total_experience_years
                .map(|years| format!("{years} years"))
                .unwrap_or_default(),
            current_ctc: text(&doc.current_ctc),
            expected_pay: text(&doc.expected_pay),
            availability_to_join: text(&doc.availability_to_join),
        }
    }
}

/// Writes `rows` to a new timestamped CSV file in `dir` and returns its path.
pub fn write_csv_export(dir: &Path, rows: &[ExportRow]) -> Result<PathBuf, AppError> {
    if rows.is_empty() {
        return Err(AppError::Validation("No resume data to export".to_string()));
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create export directory {}", dir.display()))?;

    let file_name = format!("resumes_{}.csv", Utc::now().format("%Y%m%d_%H%M%S_%3f"));
    let path = dir.join(file_name);

    let mut writer = csv::Writer::from_path(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("failed to write export row")?;
    }
    writer.flush().context("failed to flush export file")?;

    info!(path = %path.display(), rows = rows.len(), "export written");
    Ok(path)
}

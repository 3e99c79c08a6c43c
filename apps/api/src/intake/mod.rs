//! Batch intake: decode uploaded or on-disk resumes and parse each one.
//!
//! A document that cannot be decoded still produces a row, with the empty
//! record and `error` set, so one bad file never fails the batch.

pub mod handlers;

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::documents::{DocumentKind, TextDecoder};
use crate::errors::AppError;
use crate::extraction::ResumeParser;
use crate::models::ParsedResume;

/// One processed document: the parsed record plus the fields a recruiter
/// fills in by hand before export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub file_name: String,
    #[serde(flatten)]
    pub resume: ParsedResume,
    #[serde(default)]
    pub current_ctc: Option<String>,
    #[serde(default)]
    pub expected_pay: Option<String>,
    #[serde(default)]
    pub availability_to_join: Option<String>,
    /// Set when the document could not be decoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedDocument {
    pub fn parsed(file_name: impl Into<String>, resume: ParsedResume) -> Self {
        ParsedDocument {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            resume,
            current_ctc: None,
            expected_pay: None,
            availability_to_join: None,
            error: None,
        }
    }

    pub fn failed(file_name: impl Into<String>, error: impl Into<String>) -> Self {
        ParsedDocument {
            error: Some(error.into()),
            ..ParsedDocument::parsed(file_name, ParsedResume::default())
        }
    }
}

/// A document received by the service, before decoding.
#[derive(Debug, Clone)]
pub struct IncomingDocument {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Decodes and parses one document. Never fails; problems land in `error`.
pub fn process_document(
    decoder: &dyn TextDecoder,
    parser: &ResumeParser,
    file_name: &str,
    bytes: &[u8],
) -> ParsedDocument {
    let decoded =
        DocumentKind::from_file_name(file_name).and_then(|kind| decoder.decode(kind, bytes));

    match decoded {
        Ok(text) => ParsedDocument::parsed(file_name, parser.parse(&text)),
        Err(e) => {
            warn!(file = %file_name, error = %e, "document could not be decoded");
            ParsedDocument::failed(file_name, e.to_string())
        }
    }
}

/// Processes documents concurrently, one blocking task each, and returns the
/// rows in input order.
pub async fn process_batch(
    decoder: Arc<dyn TextDecoder>,
    parser: ResumeParser,
    documents: Vec<IncomingDocument>,
) -> Vec<ParsedDocument> {
    let tasks: Vec<_> = documents
        .into_iter()
        .map(|doc| {
            let decoder = Arc::clone(&decoder);
            let file_name = doc.file_name.clone();
            let task = tokio::task::spawn_blocking(move || {
                process_document(decoder.as_ref(), &parser, &doc.file_name, &doc.bytes)
            });
            (file_name, task)
        })
        .collect();

    let mut rows = Vec::with_capacity(tasks.len());
    for (file_name, task) in tasks {
        let row = match task.await {
            Ok(row) => row,
            Err(e) => {
                warn!(file = %file_name, error = %e, "document task failed");
                ParsedDocument::failed(file_name, "Processing failed unexpectedly")
            }
        };
        rows.push(row);
    }

    let failed = rows.iter().filter(|r| r.error.is_some()).count();
    info!(total = rows.len(), failed, "batch processed");
    rows
}

/// Processes every supported document directly inside `folder`, sorted by
/// file name. Subdirectories are not visited.
pub async fn scan_folder(
    decoder: Arc<dyn TextDecoder>,
    parser: ResumeParser,
    folder: &str,
) -> Result<Vec<ParsedDocument>, AppError> {
    let folder = folder.trim();
    if folder.is_empty() {
        return Err(AppError::Validation("folder_path is required".to_string()));
    }
    let dir = Path::new(folder);
    if !tokio::fs::metadata(dir)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
    {
        return Err(AppError::NotFound(format!("Folder not found: {folder}")));
    }

    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot list {folder}: {e}")))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("cannot list {folder}: {e}")))?
    {
        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        let name = entry.file_name().to_string_lossy().into_owned();
        if is_file && DocumentKind::is_supported(&name) {
            names.push(name);
        }
    }
    names.sort();
    info!(folder, documents = names.len(), "scanning folder");

    let mut documents = Vec::with_capacity(names.len());
    let mut unreadable = Vec::new();
    for (idx, name) in names.into_iter().enumerate() {
        match tokio::fs::read(dir.join(&name)).await {
            Ok(bytes) => documents.push((
                idx,
                IncomingDocument {
                    file_name: name,
                    bytes: Bytes::from(bytes),
                },
            )),
            Err(e) => {
                warn!(file = %name, error = %e, "document could not be read");
                unreadable.push((idx, ParsedDocument::failed(name, e.to_string())));
            }
        }
    }

    let (order, incoming): (Vec<usize>, Vec<IncomingDocument>) = documents.into_iter().unzip();
    let processed = process_batch(decoder, parser, incoming).await;

    let mut rows: Vec<(usize, ParsedDocument)> = order.into_iter().zip(processed).collect();
    rows.extend(unreadable);
    rows.sort_by_key(|(idx, _)| *idx);
    Ok(rows.into_iter().map(|(_, row)| row).collect())
}

//! Document decoding: uploaded resume bytes to plain text.
//!
//! The extraction engine only ever sees text. Everything format-specific
//! lives behind `TextDecoder`, so handlers and tests can swap the decoder
//! held in `AppState`.

pub mod native;

use std::path::Path;

use thiserror::Error;

pub use native::NativeDecoder;

/// Supported resume file formats, keyed by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    /// Resolves the kind from a file name's extension, case-insensitively.
    pub fn from_file_name(file_name: &str) -> Result<Self, DecodeError> {
        let ext = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "doc" => Ok(DocumentKind::Doc),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(DecodeError::Unsupported(file_name.to_string())),
        }
    }

    pub fn is_supported(file_name: &str) -> bool {
        Self::from_file_name(file_name).is_ok()
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("unsupported file type: {0} (expected .pdf, .doc or .docx)")]
    Unsupported(String),

    #[error("failed to read PDF: {0}")]
    Pdf(String),

    #[error("failed to read Word archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error while decoding: {0}")]
    Io(#[from] std::io::Error),

    #[error("no text could be extracted from the document")]
    Empty,
}

/// Turns document bytes into raw text.
pub trait TextDecoder: Send + Sync {
    fn decode(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, DecodeError>;
}

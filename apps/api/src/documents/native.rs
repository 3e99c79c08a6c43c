//! In-process decoder for PDF and Word documents.

use std::io::{Cursor, Read};
use std::panic::{self, AssertUnwindSafe};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;
use zip::ZipArchive;

use super::{DecodeError, DocumentKind, TextDecoder};

const DOCX_BODY: &str = "word/document.xml";
/// Shortest printable run kept when salvaging text from a binary `.doc`.
const MIN_SALVAGE_RUN: usize = 4;

static PARAGRAPH_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</w:p>|<w:br\b[^>]*/>|<w:cr\b[^>]*/>").expect("paragraph break pattern is valid")
});
static TAB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<w:tab\b[^>]*/>").expect("tab pattern is valid"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static NUMERIC_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#(x[0-9a-fA-F]+|[0-9]+);").expect("entity pattern is valid"));

/// Decodes PDF with `pdf-extract`, DOCX from its `word/document.xml`, and
/// legacy `.doc` by trying the DOCX path before salvaging printable runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDecoder;

impl TextDecoder for NativeDecoder {
    fn decode(&self, kind: DocumentKind, bytes: &[u8]) -> Result<String, DecodeError> {
        let text = match kind {
            DocumentKind::Pdf => decode_pdf(bytes)?,
            DocumentKind::Docx => decode_docx(bytes)?,
            DocumentKind::Doc => match decode_docx(bytes) {
                Ok(text) => text,
                Err(_) => salvage_text(bytes),
            },
        };

        if text.trim().is_empty() {
            return Err(DecodeError::Empty);
        }
        Ok(text)
    }
}

fn decode_pdf(bytes: &[u8]) -> Result<String, DecodeError> {
    // pdf-extract panics on some malformed inputs.
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes))) {
        Ok(result) => result.map_err(|e| DecodeError::Pdf(e.to_string())),
        Err(_) => {
            warn!(bytes = bytes.len(), "PDF decoder panicked");
            Err(DecodeError::Pdf("decoder panicked on malformed input".to_string()))
        }
    }
}

fn decode_docx(bytes: &[u8]) -> Result<String, DecodeError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCX_BODY)?.read_to_string(&mut xml)?;
    Ok(docx_xml_to_text(&xml))
}

/// Flattens WordprocessingML into lines: paragraphs and breaks become `\n`,
/// tabs become `\t`, every other tag is dropped.
fn docx_xml_to_text(xml: &str) -> String {
    let text = PARAGRAPH_BREAK.replace_all(xml, "\n");
    let text = TAB.replace_all(&text, "\t");
    let text = TAG.replace_all(&text, "");
    unescape_xml(&text)
}

fn unescape_xml(text: &str) -> String {
    let numeric = NUMERIC_ENTITY.replace_all(text, |caps: &regex::Captures| {
        let raw = &caps[1];
        let code = match raw.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => raw.parse().ok(),
        };
        code.and_then(char::from_u32)
            .map(String::from)
            .unwrap_or_default()
    });

    numeric
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Recovers readable text from a binary Word file by keeping runs of
/// printable ASCII. NUL bytes directly after a printable byte are skipped so
/// UTF-16LE text survives as well.
fn salvage_text(bytes: &[u8]) -> String {
    let mut runs = Vec::new();
    let mut current = String::new();
    let mut prev_printable = false;

    for &b in bytes {
        if b == 0 && prev_printable {
            prev_printable = false;
            continue;
        }
        if b == b' ' || b.is_ascii_graphic() {
            current.push(b as char);
            prev_printable = true;
            continue;
        }
        if current.trim().len() >= MIN_SALVAGE_RUN {
            runs.push(current.trim().to_string());
        }
        current.clear();
        prev_printable = false;
    }
    if current.trim().len() >= MIN_SALVAGE_RUN {
        runs.push(current.trim().to_string());
    }

    runs.join("\n")
}

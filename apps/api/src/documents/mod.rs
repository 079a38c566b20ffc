// Resume text extraction from uploaded documents.
// PDFs are parsed on the blocking pool; a parser panic on a malformed file
// surfaces as a join error and is reported like any other extraction failure.

use thiserror::Error;
use tracing::{debug, info};

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("uploaded document is empty")]
    EmptyDocument,

    #[error("unsupported document type: {0}")]
    UnsupportedType(String),

    #[error("could not read PDF: {0}")]
    Pdf(String),

    #[error("text document is not valid UTF-8")]
    InvalidUtf8,

    #[error("no text could be extracted from the document")]
    NoText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

/// Decides how to read an upload from its declared content type, file name and magic bytes.
pub fn detect_kind(
    bytes: &[u8],
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<DocumentKind, ExtractionError> {
    let content_type = content_type.unwrap_or_default().to_ascii_lowercase();
    let file_name = file_name.unwrap_or_default().to_ascii_lowercase();

    if bytes.starts_with(PDF_MAGIC)
        || content_type == "application/pdf"
        || file_name.ends_with(".pdf")
    {
        return Ok(DocumentKind::Pdf);
    }
    if content_type.starts_with("text/") || file_name.ends_with(".txt") {
        return Ok(DocumentKind::PlainText);
    }
    let label = if content_type.is_empty() {
        "unknown".to_string()
    } else {
        content_type
    };
    Err(ExtractionError::UnsupportedType(label))
}

pub async fn extract_text(
    bytes: bytes::Bytes,
    content_type: Option<&str>,
    file_name: Option<&str>,
) -> Result<String, ExtractionError> {
    if bytes.is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }

    let kind = detect_kind(&bytes, content_type, file_name)?;
    debug!("Extracting text from {:?} document ({} bytes)", kind, bytes.len());

    let text = match kind {
        DocumentKind::Pdf => tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| ExtractionError::Pdf(e.to_string()))
        })
        .await
        .map_err(|e| ExtractionError::Pdf(format!("parser aborted: {e}")))??,
        DocumentKind::PlainText => {
            String::from_utf8(bytes.to_vec()).map_err(|_| ExtractionError::InvalidUtf8)?
        }
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }
    info!("Extracted {} characters of resume text", text.chars().count());
    Ok(text)
}

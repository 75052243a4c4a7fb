//! Document reader
//!
//! Classifies an upload by extension and turns PDF bytes into text. PDF
//! extraction uses `pdf-extract` behind the `pdf` feature; when it fails or
//! is compiled out, the bytes are decoded lossily instead of erroring.

use std::path::Path;

use crate::error::{DocumentError, ImportError};

/// Upload formats accepted by the import pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Json,
}

impl DocumentFormat {
    /// Case-insensitive extension lookup. Anything other than `.pdf` or
    /// `.json` is refused.
    pub fn from_file_name(file_name: &str) -> Result<Self, ImportError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => Ok(Self::Pdf),
            "json" => Ok(Self::Json),
            _ => Err(ImportError::UnsupportedFormat {
                file_name: file_name.to_string(),
                extension,
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Json => "json",
        }
    }
}

/// An uploaded file: its name and raw bytes.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn format(&self) -> Result<DocumentFormat, ImportError> {
        DocumentFormat::from_file_name(&self.file_name)
    }
}

/// PDF to text, with a lossy-decoding fallback.
#[derive(Debug, Clone, Default)]
pub struct DocumentReader {
    force_lossy: bool,
}

impl DocumentReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip the PDF backend and always decode bytes directly.
    pub fn with_lossy_decoding(mut self, force: bool) -> Self {
        self.force_lossy = force;
        self
    }

    /// Extract text from PDF bytes. Never fails.
    pub fn read_text(&self, bytes: &[u8]) -> String {
        if self.force_lossy {
            return decode_lossy(bytes);
        }
        match extract_pdf_text(bytes) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, bytes = bytes.len(), "PDF text extraction failed, decoding raw bytes");
                decode_lossy(bytes)
            }
        }
    }
}

#[cfg(feature = "pdf")]
fn extract_pdf_text(bytes: &[u8]) -> Result<String, DocumentError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| DocumentError::ExtractionFailed(e.to_string()))
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf_text(_bytes: &[u8]) -> Result<String, DocumentError> {
    Err(DocumentError::FeatureNotEnabled)
}

/// UTF-8 decode that drops invalid sequences and control characters.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER && (!c.is_control() || matches!(c, '\n' | '\r' | '\t')))
        .collect()
}

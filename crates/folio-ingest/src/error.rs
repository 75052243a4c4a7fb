//! Error types for the import pipeline

/// Errors surfaced to the caller of an import.
///
/// Heuristic misses are never errors; only uploads that cannot be read at
/// all end up here, and the session keeps its previous profile.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("unsupported file type '{extension}' for {file_name}: upload a .pdf or .json file")]
    UnsupportedFormat { file_name: String, extension: String },
    #[error("malformed profile JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("invalid import options: {0}")]
    Options(String),
}

/// Failures inside the document reader. These never escape it; the reader
/// degrades to lossy byte decoding instead.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("PDF extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("PDF feature not enabled. Compile with --features pdf")]
    FeatureNotEnabled,
}

pub type ImportResult<T> = Result<T, ImportError>;

//! Error types for the invex-core library.

use thiserror::Error;

/// Main error type for the invex library.
#[derive(Error, Debug)]
pub enum InvexError {
    /// Extraction failed for the whole document.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON (OCR response or configuration file).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors the extraction pipeline can signal.
///
/// Per-field misses are not errors: an extractor that matches nothing
/// leaves its field at the default value. Only a document that cannot
/// yield any text at all fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// The OCR response carried no pages.
    #[error("no pages in OCR result")]
    EmptyDocument,
}

/// Result type for the invex library.
pub type Result<T> = std::result::Result<T, InvexError>;

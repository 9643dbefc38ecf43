//! The OCR-markdown extraction pipeline.

mod pipeline;
pub mod rules;

pub use pipeline::MarkdownExtractor;

use crate::error::ExtractionError;
use crate::models::extraction::ExtractionResult;
use crate::ocr::OcrResponse;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for invoice data extractors.
pub trait InvoiceExtractor {
    /// Extract invoice data from an OCR response.
    fn extract(&self, response: &OcrResponse) -> Result<ExtractionResult>;

    /// Extract invoice data from plain OCR text.
    fn extract_from_text(&self, text: &str) -> ExtractionResult;
}

//! Core library for invoice OCR post-processing.
//!
//! This crate turns the markdown an OCR service produces for an uploaded
//! invoice into a structured record:
//! - scalar field extraction (vendor, invoice number, currency, amount,
//!   date, department, category, description)
//! - markdown table parsing into line items
//! - date normalization with configurable day/month disambiguation
//! - aggregation with per-field defaults and fallbacks

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;

pub use error::{ExtractionError, InvexError, Result};
pub use extract::{InvoiceExtractor, MarkdownExtractor};
pub use models::config::{DateOrder, ExtractorConfig};
pub use models::extraction::{ExtractionResult, LineItem};
pub use ocr::{OcrPage, OcrResponse};

//! Structured output of the extraction pipeline.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single line item parsed from an invoice table.
///
/// Known columns land in the typed fields; anything else is kept verbatim
/// in `extra`, keyed by its lowercased header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,

    /// Price per unit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Decimal>,

    /// Line total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,

    /// Tax for this line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Decimal>,

    /// Unrecognized columns, in table order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<(String, String)>,
}

impl LineItem {
    /// True when no column mapped to this item.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.quantity.is_none()
            && self.unit_price.is_none()
            && self.total.is_none()
            && self.tax.is_none()
            && self.extra.is_empty()
    }
}

/// Structured data extracted from one OCR'd invoice document.
///
/// Every field is independent: a miss leaves it at its default (`None`,
/// zero, empty) and never affects the others. The record is read-only for
/// downstream consumers; the pipeline builds it in one shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Invoice total. Zero when nothing amount-like matched.
    pub amount: Decimal,

    /// Invoice date. Today when nothing date-like matched.
    pub date: NaiveDate,

    /// Free-text description, possibly filled from the first line item or
    /// the document's first non-blank line.
    pub description: String,

    /// Vendor legal name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Invoice number/identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    /// Currency code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Expense category name, matched by the caller against its own records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Department name, matched by the caller against its own records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Line items from all tables, in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItem>,

    /// The full OCR text the fields were extracted from, kept for audit.
    pub raw_content: String,
}

impl ExtractionResult {
    /// An empty result carrying today's date and the given raw text.
    pub fn empty(raw_content: impl Into<String>) -> Self {
        Self {
            amount: Decimal::ZERO,
            date: Local::now().date_naive(),
            description: String::new(),
            vendor: None,
            invoice_number: None,
            currency: None,
            category: None,
            department: None,
            line_items: Vec::new(),
            raw_content: raw_content.into(),
        }
    }

    /// The stand-in result for a document that failed extraction outright:
    /// zero amount, today's date, and the failure recorded in the
    /// description so the invoice record can still be created.
    pub fn degraded(reason: &str, raw_content: impl Into<String>) -> Self {
        Self {
            description: format!("Error extracting data: {reason}"),
            ..Self::empty(raw_content)
        }
    }
}

//! Field aggregation over the rule-based extractors.

use chrono::Local;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::config::{DateOrder, ExtractorConfig};
use crate::models::extraction::ExtractionResult;
use crate::ocr::OcrResponse;

use super::rules::{amounts, dates, fields, table};
use super::{InvoiceExtractor, Result};

/// Rule-based extractor over OCR markdown.
///
/// All scalar extractors and the table parser read the same immutable
/// text; each field is independent and a miss leaves its default in
/// place. The description fallback chain depends on line items and runs
/// after the table parser.
#[derive(Debug, Clone)]
pub struct MarkdownExtractor {
    date_order: DateOrder,
}

impl MarkdownExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self {
            date_order: DateOrder::DayFirst,
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            date_order: config.date_order,
        }
    }

    /// Set the day/month disambiguation order.
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Extract, degrading instead of failing: a response with no pages
    /// yields a placeholder result whose description records the failure,
    /// so the enclosing invoice workflow can still proceed.
    pub fn extract_lenient(&self, response: &OcrResponse) -> ExtractionResult {
        match self.extract(response) {
            Ok(result) => result,
            Err(err) => {
                debug!("falling back to degraded result: {err}");
                ExtractionResult::degraded(&err.to_string(), response.first_markdown())
            }
        }
    }
}

impl Default for MarkdownExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceExtractor for MarkdownExtractor {
    fn extract(&self, response: &OcrResponse) -> Result<ExtractionResult> {
        let text = response.joined_markdown()?;
        Ok(self.extract_from_text(&text))
    }

    fn extract_from_text(&self, text: &str) -> ExtractionResult {
        info!(
            "extracting invoice fields from {} characters of OCR text",
            text.len()
        );

        let vendor = fields::extract_vendor(text);
        let invoice_number = fields::extract_invoice_number(text);
        let currency = fields::extract_currency(text);
        let amount = amounts::extract_amount(text).unwrap_or(Decimal::ZERO);
        let date = dates::extract_date(text, self.date_order)
            .unwrap_or_else(|| Local::now().date_naive());
        let department = fields::extract_department(text);
        let category = fields::extract_category(text);

        let line_items = table::extract_line_items(text);

        // The fallback chain needs the parsed line items, so the labeled
        // description is resolved last.
        let description = fields::extract_description(text)
            .or_else(|| line_items.first().and_then(|item| item.description.clone()))
            .or_else(|| first_non_blank_line(text))
            .unwrap_or_default();

        debug!(
            "extracted invoice {:?} from {:?} with {} line items",
            invoice_number,
            vendor,
            line_items.len()
        );

        ExtractionResult {
            amount,
            date,
            description,
            vendor,
            invoice_number,
            currency,
            category,
            department,
            line_items,
            raw_content: text.to_string(),
        }
    }
}

fn first_non_blank_line(text: &str) -> Option<String> {
    text.lines()
        .find(|line| !line.trim().is_empty())
        .map(|line| line.trim().to_string())
}

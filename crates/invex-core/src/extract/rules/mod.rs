//! Rule-based extraction from OCR markdown.

pub mod amounts;
pub mod dates;
pub mod fields;
pub mod patterns;
pub mod table;

pub use amounts::{extract_amount, parse_amount, parse_cell_number};
pub use dates::{extract_date, normalize_date};
pub use fields::{
    extract_category, extract_currency, extract_department, extract_description,
    extract_invoice_number, extract_vendor,
};
pub use table::extract_line_items;

use regex::Regex;

/// Try patterns in priority order; the first one with a match wins and the
/// rest are never attempted.
pub(crate) fn first_capture(text: &str, patterns: &[&Regex]) -> Option<String> {
    patterns
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| caps[1].trim().to_string())
}

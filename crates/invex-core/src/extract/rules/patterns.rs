//! Regex pattern table for invoice field extraction.
//!
//! Labeled patterns are listed before bare ones wherever both exist; the
//! extractors try them in that order and take the first match.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Vendor: capitalized phrase ending in a legal-entity suffix.
    pub static ref VENDOR: Regex = Regex::new(
        r"([A-Z][a-zA-Z0-9 ,.&\-]+(?:Inc\.|LLC|Ltd\.?|Corp\.?|Corporation|Company|GmbH|BV|SRL|S\.A\.))"
    ).unwrap();

    // Invoice number: "invoice"/"inv" + "number"/"num"/"no"/"#" + token.
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)(?:invoice|inv)[.\s]*(?:number|num|no|#)[.:\s#]*([A-Za-z0-9-]+)"
    ).unwrap();

    // Currency label + code from the supported set.
    pub static ref CURRENCY: Regex = Regex::new(
        r"(?i)(?:currency|curr)[.:\s]+(USD|EUR|GBP|JPY|CHF|CAD|AUD|NZD)\b"
    ).unwrap();

    // Amount patterns, in priority order: a labeled total, a total cell in
    // a pipe table, then currency-marked bare numbers.
    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?i)(?:invoice\s*total|sub\s*total|amount|total|price|sum|value)(?:\s*:\s*|\s+)([\d,]+\.\d{2}|[\d,]+)"
    ).unwrap();

    pub static ref AMOUNT_TABLE_TOTAL: Regex = Regex::new(
        r"(?i)(?:total|amount)\s*\|\s*([\d,]+\.\d{2}|[\d,]+)"
    ).unwrap();

    pub static ref AMOUNT_DOLLAR: Regex = Regex::new(
        r"\$([\d,]+\.\d{2}|[\d,]+)"
    ).unwrap();

    pub static ref AMOUNT_EURO: Regex = Regex::new(
        r"([\d,]+\.\d{2}|[\d,]+)\s*€"
    ).unwrap();

    pub static ref AMOUNT_CODED: Regex = Regex::new(
        r"(?i)([\d,]+\.\d{2}|[\d,]+)\s*(?:USD|EUR|GBP|JPY|CHF|CAD|AUD|NZD)\b"
    ).unwrap();

    // Date patterns, in priority order. Day-month-year style with a 2- or
    // 4-digit year, or year-first, with -, / or . separators.
    pub static ref DATE_INVOICE_LABELED: Regex = Regex::new(
        r"(?i)invoice\s*date(?:\s*:\s*|\s+)(\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}|\d{4}[-/.]\d{1,2}[-/.]\d{1,2})"
    ).unwrap();

    pub static ref DATE_LABELED: Regex = Regex::new(
        r"(?i)(?:date|issued|due\s*date)(?:\s*:\s*|\s+)(\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}|\d{4}[-/.]\d{1,2}[-/.]\d{1,2})"
    ).unwrap();

    pub static ref DATE_BARE: Regex = Regex::new(
        r"(\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}|\d{4}[-/.]\d{1,2}[-/.]\d{1,2})"
    ).unwrap();

    // Department: free-text label, then a bare department code.
    pub static ref DEPARTMENT: Regex = Regex::new(
        r"(?i)(?:department|dept|division|business\s*unit)(?:\s*:\s*|\s+)([a-zA-Z0-9 &\-]+)"
    ).unwrap();

    pub static ref DEPARTMENT_CODE: Regex = Regex::new(
        r"(?i)dept[.\s]*(?:code|id|no)(?:\s*:\s*|\s+)([a-zA-Z0-9\-]+)"
    ).unwrap();

    // Category label.
    pub static ref CATEGORY: Regex = Regex::new(
        r"(?i)(?:category|type|class|classification|expense\s*type)(?:\s*:\s*|\s+)([a-zA-Z0-9 &\-]+)"
    ).unwrap();

    // Description label; fallbacks are the aggregator's concern.
    pub static ref DESCRIPTION: Regex = Regex::new(
        r"(?i)(?:description|details|item|service|invoice\s*for)(?:\s*:\s*|\s+)([^\n]+)"
    ).unwrap();

    // Markdown table: header row, separator row of dash/colon cells, body
    // rows until a blank line or the end of the text.
    pub static ref TABLE: Regex = Regex::new(
        r"\|(.+)\|[\r\n]+\|(?:[\s:\-]+\|)+[\r\n]+([\s\S]+?)(?:\n\n|\n$|$)"
    ).unwrap();
}

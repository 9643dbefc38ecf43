//! Scalar field extractors.
//!
//! Each extractor is a pure function over the full document text. A miss
//! returns `None`; nothing here panics on unexpected input.

use super::first_capture;
use super::patterns::{
    CATEGORY, CURRENCY, DEPARTMENT, DEPARTMENT_CODE, DESCRIPTION, INVOICE_NUMBER, VENDOR,
};

/// Vendor name: a capitalized phrase ending in a legal-entity suffix
/// (Inc., LLC, GmbH, ...).
pub fn extract_vendor(text: &str) -> Option<String> {
    first_capture(text, &[&*VENDOR])
}

pub fn extract_invoice_number(text: &str) -> Option<String> {
    first_capture(text, &[&*INVOICE_NUMBER])
}

/// Currency code, normalized to upper case.
pub fn extract_currency(text: &str) -> Option<String> {
    first_capture(text, &[&*CURRENCY]).map(|code| code.to_uppercase())
}

/// Department, preferring the free-text label over a bare code.
pub fn extract_department(text: &str) -> Option<String> {
    first_capture(text, &[&*DEPARTMENT, &*DEPARTMENT_CODE])
}

pub fn extract_category(text: &str) -> Option<String> {
    first_capture(text, &[&*CATEGORY])
}

/// Labeled description only; the line-item and first-line fallbacks are
/// applied by the aggregator once line items are known.
pub fn extract_description(text: &str) -> Option<String> {
    first_capture(text, &[&*DESCRIPTION])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_labeled_invoice_number() {
        assert_eq!(
            extract_invoice_number("Invoice No: INV-2024-001"),
            Some("INV-2024-001".to_string())
        );
        assert_eq!(
            extract_invoice_number("INV #4711 issued today"),
            Some("4711".to_string())
        );
        assert_eq!(
            extract_invoice_number("Invoice Number 2024-17"),
            Some("2024-17".to_string())
        );
        assert_eq!(extract_invoice_number("Receipt 99"), None);
    }

    #[test]
    fn extracts_vendor_with_legal_suffix() {
        assert_eq!(
            extract_vendor("Acme Supplies Inc.\n123 Market Street"),
            Some("Acme Supplies Inc.".to_string())
        );
        assert_eq!(
            extract_vendor("Bauhaus Werkzeuge GmbH, Berlin"),
            Some("Bauhaus Werkzeuge GmbH".to_string())
        );
    }

    #[test]
    fn vendor_without_suffix_is_none() {
        assert_eq!(extract_vendor("some lowercase text without a company"), None);
    }

    #[test]
    fn currency_is_uppercased() {
        assert_eq!(
            extract_currency("currency: usd"),
            Some("USD".to_string())
        );
        assert_eq!(extract_currency("Currency: XYZ"), None);
    }

    #[test]
    fn department_label_beats_department_code() {
        let text = "Dept. Code: ENG-01\nDepartment: Engineering";
        assert_eq!(extract_department(text), Some("Engineering".to_string()));

        assert_eq!(
            extract_department("Dept. Code: ENG-01"),
            Some("ENG-01".to_string())
        );
    }

    #[test]
    fn extracts_category_from_any_label() {
        assert_eq!(
            extract_category("Expense Type: Travel"),
            Some("Travel".to_string())
        );
        assert_eq!(
            extract_category("Classification: Hardware & Tools"),
            Some("Hardware & Tools".to_string())
        );
    }

    #[test]
    fn extracts_labeled_description() {
        assert_eq!(
            extract_description("Invoice for consulting services rendered\n"),
            Some("consulting services rendered".to_string())
        );
    }
}

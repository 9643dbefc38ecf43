//! Monetary amount extraction and numeric parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::first_capture;
use super::patterns::{
    AMOUNT_CODED, AMOUNT_DOLLAR, AMOUNT_EURO, AMOUNT_LABELED, AMOUNT_TABLE_TOTAL,
};

/// Extract the invoice amount.
///
/// Patterns run in priority order: a labeled total beats a table-row total
/// beats bare currency-marked numbers. The first matching pattern wins; a
/// match whose number fails to parse counts as no match, so the caller's
/// zero default stands.
pub fn extract_amount(text: &str) -> Option<Decimal> {
    first_capture(
        text,
        &[
            &*AMOUNT_LABELED,
            &*AMOUNT_TABLE_TOTAL,
            &*AMOUNT_DOLLAR,
            &*AMOUNT_EURO,
            &*AMOUNT_CODED,
        ],
    )
    .and_then(|raw| parse_amount(&raw))
}

/// Parse a currency amount, tolerating thousands separators ("1,234.56").
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = s.trim().replace(',', "");
    Decimal::from_str(&cleaned)
        .ok()
        .filter(|d| !d.is_sign_negative())
}

/// Parse a numeric table cell: strip everything but digits and separators,
/// drop thousands separators, then parse. Unparsable cells yield zero.
pub fn parse_cell_number(s: &str) -> Decimal {
    let cleaned: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == ',')
        .collect();

    Decimal::from_str(&cleaned.replace(',', "")).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_thousands_separators_exactly() {
        assert_eq!(parse_amount("1,234.56"), Some(dec("1234.56")));
        assert_eq!(parse_amount("12,345,678.90"), Some(dec("12345678.90")));
        assert_eq!(parse_amount("500"), Some(dec("500")));
    }

    #[test]
    fn malformed_numbers_fail_to_parse() {
        assert_eq!(parse_amount("N/A"), None);
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_cell_number("N/A"), Decimal::ZERO);
        assert_eq!(parse_cell_number("1.2.3"), Decimal::ZERO);
    }

    #[test]
    fn cell_numbers_ignore_currency_markers() {
        assert_eq!(parse_cell_number("$1,234.56"), dec("1234.56"));
        assert_eq!(parse_cell_number("20.00 EUR"), dec("20.00"));
        assert_eq!(parse_cell_number("2 pcs"), dec("2"));
    }

    #[test]
    fn labeled_amount_beats_bare_dollar_amount() {
        let text = "Shipping $999.99\nInvoice Total: 1,234.56";
        assert_eq!(extract_amount(text), Some(dec("1234.56")));
    }

    #[test]
    fn table_total_cell_beats_currency_prefixes() {
        let text = "| Total | 45.00 |\nDeposit $10.00";
        assert_eq!(extract_amount(text), Some(dec("45.00")));
    }

    #[test]
    fn currency_marked_amounts_are_last_resorts() {
        assert_eq!(extract_amount("paid 250.00 €"), Some(dec("250.00")));
        assert_eq!(extract_amount("wire 1,500 USD"), Some(dec("1500")));
        assert_eq!(extract_amount("$42"), Some(dec("42")));
    }

    #[test]
    fn no_amount_anywhere_is_none() {
        assert_eq!(extract_amount("no numbers here"), None);
        assert_eq!(extract_amount("Total: N/A"), None);
    }
}

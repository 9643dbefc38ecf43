//! Markdown table parsing into line items.

use tracing::debug;

use crate::models::extraction::LineItem;

use super::amounts::parse_cell_number;
use super::patterns::TABLE;

/// Header keyword groups, checked in this order. The first group a header
/// matches decides the field; anything unmatched stays under its own
/// header name.
const DESCRIPTION_HEADERS: [&str; 4] = ["description", "item", "service", "product"];
const PRICE_HEADERS: [&str; 3] = ["price", "rate", "unit price"];
const QUANTITY_HEADERS: [&str; 3] = ["quantity", "qty", "amount"];
const TOTAL_HEADERS: [&str; 3] = ["total", "subtotal", "sum"];
const TAX_HEADERS: [&str; 2] = ["tax", "vat"];

/// Parse every markdown table in the text into line items.
///
/// Tables are processed in document order and their rows concatenated.
/// A candidate region without a valid separator row is not a table and
/// contributes nothing.
pub fn extract_line_items(text: &str) -> Vec<LineItem> {
    let mut items = Vec::new();

    for caps in TABLE.captures_iter(text) {
        let headers: Vec<String> = caps[1]
            .trim()
            .split('|')
            .map(|h| h.trim().to_lowercase())
            .collect();

        for row in caps[2].trim().lines() {
            if let Some(item) = parse_row(row, &headers) {
                items.push(item);
            }
        }
    }

    debug!("parsed {} line items", items.len());
    items
}

fn parse_row(row: &str, headers: &[String]) -> Option<LineItem> {
    let mut cells: Vec<&str> = row.split('|').map(str::trim).collect();

    // Boundary pipes produce empty first/last cells.
    if cells.first() == Some(&"") {
        cells.remove(0);
    }
    if cells.last() == Some(&"") {
        cells.pop();
    }

    // Fewer than two filled cells is noise, not an item.
    if cells.iter().filter(|c| !c.is_empty()).count() < 2 {
        return None;
    }

    let mut item = LineItem::default();

    for (idx, cell) in cells.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        if idx >= headers.len() {
            break;
        }
        let header = &headers[idx];

        if matches_any(header, &DESCRIPTION_HEADERS) {
            item.description = Some((*cell).to_string());
        } else if matches_any(header, &PRICE_HEADERS) {
            item.unit_price = Some(parse_cell_number(cell));
        } else if matches_any(header, &QUANTITY_HEADERS) {
            item.quantity = Some(parse_cell_number(cell));
        } else if matches_any(header, &TOTAL_HEADERS) {
            item.total = Some(parse_cell_number(cell));
        } else if matches_any(header, &TAX_HEADERS) {
            item.tax = Some(parse_cell_number(cell));
        } else {
            item.extra.push((header.clone(), (*cell).to_string()));
        }
    }

    if item.is_empty() { None } else { Some(item) }
}

fn matches_any(header: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| header.contains(k))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn parses_a_simple_table() {
        let text = "\
| Description | Qty | Unit Price | Total |
| --- | --- | --- | --- |
| Widget | 2 | 10.00 | 20.00 |
";

        let items = extract_line_items(text);
        assert_eq!(
            items,
            vec![LineItem {
                description: Some("Widget".to_string()),
                quantity: Some(dec("2")),
                unit_price: Some(dec("10.00")),
                total: Some(dec("20.00")),
                tax: None,
                extra: vec![],
            }]
        );
    }

    #[test]
    fn tax_column_round_trips_per_row() {
        let text = "\
| Item | Total | Tax |
| --- | --- | --- |
| Consulting | 100.00 | 8.25 |
| Hosting | 50.00 | 4.13 |
";

        let items = extract_line_items(text);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].tax, Some(dec("8.25")));
        assert_eq!(items[1].tax, Some(dec("4.13")));
        assert_eq!(items[1].total, Some(dec("50.00")));
    }

    #[test]
    fn unknown_headers_are_kept_verbatim() {
        let text = "\
| Description | SKU | Total |
|---|---|---|
| Widget | AB-12 | 20.00 |
";

        let items = extract_line_items(text);
        assert_eq!(
            items[0].extra,
            vec![("sku".to_string(), "AB-12".to_string())]
        );
    }

    #[test]
    fn amount_header_maps_to_quantity() {
        let text = "\
| Product | Amount |
| --- | --- |
| Screws | 500 |
";

        let items = extract_line_items(text);
        assert_eq!(items[0].quantity, Some(dec("500")));
        assert_eq!(items[0].total, None);
    }

    #[test]
    fn multiple_tables_concatenate_in_document_order() {
        let text = "\
| Description | Total |
| --- | --- |
| First | 1.00 |
| Second | 2.00 |

Some prose in between.

| Service | Total |
| --- | --- |
| Third | 3.00 |
";

        let items = extract_line_items(text);
        let descriptions: Vec<_> = items.iter().filter_map(|i| i.description.clone()).collect();
        assert_eq!(descriptions, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn header_without_separator_row_is_not_a_table() {
        let text = "| Description | Qty |\n| Widget | 2 |\n";
        assert!(extract_line_items(text).is_empty());
    }

    #[test]
    fn single_cell_rows_are_noise() {
        let text = "\
| Description | Total |
| --- | --- |
| continued |
| Widget | 20.00 |
";

        let items = extract_line_items(text);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description.as_deref(), Some("Widget"));
    }

    #[test]
    fn unparsable_numeric_cells_default_to_zero() {
        let text = "\
| Description | Total |
| --- | --- |
| Widget | N/A |
";

        let items = extract_line_items(text);
        assert_eq!(items[0].total, Some(Decimal::ZERO));
    }
}

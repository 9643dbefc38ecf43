//! Date extraction and normalization.

use chrono::NaiveDate;

use crate::models::config::DateOrder;

use super::first_capture;
use super::patterns::{DATE_BARE, DATE_INVOICE_LABELED, DATE_LABELED};

/// Find the highest-priority date-like substring and normalize it.
///
/// An explicit "invoice date" label wins over generic date labels, which
/// win over any bare date anywhere in the text.
pub fn extract_date(text: &str, order: DateOrder) -> Option<NaiveDate> {
    first_capture(text, &[&*DATE_INVOICE_LABELED, &*DATE_LABELED, &*DATE_BARE])
        .and_then(|raw| normalize_date(&raw, order))
}

/// Normalize a raw date-like substring to a calendar date.
///
/// Canonical `YYYY-MM-DD` parses directly. Anything else is split on its
/// separator into exactly three parts: a 4-digit first part is a year,
/// otherwise the year is last (2-digit years are taken as 20xx) and the
/// remaining parts are read in the configured day/month order. Impossible
/// dates fail normalization; the caller keeps its default.
pub fn normalize_date(raw: &str, order: DateOrder) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    let separator = if raw.contains('-') {
        '-'
    } else if raw.contains('.') {
        '.'
    } else {
        '/'
    };

    let parts: Vec<&str> = raw.split(separator).collect();
    if parts.len() != 3 {
        return None;
    }

    let (year_part, month_part, day_part) = if parts[0].len() == 4 {
        (parts[0], parts[1], parts[2])
    } else {
        let (day, month) = match order {
            DateOrder::DayFirst => (parts[0], parts[1]),
            DateOrder::MonthFirst => (parts[1], parts[0]),
        };
        (parts[2], month, day)
    };

    let year: i32 = year_part.parse().ok()?;
    let year = if year < 100 { 2000 + year } else { year };
    let month: u32 = month_part.parse().ok()?;
    let day: u32 = day_part.parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

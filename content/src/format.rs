//! Display formatting for table cells and detail panes.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Placeholder for an absent value.
pub const EMPTY_CELL: &str = "—";

/// Render a backend timestamp as `Mar 5, 2024`.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (also as the
/// prefix of a naive `YYYY-MM-DDThh:mm:ss`). Anything else is shown as sent.
#[must_use]
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return EMPTY_CELL.to_owned();
    };
    parse_date(raw)
        .and_then(|date| date.format(format_description!("[month repr:short] [day padding:none], [year]")).ok())
        .unwrap_or_else(|| raw.to_owned())
}

fn parse_date(raw: &str) -> Option<Date> {
    if let Ok(at) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(at.date());
    }
    let prefix = raw.get(..10)?;
    match raw.as_bytes().get(10) {
        None | Some(b'T' | b' ') => Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok(),
        Some(_) => None,
    }
}

/// `value` or the empty-cell placeholder.
#[must_use]
pub fn or_dash(value: Option<&str>) -> &str {
    value.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(EMPTY_CELL)
}

/// Truncate to `max` characters with a trailing ellipsis.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

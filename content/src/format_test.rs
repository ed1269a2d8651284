use super::*;

#[test]
fn rfc3339_timestamp_renders_short_month() {
    assert_eq!(format_date(Some("2024-03-05T10:15:00Z")), "Mar 5, 2024");
    assert_eq!(format_date(Some("2023-12-31T23:59:59.123+00:00")), "Dec 31, 2023");
}

#[test]
fn bare_and_naive_dates_are_accepted() {
    assert_eq!(format_date(Some("2024-11-20")), "Nov 20, 2024");
    assert_eq!(format_date(Some("2024-11-20T08:00:00")), "Nov 20, 2024");
}

#[test]
fn missing_or_blank_is_dash() {
    assert_eq!(format_date(None), EMPTY_CELL);
    assert_eq!(format_date(Some("  ")), EMPTY_CELL);
}

#[test]
fn unparseable_input_is_shown_as_sent() {
    assert_eq!(format_date(Some("last week")), "last week");
    assert_eq!(format_date(Some("2024-13-01")), "2024-13-01");
}

#[test]
fn or_dash_and_truncate() {
    assert_eq!(or_dash(Some("Grade 4")), "Grade 4");
    assert_eq!(or_dash(Some("")), EMPTY_CELL);
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("abcdefghij", 5), "abcd…");
}

use super::*;

fn point(label: &str, value: u64) -> SeriesPoint {
    SeriesPoint { label: label.to_owned(), value }
}

// =============================================================
// Bar layout
// =============================================================

#[test]
fn tallest_bar_fills_plot_height() {
    let bars = bar_layout(&[point("Jan", 5), point("Feb", 10)], 200.0, 120.0);
    assert_eq!(bars.len(), 2);
    assert!((bars[1].height - 100.0).abs() < 1e-9);
    assert!((bars[0].height - 50.0).abs() < 1e-9);
    assert!((bars[0].y - 50.0).abs() < 1e-9);
    assert!(bars[1].x > bars[0].x);
}

#[test]
fn all_zero_series_has_flat_bars() {
    let bars = bar_layout(&[point("Jan", 0)], 100.0, 100.0);
    assert!(bars[0].height.abs() < 1e-9);
}

#[test]
fn empty_series_has_no_bars() {
    assert!(bar_layout(&[], 100.0, 100.0).is_empty());
}

// =============================================================
// Donut
// =============================================================

#[test]
fn donut_fractions_sum_to_one_and_skip_zero() {
    let segments = donut_segments(&[point("Pending", 3), point("Approved", 0), point("Rejected", 1)], 10.0);
    assert_eq!(segments.len(), 2);
    let sum: f64 = segments.iter().map(|s| s.fraction).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert!((segments[0].fraction - 0.75).abs() < 1e-9);
}

#[test]
fn donut_offsets_follow_previous_segments() {
    let segments = donut_segments(&[point("a", 1), point("b", 1)], 10.0);
    let circumference = 2.0 * std::f64::consts::PI * 10.0;
    assert!(segments[0].offset.abs() < 1e-9);
    assert!((segments[1].offset + circumference / 2.0).abs() < 1e-9);
}

#[test]
fn donut_of_nothing_is_empty() {
    assert!(donut_segments(&[point("a", 0)], 10.0).is_empty());
}

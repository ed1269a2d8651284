//! Inline-SVG bar and donut charts for the dashboard.
//!
//! DESIGN
//! ======
//! Geometry is computed by plain functions so it can be tested without a
//! DOM; the components only map the computed shapes to SVG elements.

#[cfg(test)]
#[path = "charts_test.rs"]
mod charts_test;

use content::types::SeriesPoint;
use leptos::prelude::*;

pub const PALETTE: [&str; 6] = ["#4f46e5", "#f59e0b", "#10b981", "#ef4444", "#0ea5e9", "#a855f7"];

const BAR_GAP: f64 = 8.0;
const LABEL_BAND: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: u64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Lay out one bar per point inside a `width` x `height` box, leaving a band
/// at the bottom for labels. Bars scale against the largest value.
#[allow(clippy::cast_precision_loss)]
pub fn bar_layout(series: &[SeriesPoint], width: f64, height: f64) -> Vec<Bar> {
    if series.is_empty() {
        return Vec::new();
    }
    let plot_height = (height - LABEL_BAND).max(0.0);
    let n = series.len() as f64;
    let bar_width = ((width - BAR_GAP * (n + 1.0)) / n).max(1.0);
    let max = series.iter().map(|p| p.value).max().unwrap_or(0);

    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let h = if max == 0 { 0.0 } else { plot_height * p.value as f64 / max as f64 };
            Bar {
                label: p.label.clone(),
                value: p.value,
                x: BAR_GAP + i as f64 * (bar_width + BAR_GAP),
                y: plot_height - h,
                width: bar_width,
                height: h,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub label: String,
    pub value: u64,
    pub fraction: f64,
    /// `stroke-dasharray` length of the arc.
    pub dash: f64,
    /// `stroke-dashoffset` placing the arc after earlier segments.
    pub offset: f64,
    pub color: &'static str,
}

/// Donut arcs as dash lengths on a circle of `radius`. Zero-valued points are
/// skipped; an all-zero series yields no segments.
#[allow(clippy::cast_precision_loss)]
pub fn donut_segments(series: &[SeriesPoint], radius: f64) -> Vec<Segment> {
    let total: u64 = series.iter().map(|p| p.value).sum();
    if total == 0 {
        return Vec::new();
    }
    let circumference = 2.0 * std::f64::consts::PI * radius;
    let mut consumed = 0.0;
    series
        .iter()
        .enumerate()
        .filter(|(_, p)| p.value > 0)
        .map(|(i, p)| {
            let fraction = p.value as f64 / total as f64;
            let segment = Segment {
                label: p.label.clone(),
                value: p.value,
                fraction,
                dash: fraction * circumference,
                offset: -consumed * circumference,
                color: PALETTE[i % PALETTE.len()],
            };
            consumed += fraction;
            segment
        })
        .collect()
}

#[component]
pub fn BarChart(title: &'static str, series: Vec<SeriesPoint>) -> impl IntoView {
    const W: f64 = 480.0;
    const H: f64 = 220.0;
    let bars = bar_layout(&series, W, H);
    let empty = bars.is_empty();

    view! {
        <section class="chart chart--bar">
            <h3 class="chart__title">{title}</h3>
            <Show when=move || !empty fallback=|| view! { <p class="chart__empty">"No data yet."</p> }>
                <svg class="chart__svg" viewBox=format!("0 0 {W} {H}") role="img" aria-label=title>
                    {bars
                        .clone()
                        .into_iter()
                        .map(|bar| {
                            let label_y = H - 6.0;
                            let cx = bar.x + bar.width / 2.0;
                            view! {
                                <g class="chart__bar">
                                    <rect x=bar.x y=bar.y width=bar.width height=bar.height fill=PALETTE[0] rx="3">
                                        <title>{format!("{}: {}", bar.label, bar.value)}</title>
                                    </rect>
                                    <text x=cx y=label_y text-anchor="middle" class="chart__label">{bar.label.clone()}</text>
                                </g>
                            }
                        })
                        .collect::<Vec<_>>()}
                </svg>
            </Show>
        </section>
    }
}

#[component]
pub fn DonutChart(title: &'static str, series: Vec<SeriesPoint>) -> impl IntoView {
    const R: f64 = 60.0;
    let segments = donut_segments(&series, R);
    let total: u64 = series.iter().map(|p| p.value).sum();
    let legend = segments.clone();

    view! {
        <section class="chart chart--donut">
            <h3 class="chart__title">{title}</h3>
            <svg class="chart__svg" viewBox="0 0 160 160" role="img" aria-label=title>
                <circle cx="80" cy="80" r=R fill="none" stroke="#e5e7eb" stroke-width="20"/>
                {segments
                    .into_iter()
                    .map(|s| {
                        view! {
                            <circle
                                cx="80"
                                cy="80"
                                r=R
                                fill="none"
                                stroke=s.color
                                stroke-width="20"
                                stroke-dasharray=format!("{:.2} {:.2}", s.dash, 2.0 * std::f64::consts::PI * R)
                                stroke-dashoffset=format!("{:.2}", s.offset)
                                transform="rotate(-90 80 80)"
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
                <text x="80" y="86" text-anchor="middle" class="chart__total">{total.to_string()}</text>
            </svg>
            <ul class="chart__legend">
                {legend
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li>
                                <span class="chart__swatch" style=format!("background:{}", s.color)></span>
                                {format!("{} ({:.0}%)", s.label, s.fraction * 100.0)}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

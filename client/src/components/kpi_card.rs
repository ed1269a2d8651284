//! Dashboard KPI card.

use leptos::prelude::*;

#[component]
pub fn KpiCard(label: &'static str, value: u64, #[prop(optional)] tone: Option<&'static str>) -> impl IntoView {
    let class = match tone {
        Some(tone) => format!("kpi-card kpi-card--{tone}"),
        None => "kpi-card".to_owned(),
    };
    view! {
        <div class=class>
            <span class="kpi-card__value">{value.to_string()}</span>
            <span class="kpi-card__label">{label}</span>
        </div>
    }
}

//! Dashboard landing page: KPI cards and submission charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! The authenticated landing route. It fetches `DashboardSummary` once the
//! session has loaded and renders counters plus two charts. Nothing here is
//! editable; moderation happens on the per-resource list pages.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use content::types::DashboardSummary;
use leptos::prelude::*;

use crate::components::charts::{BarChart, DonutChart};
use crate::components::kpi_card::KpiCard;
use crate::components::layout::Shell;
use crate::state::session::SessionState;
use crate::util::mount_guard::MountGuard;

/// One KPI card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kpi {
    pub label: &'static str,
    pub value: u64,
    pub tone: Option<&'static str>,
}

/// Cards shown across the top of the dashboard, in display order.
pub fn kpi_cards(summary: &DashboardSummary) -> Vec<Kpi> {
    let plain = |label, value| Kpi { label, value, tone: None };
    vec![
        plain("Subjects", summary.total_subjects),
        plain("Lessons", summary.total_lessons),
        plain("Assessments", summary.total_assessments),
        plain("Games", summary.total_games),
        plain("Teachers", summary.total_teachers),
        Kpi { label: "Pending Review", value: summary.pending_reviews, tone: Some("amber") },
        Kpi { label: "Approved", value: summary.approved, tone: Some("green") },
        Kpi { label: "Revision Requested", value: summary.changes_requested, tone: Some("indigo") },
        Kpi { label: "Rejected", value: summary.rejected, tone: Some("red") },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let summary = RwSignal::new(None::<DashboardSummary>);
    let error = RwSignal::new(None::<String>);
    let guard = MountGuard::for_current_owner();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let state = session.get();
        if state.loading || requested.get_untracked() {
            return;
        }
        requested.set(true);

        #[cfg(feature = "hydrate")]
        {
            let guard = guard.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::transport::GlooTransport::default();
                let result = content::api::dashboard(&transport, &state.session).await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(data) => summary.set(Some(data)),
                    Err(e) => {
                        log::warn!("dashboard fetch failed: {e}");
                        error.set(Some(e.user_message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&guard, state, error);
        }
    });

    view! {
        <Shell title="Dashboard">
            <Show when=move || error.get().is_some()>
                <p class="dashboard__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            {move || match summary.get() {
                None if error.get().is_none() => view! { <p class="dashboard__loading">"Loading dashboard..."</p> }.into_any(),
                None => ().into_any(),
                Some(data) => {
                    let cards = kpi_cards(&data)
                        .into_iter()
                        .map(|k| match k.tone {
                            Some(tone) => view! { <KpiCard label=k.label value=k.value tone=tone/> }.into_any(),
                            None => view! { <KpiCard label=k.label value=k.value/> }.into_any(),
                        })
                        .collect::<Vec<_>>();
                    let monthly = data.monthly_submissions.clone();
                    let statuses = data.status_series();
                    view! {
                        <div class="dashboard">
                            <div class="dashboard__kpis">{cards}</div>
                            <div class="dashboard__charts">
                                <BarChart title="Monthly Submissions" series=monthly/>
                                <DonutChart title="Review Status" series=statuses/>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Shell>
    }
}

//! Generic moderation list page shared by every resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each resource page supplies a [`ListPageConfig`] and a [`Reviewable`] impl
//! for its record type; everything else (fetch-on-mount, client-side filters,
//! pagination, the review modal and the moderate round trip) is implemented
//! once here on top of `content::listing::ListState<T>` and
//! `content::workflow::ModerationWorkflow<T>`.
//!
//! ERROR HANDLING
//! ==============
//! A failed initial fetch renders inline (including the missing-token
//! message). A failed moderation request raises an error toast and returns
//! the modal to the detail view; the list is left untouched. A failed
//! background re-fetch after a successful action is only logged.

#[cfg(test)]
#[path = "moderation_test.rs"]
mod moderation_test;

use content::format::format_date;
use content::listing::{Choice, ListState, Listable};
#[cfg(feature = "hydrate")]
use content::workflow::apply_outcome;
use content::workflow::{ModerateRequest, ModerationWorkflow, ReviewState};
use content::{CanonicalStatus, ClientError, Moderatable, Session};
use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::components::layout::Shell;
use crate::components::pagination::Pagination;
use crate::components::review_modal::{ReviewCommand, ReviewModal, ReviewView};
use crate::components::status_badge::StatusBadge;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::notify;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

/// Presentation of a record in the list table and review modal.
pub trait Reviewable: Listable + DeserializeOwned + Send + Sync + 'static {
    /// Headers of the type-specific columns between title and status.
    const COLUMNS: &'static [&'static str];

    fn display_title(&self) -> String;
    fn cells(&self) -> Vec<String>;
    fn details(&self) -> Vec<(&'static str, String)>;
}

/// Static options of one list page.
#[derive(Clone, Copy, Debug)]
pub struct ListPageConfig {
    pub title: &'static str,
    pub search_placeholder: &'static str,
    /// Label of the kind/type filter, when the resource has one.
    pub kind_label: Option<&'static str>,
    pub show_grade: bool,
    /// `(href, label)` of a create button.
    pub create: Option<(&'static str, &'static str)>,
}

/// Project the workflow state onto what the modal renders.
pub fn review_view<T: Reviewable>(workflow: &ModerationWorkflow<T>) -> Option<ReviewView> {
    let item = workflow.current_item()?;
    let (draft, error) = match workflow.state() {
        ReviewState::AwaitingCommentInput { draft, error, .. } => (draft.clone(), error.clone()),
        _ => (String::new(), None),
    };
    Some(ReviewView {
        title: item.display_title(),
        details: item.details(),
        status: item.canonical_status(),
        comment: item.moderation_comment().map(str::to_owned).filter(|c| !c.trim().is_empty()),
        can_moderate: workflow.can_moderate(),
        submitting: workflow.is_submitting(),
        awaiting_comment: workflow.is_awaiting_comment(),
        draft,
        error,
    })
}

/// Status filter entries as `(value, label)`; the empty value means all.
pub fn status_options() -> Vec<(&'static str, &'static str)> {
    std::iter::once(("", "All statuses"))
        .chain(CanonicalStatus::ALL.iter().map(|s| (s.as_str(), s.label())))
        .collect()
}

/// Apply a user command to the workflow; returns the request to send, if any.
pub fn apply_command<T: Moderatable>(workflow: &mut ModerationWorkflow<T>, command: ReviewCommand) -> Option<ModerateRequest> {
    match command {
        ReviewCommand::Close => {
            let _ = workflow.close();
            None
        }
        ReviewCommand::Approve => workflow.approve().ok(),
        ReviewCommand::Reject => workflow.reject().ok(),
        ReviewCommand::BeginRequestChanges => {
            let _ = workflow.begin_request_changes();
            None
        }
        ReviewCommand::UpdateComment(text) => {
            workflow.update_comment(&text);
            None
        }
        ReviewCommand::CancelComment => {
            workflow.cancel_comment();
            None
        }
        ReviewCommand::SubmitComment => workflow.submit_comment().ok(),
    }
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn apply_fetch<T: Reviewable>(
    list: RwSignal<ListState<T>>,
    workflow: RwSignal<ModerationWorkflow<T>>,
    result: Result<Vec<T>, ClientError>,
    background: bool,
) {
    match result {
        Ok(items) => {
            let Some(items) = workflow.try_update(|w| w.reconcile(items)) else {
                return;
            };
            list.try_update(|l| l.set_items(items));
        }
        Err(e) if background => {
            #[cfg(feature = "hydrate")]
            log::warn!("background refresh of {} failed: {e}", T::RESOURCE.title());
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
        Err(e) => {
            list.try_update(|l| {
                l.loading = false;
                l.error = Some(e.user_message());
            });
        }
    }
}

fn load_list<T: Reviewable>(list: RwSignal<ListState<T>>, workflow: RwSignal<ModerationWorkflow<T>>, session: Session) {
    list.update(|l| {
        l.loading = true;
        l.error = None;
    });
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let transport = crate::net::transport::GlooTransport::default();
        let result = content::api::list::<T, _>(&transport, &session).await;
        apply_fetch(list, workflow, result, false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (workflow, session);
    }
}

fn submit<T: Reviewable>(
    request: ModerateRequest,
    list: RwSignal<ListState<T>>,
    workflow: RwSignal<ModerationWorkflow<T>>,
    session: Session,
    toasts: RwSignal<ToastState>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let transport = crate::net::transport::GlooTransport::default();
        match content::api::moderate(&transport, &session, &request).await {
            Ok(response) => {
                if let Some(outcome) = workflow.try_update(|w| w.complete(&response)).and_then(Result::ok) {
                    list.try_update(|l| apply_outcome(l.items_mut(), &outcome));
                    notify(toasts, ToastKind::Success, outcome.action.success_message());
                }
                let refreshed = content::api::list::<T, _>(&transport, &session).await;
                apply_fetch(list, workflow, refreshed, true);
            }
            Err(e) => {
                workflow.try_update(|w| {
                    let _ = w.fail();
                });
                notify(toasts, ToastKind::Error, e.user_message());
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, list, workflow, session, toasts);
    }
}

/// Render a moderation list page for `T`.
pub fn moderation_list<T: Reviewable>(config: ListPageConfig) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let list = RwSignal::new(ListState::<T>::new());
    let workflow = RwSignal::new(ModerationWorkflow::<T>::new());

    Effect::new(move || {
        let state = session.get();
        if state.loading {
            return;
        }
        load_list(list, workflow, state.session);
    });

    let on_command = Callback::new(move |command: ReviewCommand| {
        let request = workflow.try_update(|w| apply_command(w, command)).flatten();
        if let Some(request) = request {
            submit(request, list, workflow, session.get_untracked().session, toasts);
        }
    });
    let review = Signal::derive(move || workflow.with(review_view));

    let page = Signal::derive(move || list.with(ListState::page));
    let total_pages = Signal::derive(move || list.with(ListState::total_pages));
    let buttons = Signal::derive(move || list.with(ListState::page_buttons));
    let on_page = Callback::new(move |n: usize| list.update(|l| l.set_page(n)));

    let headers: Vec<&'static str> =
        std::iter::once("Title").chain(T::COLUMNS.iter().copied()).chain(["Status", "Submitted", ""]).collect();
    let column_count = headers.len();

    view! {
        <Shell title=config.title>
            <div class="list-page">
                <div class="list-page__toolbar">
                    <input
                        class="list-page__search"
                        type="search"
                        placeholder=config.search_placeholder
                        prop:value=move || list.with(|l| l.query().search.clone())
                        on:input=move |ev| list.update(|l| l.set_search(&event_target_value(&ev)))
                    />
                    {config
                        .kind_label
                        .map(|label| {
                            view! {
                                <select
                                    class="list-page__filter"
                                    aria-label=label
                                    on:change=move |ev| list.update(|l| l.set_kind(Choice::from_select(&event_target_value(&ev))))
                                >
                                    <option value="">{format!("All {}", label.to_lowercase())}</option>
                                    {move || {
                                        list.with(ListState::kind_options)
                                            .into_iter()
                                            .map(|o| view! { <option value=o.clone()>{o.clone()}</option> })
                                            .collect::<Vec<_>>()
                                    }}
                                </select>
                            }
                        })}
                    <Show when=move || config.show_grade>
                        <select
                            class="list-page__filter"
                            aria-label="Grade"
                            on:change=move |ev| list.update(|l| l.set_grade(Choice::from_select(&event_target_value(&ev))))
                        >
                            <option value="">"All grades"</option>
                            {move || {
                                list.with(ListState::grade_options)
                                    .into_iter()
                                    .map(|o| view! { <option value=o.clone()>{format!("Grade {o}")}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </Show>
                    <select
                        class="list-page__filter"
                        aria-label="Status"
                        on:change=move |ev| list.update(|l| l.set_status(Choice::from_status_select(&event_target_value(&ev))))
                    >
                        {status_options()
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <span class="list-page__spacer"></span>
                    {config.create.map(|(href, label)| view! { <a class="btn btn--primary" href=href>{label}</a> })}
                </div>

                <div class="list-page__counts">
                    {CanonicalStatus::ALL
                        .iter()
                        .map(|status| {
                            let status = *status;
                            view! {
                                <span class="list-page__count">
                                    <StatusBadge status=status/>
                                    {move || list.with(|l| l.status_count(status)).to_string()}
                                </span>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || list.with(|l| l.error.is_some())>
                    <p class="list-page__error">{move || list.with(|l| l.error.clone().unwrap_or_default())}</p>
                </Show>

                <table class="data-table">
                    <thead>
                        <tr>{headers.iter().map(|h| view! { <th>{*h}</th> }).collect::<Vec<_>>()}</tr>
                    </thead>
                    <tbody>
                        {move || {
                            let state = list.get();
                            if state.loading || session.with(|s| s.loading) {
                                return view! {
                                    <tr>
                                        <td class="data-table__empty" colspan=column_count.to_string()>"Loading..."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            let rows = state.visible();
                            if rows.is_empty() {
                                return view! {
                                    <tr>
                                        <td class="data-table__empty" colspan=column_count.to_string()>"No records found."</td>
                                    </tr>
                                }
                                    .into_any();
                            }
                            rows.into_iter()
                                .map(|item| {
                                    let status = item.canonical_status();
                                    let submitted = format_date(item.created_at());
                                    let title = item.display_title();
                                    let cells = item.cells();
                                    view! {
                                        <tr>
                                            <td class="data-table__title">{title}</td>
                                            {cells.into_iter().map(|c| view! { <td>{c}</td> }).collect::<Vec<_>>()}
                                            <td><StatusBadge status=status/></td>
                                            <td>{submitted}</td>
                                            <td>
                                                <button
                                                    class="btn btn--small"
                                                    on:click=move |_| {
                                                        let item = item.clone();
                                                        workflow.update(|w| {
                                                            let _ = w.open(item);
                                                        });
                                                    }
                                                >
                                                    "Review"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>

                <div class="list-page__footer">
                    <span class="list-page__range">
                        {move || {
                            let (start, end, total) = list.with(ListState::showing_range);
                            format!("Showing {start}–{end} of {total}")
                        }}
                    </span>
                    <Pagination page=page buttons=buttons total_pages=total_pages on_change=on_page/>
                </div>
            </div>
            <ReviewModal review=review on_command=on_command/>
        </Shell>
    }
}

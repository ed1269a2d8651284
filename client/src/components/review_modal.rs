//! Review modal with the request-changes sub-modal.
//!
//! DESIGN
//! ======
//! The modal is not generic over the record type. Pages project their
//! `ModerationWorkflow<T>` into a [`ReviewView`] and receive user intent back
//! as [`ReviewCommand`]s, so one component serves every resource.

use content::CanonicalStatus;
use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;

/// Everything the modal renders for the open item.
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewView {
    pub title: String,
    pub details: Vec<(&'static str, String)>,
    pub status: CanonicalStatus,
    pub comment: Option<String>,
    pub can_moderate: bool,
    pub submitting: bool,
    pub awaiting_comment: bool,
    pub draft: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReviewCommand {
    Close,
    Approve,
    Reject,
    BeginRequestChanges,
    UpdateComment(String),
    SubmitComment,
    CancelComment,
}

#[component]
pub fn ReviewModal(#[prop(into)] review: Signal<Option<ReviewView>>, on_command: Callback<ReviewCommand>) -> impl IntoView {
    let current = move || review.get();
    let run = move |cmd: ReviewCommand| on_command.run(cmd);
    let busy = move || current().is_some_and(|v| v.submitting);

    view! {
        <Show when=move || current().is_some()>
            <div class="dialog-backdrop" on:click=move |_| if !busy() { run(ReviewCommand::Close) }>
                <div class="dialog review-modal" on:click=move |ev| ev.stop_propagation()>
                    <header class="review-modal__header">
                        <h2>{move || current().map(|v| v.title).unwrap_or_default()}</h2>
                        {move || current().map(|v| view! { <StatusBadge status=v.status/> })}
                    </header>
                    <dl class="review-modal__details">
                        {move || {
                            current()
                                .map(|v| v.details)
                                .unwrap_or_default()
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </dl>
                    <Show when=move || current().and_then(|v| v.comment).is_some()>
                        <blockquote class="review-modal__comment">
                            {move || current().and_then(|v| v.comment).unwrap_or_default()}
                        </blockquote>
                    </Show>
                    <footer class="review-modal__actions">
                        <Show
                            when=move || current().is_some_and(|v| v.can_moderate)
                            fallback=|| view! { <p class="review-modal__readonly">"This item has already been reviewed."</p> }
                        >
                            <button class="btn btn--green" disabled=busy on:click=move |_| run(ReviewCommand::Approve)>
                                "Approve"
                            </button>
                            <button
                                class="btn btn--indigo"
                                disabled=busy
                                on:click=move |_| run(ReviewCommand::BeginRequestChanges)
                            >
                                "Request Revision"
                            </button>
                            <button class="btn btn--red" disabled=busy on:click=move |_| run(ReviewCommand::Reject)>
                                "Reject"
                            </button>
                        </Show>
                        <button class="btn btn--ghost" disabled=busy on:click=move |_| run(ReviewCommand::Close)>
                            "Close"
                        </button>
                    </footer>
                </div>
            </div>
            <Show when=move || current().is_some_and(|v| v.awaiting_comment)>
                <div class="dialog-backdrop dialog-backdrop--nested">
                    <div class="dialog comment-modal">
                        <h3>"Request Revision"</h3>
                        <label class="dialog__label">
                            "What needs to change?"
                            <textarea
                                class="dialog__input"
                                rows="4"
                                prop:value=move || current().map(|v| v.draft).unwrap_or_default()
                                on:input=move |ev| run(ReviewCommand::UpdateComment(event_target_value(&ev)))
                            ></textarea>
                        </label>
                        <Show when=move || current().and_then(|v| v.error).is_some()>
                            <p class="dialog__error">{move || current().and_then(|v| v.error).unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn btn--ghost" on:click=move |_| run(ReviewCommand::CancelComment)>
                                "Cancel"
                            </button>
                            <button class="btn btn--indigo" on:click=move |_| run(ReviewCommand::SubmitComment)>
                                "Send Request"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </Show>
    }
}

//! Three-step subject creation wizard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step state, topic list and validation live in
//! `content::wizard::SubjectWizard`; this page renders the current step and
//! sends a single create call from the publish step.

#[cfg(test)]
#[path = "subject_wizard_test.rs"]
mod subject_wizard_test;

use content::error::{FieldError, field_message};
use content::wizard::{SubjectStep, SubjectWizard};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::file_picker::FilePicker;
use crate::components::layout::Shell;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::notify;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

/// CSS modifier for a step in the indicator relative to `current`.
pub fn step_class(step: SubjectStep, current: SubjectStep) -> &'static str {
    match step.number().cmp(&current.number()) {
        std::cmp::Ordering::Less => "wizard__step wizard__step--done",
        std::cmp::Ordering::Equal => "wizard__step wizard__step--current",
        std::cmp::Ordering::Greater => "wizard__step",
    }
}

#[component]
pub fn SubjectWizardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let wizard = RwSignal::new(SubjectWizard::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let busy = RwSignal::new(false);

    let field_error = move |field: &'static str| move || errors.with(|e| field_message(e, field)).unwrap_or_default();
    let step = move || wizard.with(SubjectWizard::step);

    let on_next = move |_| {
        if let Some(result) = wizard.try_update(SubjectWizard::next) {
            errors.set(result.err().unwrap_or_default());
        }
    };
    let on_back = move |_| {
        wizard.update(|w| {
            w.back();
        });
        errors.set(Vec::new());
    };

    let on_submit = move |_| {
        if busy.get_untracked() {
            return;
        }
        let request = match wizard.with_untracked(SubjectWizard::build_request) {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::transport::GlooTransport::default();
                let current = session.get_untracked().session;
                match content::api::create_subject(&transport, &current, &request).await {
                    Ok(created) => {
                        notify(toasts, ToastKind::Success, format!("Subject \"{}\" created.", created.name));
                        navigate("/subjects", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => notify(toasts, ToastKind::Error, e.user_message()),
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, toasts, &navigate);
        }
    };

    let on_cover_pick = Callback::new(|_: Option<content::types::FileUpload>| {});
    let on_cover_preview = Callback::new(move |url: Option<String>| wizard.update(|w| w.cover_image = url));

    let details_step = move || {
        view! {
            <div class="form">
                <label class="form__field">
                    "Subject name"
                    <input
                        prop:value=move || wizard.with(|w| w.name.clone())
                        on:input=move |ev| wizard.update(|w| w.name = event_target_value(&ev))
                    />
                    <span class="form__error">{field_error("name")}</span>
                </label>
                <label class="form__field">
                    "Grade"
                    <input
                        prop:value=move || wizard.with(|w| w.grade.clone())
                        on:input=move |ev| wizard.update(|w| w.grade = event_target_value(&ev))
                    />
                    <span class="form__error">{field_error("grade")}</span>
                </label>
                <label class="form__field">
                    "Description"
                    <textarea
                        rows="4"
                        prop:value=move || wizard.with(|w| w.description.clone())
                        on:input=move |ev| wizard.update(|w| w.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="form__toggle">
                    <input
                        type="checkbox"
                        prop:checked=move || wizard.with(|w| w.active)
                        on:change=move |ev| wizard.update(|w| w.active = event_target_checked(&ev))
                    />
                    "Active (submit for review)"
                </label>
                <FilePicker label="Cover image" accept="image/*" on_pick=on_cover_pick on_preview=on_cover_preview/>
            </div>
        }
    };

    let topics_step = move || {
        view! {
            <div class="wizard__topics">
                <div class="wizard__topics-head">
                    <h3>{move || format!("Topics ({})", wizard.with(|w| w.topics().len()))}</h3>
                    <button class="btn" type="button" on:click=move |_| wizard.update(SubjectWizard::open_topic_form)>
                        "Add Topic"
                    </button>
                </div>
                <span class="form__error">{field_error("topics")}</span>
                <ul class="wizard__topic-list">
                    {move || {
                        wizard
                            .with(|w| w.topics().to_vec())
                            .into_iter()
                            .enumerate()
                            .map(|(index, topic)| {
                                view! {
                                    <li class="wizard__topic">
                                        <strong>{topic.name}</strong>
                                        <span>{topic.description}</span>
                                        <button
                                            class="btn btn--ghost"
                                            type="button"
                                            on:click=move |_| wizard.update(|w| {
                                                w.remove_topic(index);
                                            })
                                        >
                                            "Remove"
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show when=move || wizard.with(|w| w.topic_form().is_some())>
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <h3>"Add Topic"</h3>
                            <label class="dialog__label">
                                "Name"
                                <input
                                    class="dialog__input"
                                    prop:value=move || wizard.with(|w| w.topic_form().map(|f| f.name.clone()).unwrap_or_default())
                                    on:input=move |ev| {
                                        let name = event_target_value(&ev);
                                        wizard.update(|w| {
                                            let description = w.topic_form().map(|f| f.description.clone()).unwrap_or_default();
                                            w.update_topic_form(&name, &description);
                                        });
                                    }
                                />
                            </label>
                            <label class="dialog__label">
                                "Description"
                                <textarea
                                    class="dialog__input"
                                    rows="3"
                                    prop:value=move || {
                                        wizard.with(|w| w.topic_form().map(|f| f.description.clone()).unwrap_or_default())
                                    }
                                    on:input=move |ev| {
                                        let description = event_target_value(&ev);
                                        wizard.update(|w| {
                                            let name = w.topic_form().map(|f| f.name.clone()).unwrap_or_default();
                                            w.update_topic_form(&name, &description);
                                        });
                                    }
                                ></textarea>
                            </label>
                            <p class="dialog__error">
                                {move || wizard.with(|w| w.topic_form().and_then(|f| f.error)).unwrap_or_default()}
                            </p>
                            <div class="dialog__actions">
                                <button class="btn btn--ghost" type="button" on:click=move |_| wizard.update(SubjectWizard::close_topic_form)>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    type="button"
                                    on:click=move |_| wizard.update(|w| {
                                        let _ = w.save_topic();
                                    })
                                >
                                    "Save Topic"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        }
    };

    let publish_step = move || {
        move || {
            let w = wizard.get();
            let status = match w.status() {
                content::types::DraftStatus::Pending => "Submitted for review",
                content::types::DraftStatus::Draft => "Saved as draft",
            };
            view! {
                <div class="wizard__preview">
                    {w.cover_image.clone().map(|src| view! { <img class="wizard__cover" src=src alt="Cover"/> })}
                    <h3>{w.name.clone()}</h3>
                    <p>{format!("Grade {}", w.grade.trim())}</p>
                    <p>{w.description.clone()}</p>
                    <p class="wizard__status">{status}</p>
                    <ul>
                        {w.topics().iter().map(|t| view! { <li>{t.name.clone()}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            }
        }
    };

    view! {
        <Shell title="New Subject">
            <div class="wizard">
                <ol class="wizard__steps">
                    {SubjectStep::ALL
                        .iter()
                        .map(|s| {
                            let s = *s;
                            view! { <li class=move || step_class(s, step())>{format!("{}. {}", s.number(), s.title())}</li> }
                        })
                        .collect::<Vec<_>>()}
                </ol>
                // Panels stay mounted so the cover preview URL outlives the details step.
                <section class="wizard__panel" class:wizard__panel--hidden=move || step() != SubjectStep::Details>
                    {details_step()}
                </section>
                <section class="wizard__panel" class:wizard__panel--hidden=move || step() != SubjectStep::Topics>
                    {topics_step()}
                </section>
                <section class="wizard__panel" class:wizard__panel--hidden=move || step() != SubjectStep::Publish>
                    {publish_step()}
                </section>
                <div class="wizard__nav">
                    <Show when=move || step() != SubjectStep::Details>
                        <button class="btn btn--ghost" type="button" on:click=on_back>
                            "Back"
                        </button>
                    </Show>
                    <span class="wizard__spacer"></span>
                    <Show
                        when=move || step() == SubjectStep::Publish
                        fallback=move || view! { <button class="btn btn--primary" type="button" on:click=on_next>"Next"</button> }
                    >
                        <button class="btn btn--primary" type="button" disabled=move || busy.get() on:click=on_submit.clone()>
                            {move || if busy.get() { "Creating..." } else { "Create Subject" }}
                        </button>
                    </Show>
                </div>
            </div>
        </Shell>
    }
}

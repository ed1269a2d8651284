//! Lesson wizard: shared details, then a material upload or the quiz builder.
//!
//! SYSTEM CONTEXT
//! ==============
//! Details travel between `/lessons/new` and `/lessons/quiz` as query
//! parameters, so either route can be opened directly with the fields filled
//! in. Only the material branch talks to the backend.

use content::error::{FieldError, field_message};
use content::types::FileUpload;
use content::wizard::lesson::resource_type_for;
use content::wizard::{LessonDetails, LessonKind, MaterialUpload};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::file_picker::FilePicker;
use crate::components::layout::Shell;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::notify;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

/// Text inputs for the fields shared by both lesson kinds.
#[component]
pub fn LessonDetailsFields(details: RwSignal<LessonDetails>, errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    let field_error = move |field: &'static str| move || errors.with(|e| field_message(e, field)).unwrap_or_default();
    let input = move |label: &'static str, field: &'static str| {
        let read = move || {
            details.with(|d| match field {
                "title" => d.title.clone(),
                "subject" => d.subject.clone(),
                "topic" => d.topic.clone(),
                _ => d.grade.clone(),
            })
        };
        let write = move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            details.update(|d| match field {
                "title" => d.title = value,
                "subject" => d.subject = value,
                "topic" => d.topic = value,
                _ => d.grade = value,
            });
        };
        view! {
            <label class="form__field">
                {label}
                <input prop:value=read on:input=write/>
                <span class="form__error">{field_error(field)}</span>
            </label>
        }
    };

    view! {
        <div class="form">
            {input("Lesson title", "title")}
            {input("Subject", "subject")}
            {input("Topic", "topic")}
            {input("Grade", "grade")}
            <label class="form__field">
                "Description"
                <textarea
                    rows="4"
                    prop:value=move || details.with(|d| d.description.clone())
                    on:input=move |ev| details.update(|d| d.description = event_target_value(&ev))
                ></textarea>
            </label>
        </div>
    }
}

#[component]
pub fn LessonWizardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let location = use_location();

    let details = RwSignal::new(LessonDetails::from_query(&location.search.get_untracked()));
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let kind = RwSignal::new(LessonKind::Material);
    let file = RwSignal::new(None::<FileUpload>);
    let publish = RwSignal::new(true);
    let busy = RwSignal::new(false);

    let on_pick = Callback::new(move |picked: Option<FileUpload>| file.set(picked));

    let navigate_quiz = navigate.clone();
    let on_continue_quiz = move |_| {
        let current = details.get_untracked();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(Vec::new());
        navigate_quiz(&current.href(LessonKind::Quiz), NavigateOptions::default());
    };

    let on_upload = move |_| {
        if busy.get_untracked() {
            return;
        }
        let mut upload = MaterialUpload::new(details.get_untracked());
        upload.publish = publish.get_untracked();
        upload.set_file(file.get_untracked());
        let request = match upload.build_request() {
            Ok(request) => request,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::transport::GlooTransport::default();
                let current = session.get_untracked().session;
                match content::api::create_lesson(&transport, &current, &request).await {
                    Ok(created) => {
                        notify(toasts, ToastKind::Success, format!("Lesson \"{}\" uploaded.", created.title));
                        navigate("/lessons", NavigateOptions::default());
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

    let kind_button = move |k: LessonKind| {
        view! {
            <button
                type="button"
                class="wizard__choice"
                class:wizard__choice--active=move || kind.get() == k
                on:click=move |_| kind.set(k)
            >
                {k.label()}
            </button>
        }
    };

    view! {
        <Shell title="New Lesson">
            <div class="wizard">
                <LessonDetailsFields details=details errors=errors/>
                <div class="wizard__choices">{kind_button(LessonKind::Material)} {kind_button(LessonKind::Quiz)}</div>
                <Show
                    when=move || kind.get() == LessonKind::Material
                    fallback=move || {
                        let on_continue_quiz = on_continue_quiz.clone();
                        view! {
                            <div class="wizard__nav">
                                <span class="wizard__spacer"></span>
                                <button class="btn btn--primary" type="button" on:click=on_continue_quiz>
                                    "Continue to Quiz Builder"
                                </button>
                            </div>
                        }
                    }
                >
                    <FilePicker label="Lesson file" on_pick=on_pick/>
                    <span class="form__error">{move || errors.with(|e| field_message(e, "file")).unwrap_or_default()}</span>
                    <p class="form__hint">
                        {move || {
                            file.with(|f| {
                                f.as_ref().map(|f| format!("Resource type: {}", resource_type_for(&f.file_name))).unwrap_or_default()
                            })
                        }}
                    </p>
                    <label class="form__toggle">
                        <input
                            type="checkbox"
                            prop:checked=move || publish.get()
                            on:change=move |ev| publish.set(event_target_checked(&ev))
                        />
                        "Submit for review"
                    </label>
                    <div class="wizard__nav">
                        <span class="wizard__spacer"></span>
                        <button class="btn btn--primary" type="button" disabled=move || busy.get() on:click=on_upload.clone()>
                            {move || if busy.get() { "Uploading..." } else { "Upload Lesson" }}
                        </button>
                    </div>
                </Show>
            </div>
        </Shell>
    }
}

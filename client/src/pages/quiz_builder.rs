//! Quiz builder for the quiz branch of the lesson wizard.
//!
//! Questions are kept in `content::wizard::QuizBuilder` on the page; finishing
//! shows a confirmation modal and does not call the backend.

#[cfg(test)]
#[path = "quiz_builder_test.rs"]
mod quiz_builder_test;

use content::error::{FieldError, field_message};
use content::wizard::{LessonDetails, LessonKind, Question, QuizBuilder, QuizModal};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::layout::Shell;

pub fn points_label(points: u32) -> String {
    if points == 1 { "1 point".to_owned() } else { format!("{points} points") }
}

/// One-line summary for a saved question row.
pub fn question_summary(question: &Question) -> String {
    let answer = question.correct_answer().unwrap_or("?");
    format!("{} options, answer: {answer}, {}", question.options.len(), points_label(question.points))
}

#[component]
pub fn QuizBuilderPage() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let builder = RwSignal::new(QuizBuilder::new(LessonDetails::from_query(&location.search.get_untracked())));
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let field_error = move |field: &'static str| move || errors.with(|e| field_message(e, field)).unwrap_or_default();
    let details_href = move || builder.with(|b| b.details.href(LessonKind::Material));

    let on_save = move |_| {
        if let Some(result) = builder.try_update(QuizBuilder::save_question) {
            errors.set(result.err().unwrap_or_default());
        }
    };
    let on_finish = move |_| {
        if let Some(Err(e)) = builder.try_update(QuizBuilder::finish) {
            errors.set(vec![e]);
        }
    };
    let on_dismiss = move |_| {
        let finished = builder.with_untracked(|b| b.modal() == Some(QuizModal::QuizSaved));
        builder.update(QuizBuilder::dismiss_modal);
        if finished {
            navigate("/lessons", NavigateOptions::default());
        }
    };

    let option_rows = move || {
        let count = builder.with(|b| b.draft().options.len());
        (0..count)
            .map(|index| {
                view! {
                    <div class="quiz__option">
                        <input
                            type="radio"
                            name="correct"
                            prop:checked=move || builder.with(|b| b.draft().options.get(index).is_some_and(|o| o.correct))
                            on:change=move |_| builder.update(|b| b.set_correct(index))
                        />
                        <input
                            class="quiz__option-text"
                            placeholder=format!("Option {}", index + 1)
                            prop:value=move || {
                                builder.with(|b| b.draft().options.get(index).map(|o| o.text.clone()).unwrap_or_default())
                            }
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                builder.update(|b| {
                                    if let Some(option) = b.draft_mut().options.get_mut(index) {
                                        option.text = text;
                                    }
                                });
                            }
                        />
                        <button class="btn btn--ghost" type="button" on:click=move |_| builder.update(|b| b.remove_option(index))>
                            "Remove"
                        </button>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Shell title="Quiz Builder">
            <div class="quiz">
                <section class="quiz__details">
                    <h3>{move || builder.with(|b| b.details.title.clone())}</h3>
                    <p>
                        {move || {
                            builder.with(|b| format!("{} / {} / Grade {}", b.details.subject, b.details.topic, b.details.grade))
                        }}
                    </p>
                    <a class="btn btn--ghost" href=details_href>"Edit Details"</a>
                </section>

                <section class="quiz__form">
                    <h3>
                        {move || {
                            builder.with(|b| match b.editing() {
                                Some(i) => format!("Edit Question {}", i + 1),
                                None => "New Question".to_owned(),
                            })
                        }}
                    </h3>
                    <label class="form__field">
                        "Question"
                        <textarea
                            rows="3"
                            prop:value=move || builder.with(|b| b.draft().text.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                builder.update(|b| b.draft_mut().text = text);
                            }
                        ></textarea>
                        <span class="form__error">{field_error("question")}</span>
                    </label>
                    <div class="quiz__options">{option_rows}</div>
                    <span class="form__error">{field_error("options")}</span>
                    <span class="form__error">{field_error("correct")}</span>
                    <button class="btn" type="button" on:click=move |_| builder.update(QuizBuilder::add_option)>
                        "Add Option"
                    </button>
                    <label class="form__field form__field--inline">
                        "Points"
                        <input
                            type="number"
                            min="1"
                            prop:value=move || builder.with(|b| b.draft().points.to_string())
                            on:input=move |ev| {
                                let points = event_target_value(&ev).trim().parse().unwrap_or(0);
                                builder.update(|b| b.draft_mut().points = points);
                            }
                        />
                        <span class="form__error">{field_error("points")}</span>
                    </label>
                    <div class="wizard__nav">
                        <Show when=move || builder.with(|b| b.editing().is_some())>
                            <button class="btn btn--ghost" type="button" on:click=move |_| builder.update(QuizBuilder::cancel_edit)>
                                "Cancel Edit"
                            </button>
                        </Show>
                        <span class="wizard__spacer"></span>
                        <button class="btn btn--primary" type="button" on:click=on_save>
                            "Save Question"
                        </button>
                    </div>
                </section>

                <section class="quiz__questions">
                    <h3>
                        {move || {
                            builder.with(|b| format!("Questions ({}), {}", b.questions().len(), points_label(b.total_points())))
                        }}
                    </h3>
                    <ol>
                        {move || {
                            builder
                                .with(|b| b.questions().to_vec())
                                .into_iter()
                                .enumerate()
                                .map(|(index, question)| {
                                    let summary = question_summary(&question);
                                    view! {
                                        <li class="quiz__question">
                                            <strong>{question.text}</strong>
                                            <span>{summary}</span>
                                            <button
                                                class="btn btn--ghost"
                                                type="button"
                                                on:click=move |_| builder.update(|b| {
                                                    b.edit_question(index);
                                                })
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--ghost"
                                                type="button"
                                                on:click=move |_| builder.update(|b| {
                                                    b.remove_question(index);
                                                })
                                            >
                                                "Delete"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ol>
                    <span class="form__error">{field_error("questions")}</span>
                    <button class="btn btn--primary" type="button" on:click=on_finish>
                        "Finish Quiz"
                    </button>
                </section>
            </div>

            <Show when=move || builder.with(|b| b.modal().is_some())>
                <div class="dialog-backdrop">
                    <div class="dialog">
                        <p>
                            {move || match builder.with(QuizBuilder::modal) {
                                Some(QuizModal::QuizSaved) => "Quiz saved successfully.",
                                _ => "Question saved.",
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn btn--primary" type="button" on:click=on_dismiss.clone()>
                                "OK"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </Shell>
    }
}

//! Email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use content::ClientError;
use content::account::LoginForm;
use content::error::{FieldError, field_message};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";

/// Message for a failed login response.
pub fn login_failure_message(err: &ClientError) -> String {
    if let ClientError::Api(api) = err {
        if let Some(message) = api.field("non_field_errors") {
            return message.to_owned();
        }
        if matches!(api.status, 400 | 401) && api.field_errors.is_empty() {
            return INVALID_CREDENTIALS_MESSAGE.to_owned();
        }
    }
    err.user_message()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let failure = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_home = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.session.is_authenticated() {
            navigate_home("/", NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        failure.set(None);
        let request = match form.get_untracked().to_request() {
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
                match content::api::login(&transport, &request).await {
                    Ok(response) => match crate::state::session::provider().sign_in(&response) {
                        Ok(signed_in) => {
                            session.set(SessionState::loaded(signed_in));
                            navigate("/", NavigateOptions::default());
                        }
                        Err(e) => failure.set(Some(format!("Could not store the session: {e}"))),
                    },
                    Err(e) => {
                        log::warn!("login failed: {e}");
                        failure.set(Some(login_failure_message(&e)));
                    }
                }
                busy.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
        }
    };

    let field_error = move |field: &'static str| move || errors.with(|e| field_message(e, field)).unwrap_or_default();

    view! {
        <div class="login">
            <form class="login__card" on:submit=on_submit>
                <h1 class="login__title">"Content Validation"</h1>
                <p class="login__subtitle">"Sign in to review submissions."</p>
                <label class="login__field">
                    "Email"
                    <input
                        type="email"
                        autocomplete="username"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <span class="login__error">{field_error("email")}</span>
                </label>
                <label class="login__field">
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <span class="login__error">{field_error("password")}</span>
                </label>
                <Show when=move || failure.get().is_some()>
                    <p class="login__failure">{move || failure.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary login__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}

//! Change-password form under settings.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use content::ClientError;
use content::account::{ChangePasswordForm, MIN_PASSWORD_LEN};
use content::error::{FieldError, field_message};
use leptos::prelude::*;

use crate::components::layout::Shell;
#[cfg(feature = "hydrate")]
use crate::components::toast_host::notify;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastKind;
use crate::state::toast::ToastState;

pub const PASSWORD_CHANGED_MESSAGE: &str = "Password updated successfully.";

/// Form field errors from local validation, then from the server response.
pub fn merged_field_message(local: &[FieldError], server: Option<&ClientError>, field: &str) -> Option<String> {
    if let Some(message) = field_message(local, field) {
        return Some(message.to_owned());
    }
    match server {
        Some(ClientError::Api(api)) => api.field(field).map(str::to_owned),
        _ => None,
    }
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let form = RwSignal::new(ChangePasswordForm::default());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let server_error = RwSignal::new(None::<ClientError>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        server_error.set(None);
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
        leptos::task::spawn_local(async move {
            let transport = crate::net::transport::GlooTransport::default();
            let current = session.get_untracked().session;
            match content::api::change_password(&transport, &current, &request).await {
                Ok(()) => {
                    form.try_set(ChangePasswordForm::default());
                    notify(toasts, ToastKind::Success, PASSWORD_CHANGED_MESSAGE);
                }
                Err(e) => {
                    notify(toasts, ToastKind::Error, e.user_message());
                    server_error.try_set(Some(e));
                }
            }
            busy.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, session, toasts);
        }
    };

    let field_error = move |field: &'static str| {
        move || {
            let local = errors.get();
            server_error.with(|s| merged_field_message(&local, s.as_ref(), field)).unwrap_or_default()
        }
    };

    let password_input = move |label: &'static str, field: &'static str, autocomplete: &'static str| {
        let read = move || {
            form.with(|f| match field {
                "old_password" => f.old_password.clone(),
                "new_password" => f.new_password.clone(),
                _ => f.confirm_password.clone(),
            })
        };
        let write = move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| match field {
                "old_password" => f.old_password = value,
                "new_password" => f.new_password = value,
                _ => f.confirm_password = value,
            });
        };
        view! {
            <label class="form__field">
                {label}
                <input type="password" autocomplete=autocomplete prop:value=read on:input=write/>
                <span class="form__error">{field_error(field)}</span>
            </label>
        }
    };

    view! {
        <Shell title="Change Password">
            <form class="form form--narrow" on:submit=on_submit>
                {password_input("Current password", "old_password", "current-password")}
                {password_input("New password", "new_password", "new-password")}
                <p class="form__hint">{format!("At least {MIN_PASSWORD_LEN} characters.")}</p>
                {password_input("Confirm new password", "confirm_password", "new-password")}
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Saving..." } else { "Update Password" }}
                </button>
            </form>
        </Shell>
    }
}

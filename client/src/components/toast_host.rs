//! Toast stack and the helper pages use to raise toasts.

use leptos::prelude::*;

use crate::state::toast::{TOAST_TTL_MS, ToastKind, ToastState};

/// Queue a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    #[cfg(feature = "hydrate")]
    {
        if kind == ToastKind::Error {
            log::error!("{message}");
        }
    }
    let mut id = 0;
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, TOAST_TTL_MS);
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.kind.class() role="status">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

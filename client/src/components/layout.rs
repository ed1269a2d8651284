//! Authenticated shell: sidebar navigation, top bar, and the login redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route except `/login` renders inside [`Shell`]. It is the only place
//! that redirects an anonymous user; pages rendered outside it report the
//! missing token inline instead.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionState;
use crate::util::auth::{install_unauth_redirect, sign_out};

/// Sidebar entries as `(href, label)`.
pub const NAV_ITEMS: [(&str, &str); 7] = [
    ("/", "Dashboard"),
    ("/subjects", "Subjects"),
    ("/lessons", "Lessons"),
    ("/assessments", "Assessments"),
    ("/games", "Games"),
    ("/teachers", "Teachers"),
    ("/settings/password", "Change Password"),
];

/// Whether the nav entry `href` should be highlighted for `path`.
pub fn nav_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/";
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Shell(title: &'static str, children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    let location = use_location();

    install_unauth_redirect(session, navigate.clone());

    let on_logout = move |_| {
        sign_out(session);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="shell">
            <aside class="shell__sidebar">
                <div class="shell__brand">"Liberia eLearning"</div>
                <nav class="shell__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(href, label)| {
                            let href = *href;
                            view! {
                                <a
                                    class="shell__nav-link"
                                    class:shell__nav-link--active=move || nav_active(href, &location.pathname.get())
                                    href=href
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <div class="shell__main">
                <header class="shell__header">
                    <h1 class="shell__title">{title}</h1>
                    <span class="shell__spacer"></span>
                    <span class="shell__user">{move || session.get().display_name()}</span>
                    <button class="btn shell__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </header>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}

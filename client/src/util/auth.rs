//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only the shell layout redirects to `/login`. Pages that fetch data without
//! a token show the missing-token message instead of navigating.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, provider};

/// Redirect to `/login` whenever the session has loaded and holds no token.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if session.get().needs_login() {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Read the persisted session into context once the browser is running.
pub fn install_session_loader(session: RwSignal<SessionState>) {
    Effect::new(move || {
        if session.get_untracked().loading {
            session.set(SessionState::loaded(provider().load()));
        }
    });
}

/// Clear persisted keys and the context session.
pub fn sign_out(session: RwSignal<SessionState>) {
    if let Err(e) = provider().sign_out() {
        #[cfg(feature = "hydrate")]
        log::warn!("sign out: {e}");
        #[cfg(not(feature = "hydrate"))]
        let _ = e;
    }
    session.set(SessionState::loaded(content::Session::anonymous()));
}

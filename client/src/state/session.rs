//! Browser session state backed by `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server render never sees `localStorage`, so the session starts in a
//! `loading` state and is filled in by an effect after hydration. Route
//! guards wait for `loading == false` before redirecting.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use content::session::{SessionProvider, SessionStore, StoreError};
use content::Session;

/// `localStorage`-backed [`SessionStore`]. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StoreError("localStorage unavailable".to_owned()))?;
            storage.set_item(key, value).map_err(|e| StoreError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or_else(|| StoreError("localStorage unavailable".to_owned()))?;
            storage.remove_item(key).map_err(|e| StoreError(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(())
        }
    }
}

pub fn provider() -> SessionProvider<LocalStorageStore> {
    SessionProvider::new(LocalStorageStore)
}

/// Session context value.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub session: Session,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { session: Session::anonymous(), loading: true }
    }
}

impl SessionState {
    pub fn loaded(session: Session) -> Self {
        Self { session, loading: false }
    }

    /// Whether a route guard should send the user to `/login`.
    pub fn needs_login(&self) -> bool {
        !self.loading && !self.session.is_authenticated()
    }

    pub fn display_name(&self) -> String {
        self.session.user().map(content::types::SessionUser::display_name).unwrap_or_else(|| "Validator".to_owned())
    }
}

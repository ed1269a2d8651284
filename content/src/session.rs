//! Session provider: the single owner of the persisted token and user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser persists the session in `localStorage` under [`AUTH_TOKEN_KEY`]
//! and [`USER_KEY`]; the CLI persists the same two keys in a JSON file. Both go
//! through [`SessionStore`], and data-access calls receive the loaded
//! [`Session`] explicitly instead of reading storage themselves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::ClientError;
use crate::types::{LoginResponse, SessionUser};

pub const AUTH_TOKEN_KEY: &str = "auth_token";
pub const USER_KEY: &str = "user";

/// Scheme prefix of the `Authorization` header.
pub const AUTH_SCHEME: &str = "Bearer";

/// Snapshot of the signed-in identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    user: Option<SessionUser>,
}

impl Session {
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Blank tokens are treated as absent.
    #[must_use]
    pub fn new(token: Option<String>, user: Option<SessionUser>) -> Self {
        let token = token.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty());
        Self { token, user }
    }

    /// The token, or [`ClientError::MissingToken`] before any network call.
    pub fn token(&self) -> Result<&str, ClientError> {
        self.token.as_deref().ok_or(ClientError::MissingToken)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// `Authorization` header value.
    pub fn authorization(&self) -> Result<String, ClientError> {
        Ok(format!("{AUTH_SCHEME} {}", self.token()?))
    }
}

/// Failure to persist session keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("session storage failed: {0}")]
pub struct StoreError(pub String);

/// Key/value persistence backing a [`SessionProvider`].
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Reads and writes the session through a [`SessionStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionProvider<S> {
    store: S,
}

impl<S: SessionStore> SessionProvider<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted session. A corrupt `user` entry is ignored rather
    /// than invalidating the token.
    pub fn load(&self) -> Session {
        let token = self.store.get(AUTH_TOKEN_KEY);
        let user = self.store.get(USER_KEY).and_then(|raw| match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable stored user");
                None
            }
        });
        Session::new(token, user)
    }

    /// Persist a successful login and return the resulting session.
    pub fn sign_in(&self, login: &LoginResponse) -> Result<Session, StoreError> {
        self.store.set(AUTH_TOKEN_KEY, &login.token)?;
        match &login.user {
            Some(user) => {
                let raw = serde_json::to_string(user).map_err(|e| StoreError(e.to_string()))?;
                self.store.set(USER_KEY, &raw)?;
            }
            None => self.store.remove(USER_KEY)?,
        }
        Ok(Session::new(Some(login.token.clone()), login.user.clone()))
    }

    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.store.remove(AUTH_TOKEN_KEY)?;
        self.store.remove(USER_KEY)
    }
}

/// In-process store for tests and ephemeral CLI runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

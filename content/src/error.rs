//! Error taxonomy for data access and form validation.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here is fatal. Pages convert a [`ClientError`] into a toast or an
//! inline message via [`ClientError::user_message`]; the CLI prints it and
//! exits non-zero. No error is retried automatically.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;

use serde_json::Value;

/// Shown whenever a data fetch is attempted without a stored token.
pub const MISSING_TOKEN_MESSAGE: &str = "Missing authentication token. Please sign in again.";

/// Failure of a call into the content API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Raised before any network call when the session holds no token.
    #[error("Missing authentication token. Please sign in again.")]
    MissingToken,
    /// Non-2xx response from the backend.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Transport(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ClientError {
    /// HTTP status, when the backend answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// Whether the stored session should be treated as expired.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::MissingToken) || self.status() == Some(401)
    }

    /// Text suitable for a toast or inline form message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingToken => MISSING_TOKEN_MESSAGE.to_owned(),
            Self::Api(err) => err.message.clone(),
            Self::Transport(_) => "Unable to reach the server. Check your connection and try again.".to_owned(),
            Self::Decode(_) => "The server sent an unexpected response.".to_owned(),
        }
    }
}

/// A non-2xx backend response.
#[derive(Debug, Clone, PartialEq, Eq, Default, thiserror::Error)]
#[error("HTTP {status}: {message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    /// Field-level validation errors, e.g. `{"title": ["This field is required."]}`.
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ApiError {
    /// Shape an error from the raw response body.
    ///
    /// Recognizes `detail`, `message` and `error` string keys; any other JSON
    /// object of strings or string arrays becomes the field-error map.
    #[must_use]
    pub fn from_body(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let fallback = format!("HTTP {status}");

        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) else {
            let message = if trimmed.is_empty() || trimmed.starts_with('<') {
                fallback
            } else {
                trimmed.to_owned()
            };
            return Self { status, message, field_errors: BTreeMap::new() };
        };

        for key in ["detail", "message", "error"] {
            if let Some(Value::String(message)) = map.get(key) {
                return Self { status, message: message.clone(), field_errors: BTreeMap::new() };
            }
        }

        let mut field_errors = BTreeMap::new();
        for (field, value) in &map {
            let messages: Vec<String> = match value {
                Value::String(s) => vec![s.clone()],
                Value::Array(items) => items.iter().filter_map(Value::as_str).map(str::to_owned).collect(),
                _ => Vec::new(),
            };
            if !messages.is_empty() {
                field_errors.insert(field.clone(), messages);
            }
        }

        let message = field_errors
            .iter()
            .next()
            .and_then(|(field, messages)| messages.first().map(|m| format!("{field}: {m}")))
            .unwrap_or(fallback);
        Self { status, message, field_errors }
    }

    /// First message reported for `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).and_then(|m| m.first()).map(String::as_str)
    }
}

/// A client-side validation failure for a single form field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    #[must_use]
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// First message for `field` in a validation result.
#[must_use]
pub fn field_message(errors: &[FieldError], field: &str) -> Option<&'static str> {
    errors.iter().find(|e| e.field == field).map(|e| e.message)
}

//! Request/response model and the transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`Transport`] is implemented by `gloo-net` in the browser and by `reqwest`
//! in the CLI. Both only move bytes; status checking, content-type dispatch
//! and error shaping live in [`execute`] so JSON and multipart requests fail
//! the same way.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, ClientError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// One file field of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Multipart(MultipartForm),
}

/// A request relative to the configured API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: RequestBody,
}

impl ApiRequest {
    #[must_use]
    pub fn get(path: &str) -> Self {
        Self { method: Method::Get, path: path.to_owned(), headers: default_headers(), body: RequestBody::Empty }
    }

    #[must_use]
    pub fn post_json(path: &str, body: Value) -> Self {
        Self { method: Method::Post, path: path.to_owned(), headers: default_headers(), body: RequestBody::Json(body) }
    }

    #[must_use]
    pub fn post_multipart(path: &str, form: MultipartForm) -> Self {
        Self { method: Method::Post, path: path.to_owned(), headers: default_headers(), body: RequestBody::Multipart(form) }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Header value by case-insensitive name.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(k, _)| k.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }
}

fn default_headers() -> Vec<(String, String)> {
    vec![("Accept".to_owned(), "application/json".to_owned())]
}

/// Raw HTTP answer as seen by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("json"))
    }
}

/// Moves one request over the wire.
///
/// Futures are `?Send` because the browser transport runs on the
/// single-threaded wasm executor.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError>;
}

/// Join the API base URL and a request path without doubling slashes.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Interpret a successful body: JSON when the content type says so, raw
/// text otherwise, `null` when empty.
#[must_use]
pub fn parse_body(response: &RawResponse) -> Value {
    let body = response.body.trim();
    if body.is_empty() {
        return Value::Null;
    }
    if response.is_json() {
        return serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_owned()));
    }
    Value::String(body.to_owned())
}

/// Send `request` and return the parsed body of a 2xx response.
pub async fn execute<T: Transport + ?Sized>(transport: &T, request: ApiRequest) -> Result<Value, ClientError> {
    let method = request.method;
    let path = request.path.clone();
    tracing::debug!(method = method.as_str(), %path, "api request");

    let response = transport.send(request).await?;
    if !response.is_success() {
        let err = ApiError::from_body(response.status, &response.body);
        tracing::warn!(method = method.as_str(), %path, status = err.status, message = %err.message, "api request failed");
        return Err(ClientError::Api(err));
    }
    Ok(parse_body(&response))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> RawResponse {
        RawResponse { status, content_type: content_type.map(str::to_owned), body: body.to_owned() }
    }

    #[test]
    fn endpoint_url_joins_without_double_slash() {
        assert_eq!(endpoint_url("https://api.example/api/", "/content/games/"), "https://api.example/api/content/games/");
        assert_eq!(endpoint_url("http://h", "auth/content/"), "http://h/auth/content/");
    }

    #[test]
    fn json_content_type_is_parsed() {
        let value = parse_body(&response(200, Some("application/json; charset=utf-8"), r#"{"ok":true}"#));
        assert_eq!(value, serde_json::json!({ "ok": true }));
    }

    #[test]
    fn text_content_type_stays_text() {
        let value = parse_body(&response(200, Some("text/plain"), "[1,2]"));
        assert_eq!(value, Value::String("[1,2]".to_owned()));
    }

    #[test]
    fn empty_body_is_null() {
        assert_eq!(parse_body(&response(204, None, "")), Value::Null);
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = ApiRequest::get("/x").header("Authorization", "Bearer t");
        assert_eq!(req.header_value("authorization"), Some("Bearer t"));
        assert_eq!(req.header_value("accept"), Some("application/json"));
    }
}

//! `gloo-net` implementation of the content API transport.
//!
//! Client-side (hydrate): real HTTP calls via `fetch`.
//! Server-side (SSR): every request fails with a transport error, since the
//! API is only reachable with the browser's stored token.
//!
//! ERROR HANDLING
//! ==============
//! Only failures that prevent an HTTP response surface here, as
//! `ClientError::Transport`. Status checking and body shaping happen in
//! `content::transport::execute`, so JSON and multipart calls fail alike.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use content::error::ClientError;
use content::transport::{ApiRequest, RawResponse, Transport, endpoint_url};

/// Compile-time API base URL.
pub const API_BASE_URL: &str = match option_env!("ELEARN_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api",
};

/// Browser `fetch` transport.
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
}

impl Default for GlooTransport {
    fn default() -> Self {
        Self::new(API_BASE_URL)
    }
}

impl GlooTransport {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        endpoint_url(&self.base_url, &request.path)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        #[cfg(feature = "hydrate")]
        {
            send_fetch(&self.url_for(&request), request).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ClientError::Transport("not available on server".to_owned()))
        }
    }
}

/// A body that cannot be read means no usable response arrived.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn response_body<E: std::fmt::Display>(read: Result<String, E>) -> Result<String, ClientError> {
    read.map_err(|e| ClientError::Transport(format!("reading response body: {e}")))
}

#[cfg(feature = "hydrate")]
async fn send_fetch(url: &str, request: ApiRequest) -> Result<RawResponse, ClientError> {
    use content::transport::{Method, RequestBody};
    use gloo_net::http::Request;

    let transport_err = |e: gloo_net::Error| ClientError::Transport(e.to_string());

    let mut builder = match request.method {
        Method::Get => Request::get(url),
        Method::Post => Request::post(url),
    };
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }

    let built = match request.body {
        RequestBody::Empty => builder.build().map_err(transport_err)?,
        RequestBody::Json(value) => builder.json(&value).map_err(transport_err)?,
        RequestBody::Multipart(form) => {
            let data = multipart_form_data(&form)?;
            builder.body(data).map_err(transport_err)?
        }
    };

    let response = built.send().await.map_err(transport_err)?;
    let status = response.status();
    let content_type = response.headers().get("content-type");
    let body = response_body(response.text().await)?;
    if status >= 400 {
        log::warn!("api {url} -> {status}");
    }
    Ok(RawResponse { status, content_type, body })
}

#[cfg(feature = "hydrate")]
fn multipart_form_data(form: &content::transport::MultipartForm) -> Result<web_sys::FormData, ClientError> {
    let js_err = |e: wasm_bindgen::JsValue| ClientError::Transport(format!("{e:?}"));

    let data = web_sys::FormData::new().map_err(js_err)?;
    for (name, value) in &form.fields {
        data.append_with_str(name, value).map_err(js_err)?;
    }
    for file in &form.files {
        let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
        let parts = js_sys::Array::of1(&bytes);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(&file.content_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        data.append_with_blob_and_filename(&file.field, &blob, &file.file_name).map_err(js_err)?;
    }
    Ok(data)
}

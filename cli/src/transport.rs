//! `reqwest` implementation of the content transport.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use content::transport::{MultipartForm, endpoint_url};
use content::{ApiRequest, ClientError, Method, RawResponse, RequestBody, Transport};
use reqwest::header::CONTENT_TYPE;

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(base_url: &str) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

fn transport_error(error: reqwest::Error) -> ClientError {
    ClientError::Transport(error.to_string())
}

fn multipart_form(form: MultipartForm) -> Result<reqwest::multipart::Form, ClientError> {
    let mut out = reqwest::multipart::Form::new();
    for (name, value) in form.fields {
        out = out.text(name, value);
    }
    for file in form.files {
        let part = reqwest::multipart::Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(transport_error)?;
        out = out.part(file.field, part);
    }
    Ok(out)
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ClientError> {
        let url = endpoint_url(&self.base_url, &request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(multipart_form(form)?),
        };

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let content_type =
            response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()).map(str::to_owned);
        let body = response.text().await.map_err(transport_error)?;
        tracing::trace!(%url, status, "response received");
        Ok(RawResponse { status, content_type, body })
    }
}

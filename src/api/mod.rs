//! Collection API Client
//!
//! HTTP bindings to the remote collection service, organized by resource.
//! One attempt per call, no retries, no caching.

mod error;
mod records;
mod stats;

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::{Record, RecordInput, RecordPage, Stats};

pub use error::*;
pub use records::*;

// ========================
// Transport
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Response body, decoded according to its content type
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    Text(String),
}

impl Payload {
    /// Unparseable JSON bodies become `Json(Null)`
    pub fn parse(content_type: &str, text: String) -> Self {
        if content_type.contains("application/json") {
            Payload::Json(serde_json::from_str(&text).unwrap_or(Value::Null))
        } else {
            Payload::Text(text)
        }
    }

    pub fn into_json<T: DeserializeOwned>(self) -> ApiResult<T> {
        match self {
            Payload::Json(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
            Payload::Text(text) => Err(ApiError::Decode(format!("expected JSON, got text: {}", text))),
        }
    }
}

/// Issue one request against `base` and decode the body.
pub async fn api_fetch(base: &str, method: Method, path: &str, body: Option<String>) -> ApiResult<Payload> {
    let url = format!("{}{}", base, path);
    log::debug!("[API] {} {}", method.as_str(), path);

    let builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    }
    .header("Content-Type", "application/json");

    let response = match body {
        Some(body) => builder.body(body)?.send().await?,
        None => builder.send().await?,
    };

    let content_type = response.headers().get("content-type").unwrap_or_default();
    let text = response.text().await.unwrap_or_default();
    let payload = Payload::parse(&content_type, text);

    if !response.ok() {
        let status = response.status();
        let message = error_message(status, &payload);
        log::warn!("[API] {} {} failed: {} ({})", method.as_str(), path, message, status);
        return Err(ApiError::Http { status, message });
    }
    Ok(payload)
}

// ========================
// Service seam
// ========================

/// Operations the controller needs from the remote store
#[allow(async_fn_in_trait)]
pub trait RecordsApi {
    async fn list_records(&self, query: &ListQuery) -> ApiResult<RecordPage>;
    async fn create_record(&self, input: &RecordInput) -> ApiResult<Option<Record>>;
    async fn update_record(&self, id: &str, input: &RecordInput) -> ApiResult<()>;
    async fn delete_record(&self, id: &str) -> ApiResult<()>;
    async fn get_stats(&self) -> ApiResult<Stats>;
}

/// `RecordsApi` over `fetch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpApi {
    base: &'static str,
}

impl HttpApi {
    pub fn new(base: &'static str) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }
}

impl RecordsApi for HttpApi {
    async fn list_records(&self, query: &ListQuery) -> ApiResult<RecordPage> {
        records::list_records(self.base, query).await
    }

    async fn create_record(&self, input: &RecordInput) -> ApiResult<Option<Record>> {
        records::create_record(self.base, input).await
    }

    async fn update_record(&self, id: &str, input: &RecordInput) -> ApiResult<()> {
        records::update_record(self.base, id, input).await
    }

    async fn delete_record(&self, id: &str) -> ApiResult<()> {
        records::delete_record(self.base, id).await
    }

    async fn get_stats(&self) -> ApiResult<Stats> {
        stats::get_stats(self.base).await
    }
}

//! API Error Types

use thiserror::Error;

use super::Payload;

/// Failure of a call to the collection API
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status; `message` is what the user sees
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Message for a failed response: the server's `error` field when it sent
/// one, otherwise a generic line with the status code.
pub fn error_message(status: u16, body: &Payload) -> String {
    if let Payload::Json(value) = body {
        if let Some(msg) = value.get("error").and_then(|e| e.as_str()) {
            if !msg.is_empty() {
                return msg.to_string();
            }
        }
    }
    format!("Request failed ({})", status)
}

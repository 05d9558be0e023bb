#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes for calls against the HR backend.
///
/// Nothing here is retried: a failed call is reported once and the view
/// degrades to an empty or error state.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: server unreachable, request aborted.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status, with the server's message when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },
    /// Response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build an [`ApiError::Api`] from an error body, preferring the
    /// server's `message` field and falling back to `fallback` when the
    /// body carries none.
    pub fn from_body(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("message")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned)
            })
            .unwrap_or_else(|| fallback.to_owned());
        Self::Api { status, message }
    }
}

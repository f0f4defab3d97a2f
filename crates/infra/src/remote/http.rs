//! Shared helpers for the remote HTTP adapters

use serde::Deserialize;

/// Error body shapes the service emits across endpoints
#[derive(Debug, Deserialize, Default)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Pull the provider's own message out of an error response body, falling
/// back to the HTTP status when the body carries none. The message is
/// forwarded verbatim; callers wrap it in the right error variant.
pub(crate) fn provider_message(status: reqwest::StatusCode, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error_description
        .or(parsed.msg)
        .or(parsed.message)
        .or(parsed.error)
        .unwrap_or_else(|| format!("request failed with status {status}"))
}

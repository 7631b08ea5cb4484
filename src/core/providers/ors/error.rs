//! HTTP status classification for OpenRouteService responses.

use crate::core::types::errors::ProviderError;

/// Map a non-success HTTP response to the closed error taxonomy.
///
/// 429 is the only retryable outcome; 401 and 403 are fatal credential
/// failures. Anything else becomes a generic API error carrying the
/// provider's own message when the body contains one.
pub(crate) fn map_http_error(status: u16, body: &str, retry_after: Option<u64>) -> ProviderError {
    match status {
        429 => ProviderError::rate_limit("quota exceeded", retry_after),
        403 => ProviderError::access_denied(
            extract_message(body).unwrap_or_else(|| "access disallowed".to_string()),
        ),
        401 => ProviderError::authentication(
            extract_message(body).unwrap_or_else(|| "authentication failed".to_string()),
        ),
        status => ProviderError::api(
            status,
            extract_message(body).unwrap_or_else(|| format!("API error {status}")),
        ),
    }
}

/// Provider error payloads carry the message under `error.message` or
/// top-level `message`.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.get("message"))
        .or_else(|| value.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}

//! Shared helpers for unit tests.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Build an unsigned compact token carrying the given payload, shaped like
/// the backend's bearer tokens.
pub(crate) fn make_token(payload: serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

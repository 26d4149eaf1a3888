use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::session::errors::SessionError;
use crate::utils::base64url_decode;

/// Claims carried in the portal's bearer token payload.
///
/// The profile endpoint does not report which role a token is scoped to;
/// the `role` claim here is the authoritative source for the active role.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: i64,
}

impl Claims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.exp, 0)
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at() {
            Some(at) => at <= Utc::now(),
            None => true,
        }
    }
}

/// Decode the payload segment of a compact signed token without verifying
/// the signature. The client holds no key material; the backend validates
/// the token on every request it receives.
pub fn decode_claims(token: &str) -> Result<Claims, SessionError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(SessionError::InvalidToken(
            "Malformed bearer token".to_string(),
        ));
    }
    let payload = segments[1];

    let decoded = base64url_decode(payload)?;
    serde_json::from_slice(&decoded)
        .map_err(|e| SessionError::InvalidToken(format!("Failed to decode token claims: {e}")))
}

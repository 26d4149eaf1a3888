use std::time::Duration;

use crate::session::errors::SessionError;
use crate::session::types::{Role, TokenResponse, UserProfile};

/// Creates a configured HTTP client for portal API operations with the
/// following settings:
///
/// - `timeout`: Set to 30 seconds to prevent indefinite hanging of requests.
///   Session operations should complete quickly, and hanging requests could
///   block navigation.
///
/// - `pool_idle_timeout`: Set to default (90 seconds). This controls how long
///   an idle connection can stay in the connection pool before being removed.
///
/// - `pool_max_idle_per_host`: Set to 32 (default). All session traffic goes
///   to the single backend host, so a modest idle pool is plenty.
pub(super) fn get_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to create reqwest client")
}

/// `POST /login/access-token?role=<optional>` with form-encoded credentials.
///
/// The requested role is only a hint for initial role selection; the role
/// the issued token is actually scoped to is read from its claim later.
pub(super) async fn request_access_token(
    base: &str,
    username: &str,
    password: &str,
    requested_role: Option<Role>,
) -> Result<String, SessionError> {
    let client = get_client();
    let role = requested_role.map(|r| r.as_str()).unwrap_or("");
    let url = format!(
        "{base}/login/access-token?role={}",
        urlencoding::encode(role)
    );

    let response = client
        .post(&url)
        .form(&[("username", username), ("password", password)])
        .send()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Login rejected: {} {}", status, body);
        return Err(if status.is_client_error() {
            SessionError::InvalidCredentials(status.to_string())
        } else {
            SessionError::Network(status.to_string())
        });
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;
    let token: TokenResponse = serde_json::from_str(&response_body)
        .map_err(|e| SessionError::Serde(format!("Failed to deserialize token response: {e}")))?;

    Ok(token.access_token)
}

/// `GET /users/me` with bearer auth.
pub(super) async fn fetch_profile(base: &str, token: &str) -> Result<UserProfile, SessionError> {
    let client = get_client();
    let url = format!("{base}/users/me");

    let response = client
        .get(&url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Profile request failed: {} {}", status, body);
        return Err(if status.is_client_error() {
            SessionError::InvalidToken(status.to_string())
        } else {
            SessionError::Network(status.to_string())
        });
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;
    let profile: UserProfile = serde_json::from_str(&response_body)
        .map_err(|e| SessionError::Serde(format!("Failed to deserialize profile: {e}")))?;

    tracing::debug!("User profile: {:#?}", profile);
    Ok(profile)
}

/// `POST /login/switch-role?new_role=<role>` with bearer auth. Returns the
/// freshly minted token scoped to the requested role.
pub(super) async fn request_role_switch(
    base: &str,
    token: &str,
    new_role: Role,
) -> Result<String, SessionError> {
    let client = get_client();
    let url = format!(
        "{base}/login/switch-role?new_role={}",
        urlencoding::encode(new_role.as_str())
    );

    let response = client
        .post(&url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Role switch rejected: {} {}", status, body);
        return Err(if status.is_client_error() {
            SessionError::RoleSwitchRejected(status.to_string())
        } else {
            SessionError::Network(status.to_string())
        });
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| SessionError::Network(e.to_string()))?;
    let fresh: TokenResponse = serde_json::from_str(&response_body)
        .map_err(|e| SessionError::Serde(format!("Failed to deserialize token response: {e}")))?;

    Ok(fresh.access_token)
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::session::errors::SessionError;

/// Roles a portal user can hold. Purely a tag; the backend owns which
/// roles a given account is assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Administrator,
    Alumni,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Administrator => "administrator",
            Role::Alumni => "alumni",
        }
    }
}

impl FromStr for Role {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "administrator" => Ok(Role::Administrator),
            "alumni" => Ok(Role::Alumni),
            _ => Err(SessionError::UnknownRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One role assignment in the profile payload. Kept as a raw string so
/// identifiers outside the closed enumeration can be skipped instead of
/// failing the whole profile decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    pub role: String,
}

/// User profile as returned by `GET /users/me`.
///
/// The payload carries the static account data plus the full role
/// assignment list; it does not say which role the presented token is
/// scoped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub roles: Vec<RoleEntry>,
}

/// Token endpoint response shape shared by login and role switch.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub(crate) access_token: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) token_type: Option<String>,
}

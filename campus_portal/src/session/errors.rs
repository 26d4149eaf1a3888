use thiserror::Error;

use crate::storage::StorageError;
use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// Backend rejected the supplied credentials.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Backend refused to issue a token for the requested role.
    #[error("Role switch rejected: {0}")]
    RoleSwitchRejected(String),

    /// Bearer token is malformed, expired or no longer accepted.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// Role identifier outside the closed role enumeration.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Transport-level failure talking to the backend.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Serde error: {0}")]
    Serde(String),

    /// Error from token persistence
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Error from utils operations
    #[error("Utils error: {0}")]
    Utils(#[from] UtilError),
}

use async_trait::async_trait;

use crate::storage::errors::StorageError;

/// Durable single-slot storage for the raw bearer token.
///
/// The slot is last-write-wins and the session store is its only writer.
/// Absence of a token means logged out.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if any.
    async fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the token slot.
    async fn persist(&self, token: &str) -> Result<(), StorageError>;

    /// Erase the token slot. Must succeed when the slot is already empty.
    async fn clear(&self) -> Result<(), StorageError>;
}

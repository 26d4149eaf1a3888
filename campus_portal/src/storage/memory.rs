use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::storage::errors::StorageError;
use crate::storage::types::TokenStore;

/// In-memory token slot for ephemeral sessions and tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.lock().await.clone())
    }

    async fn persist(&self, token: &str) -> Result<(), StorageError> {
        *self.slot.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock().await = None;
        Ok(())
    }
}

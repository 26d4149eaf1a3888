use async_trait::async_trait;
use std::path::PathBuf;

use crate::config::PORTAL_TOKEN_FILE;
use crate::storage::errors::StorageError;
use crate::storage::types::TokenStore;

/// File-backed token slot. The file holds the raw bearer token string;
/// a missing file means logged out.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the store from the `PORTAL_TOKEN_FILE` environment variable.
    pub fn from_env() -> Self {
        Self::new(PORTAL_TOKEN_FILE.as_str())
    }
}

#[async_trait]
impl TokenStore for FileTokenStore {
    async fn load(&self) -> Result<Option<String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let token = raw.trim_end_matches('\n').to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn persist(&self, token: &str) -> Result<(), StorageError> {
        tokio::fs::write(&self.path, token)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        tracing::debug!("Persisted token to {}", self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_token_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("campus_portal_{}_{}", name, std::process::id()))
    }

    /// Test persist/load/clear roundtrip against a file on disk
    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let store = FileTokenStore::new(temp_token_path("roundtrip"));

        store.persist("bearer-token-xyz").await.unwrap();
        assert_eq!(
            store.load().await.unwrap(),
            Some("bearer-token-xyz".to_string())
        );

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    /// Test that a missing file reads as logged out
    #[tokio::test]
    async fn test_file_store_missing_file() {
        let store = FileTokenStore::new(temp_token_path("missing"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    /// Test that clearing a missing file succeeds
    #[tokio::test]
    async fn test_file_store_clear_missing() {
        let store = FileTokenStore::new(temp_token_path("clear_missing"));
        assert!(store.clear().await.is_ok());
    }

    /// Test that a trailing newline in the file is stripped on load
    #[tokio::test]
    async fn test_file_store_trailing_newline() {
        let path = temp_token_path("newline");
        tokio::fs::write(&path, "tok123\n").await.unwrap();

        let store = FileTokenStore::new(&path);
        assert_eq!(store.load().await.unwrap(), Some("tok123".to_string()));

        store.clear().await.unwrap();
    }
}

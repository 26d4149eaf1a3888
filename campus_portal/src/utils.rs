use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

pub(crate) fn base64url_decode(input: &str) -> Result<Vec<u8>, UtilError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|_| UtilError::Format("Failed to decode base64url".to_string()))?;
    Ok(decoded)
}

use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Invalid format: {0}")]
    Format(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that a base64url payload decodes back to its source bytes
    #[test]
    fn test_base64url_decode_roundtrip() {
        let encoded = URL_SAFE_NO_PAD.encode(b"campus-portal");
        let decoded = base64url_decode(&encoded).unwrap();
        assert_eq!(decoded, b"campus-portal");
    }

    /// Test that invalid base64url input yields a Format error
    #[test]
    fn test_base64url_decode_invalid() {
        let result = base64url_decode("not base64url!!!");
        assert!(result.is_err());
        match result {
            Err(UtilError::Format(_)) => {}
            other => panic!("Expected Format error, got {other:?}"),
        }
    }
}

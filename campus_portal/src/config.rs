//! Central configuration for the campus-portal crate

use std::sync::LazyLock;

/// Base URL of the portal backend API
///
/// All session endpoints (`/login/access-token`, `/users/me`,
/// `/login/switch-role`) are resolved relative to this.
/// Default: "http://localhost:8000/api/v1"
pub static PORTAL_API_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    std::env::var("PORTAL_API_BASE_URL")
        .unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string())
});

/// Path of the durable token slot used by `FileTokenStore::from_env`
///
/// Default: ".portal_token"
pub static PORTAL_TOKEN_FILE: LazyLock<String> = LazyLock::new(|| {
    std::env::var("PORTAL_TOKEN_FILE").unwrap_or_else(|_| ".portal_token".to_string())
});

/// Directory CSV exports are written into
///
/// Default: "." (current working directory)
pub static PORTAL_DOWNLOAD_DIR: LazyLock<String> =
    LazyLock::new(|| std::env::var("PORTAL_DOWNLOAD_DIR").unwrap_or_else(|_| ".".to_string()));

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use std::env;

    /// Test the API base URL default
    ///
    /// We can't re-initialize the LazyLock once it has been read, so the
    /// tests exercise the same env-var logic the statics use.
    #[test]
    #[serial]
    fn test_api_base_url_default() {
        let original_value = env::var("PORTAL_API_BASE_URL").ok();

        unsafe {
            env::remove_var("PORTAL_API_BASE_URL");
        }

        let url = env::var("PORTAL_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string());
        assert_eq!(url, "http://localhost:8000/api/v1");

        if let Some(value) = original_value {
            unsafe {
                env::set_var("PORTAL_API_BASE_URL", value);
            }
        }
    }

    /// Test that a custom API base URL overrides the default
    #[test]
    #[serial]
    fn test_api_base_url_custom() {
        let original_value = env::var("PORTAL_API_BASE_URL").ok();

        unsafe {
            env::set_var("PORTAL_API_BASE_URL", "https://portal.example.edu/api/v1");
        }

        let url = env::var("PORTAL_API_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api/v1".to_string());
        assert_eq!(url, "https://portal.example.edu/api/v1");

        unsafe {
            if let Some(value) = original_value {
                env::set_var("PORTAL_API_BASE_URL", value);
            } else {
                env::remove_var("PORTAL_API_BASE_URL");
            }
        }
    }

    /// Test the token file default
    #[test]
    #[serial]
    fn test_token_file_default() {
        let original_value = env::var("PORTAL_TOKEN_FILE").ok();

        unsafe {
            env::remove_var("PORTAL_TOKEN_FILE");
        }

        let path = env::var("PORTAL_TOKEN_FILE").unwrap_or_else(|_| ".portal_token".to_string());
        assert_eq!(path, ".portal_token");

        if let Some(value) = original_value {
            unsafe {
                env::set_var("PORTAL_TOKEN_FILE", value);
            }
        }
    }
}

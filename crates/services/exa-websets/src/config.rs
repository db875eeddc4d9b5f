use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Default Exa API base URL
pub const EXA_DEFAULT_BASE: &str = "https://api.exa.ai";
/// Header name for API key authentication
pub const HDR_X_API_KEY: &str = "x-api-key";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "EXA_API_KEY";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "EXA_BASE_URL";

/// Configuration for the WebSets client
///
/// Debug output automatically redacts `api_key` via [`SecretString`].
#[derive(Clone, Debug)]
pub struct ExaConfig {
    api_base: String,
    api_key: Option<SecretString>,
}

/// Reads an environment variable, trimming it and treating blank values as unset.
fn env_trimmed(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Default for ExaConfig {
    fn default() -> Self {
        Self {
            api_base: env_trimmed(ENV_BASE_URL).unwrap_or_else(|| EXA_DEFAULT_BASE.into()),
            api_key: env_trimmed(ENV_API_KEY).map(SecretString::from),
        }
    }
}

impl ExaConfig {
    /// Creates a new configuration with default settings
    ///
    /// Attempts to read from environment variables:
    /// - `EXA_API_KEY` for API key authentication
    /// - `EXA_BASE_URL` for custom API base URL (defaults to `https://api.exa.ai`)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Sets the API key
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Drops any configured API key
    #[must_use]
    pub fn without_api_key(mut self) -> Self {
        self.api_key = None;
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Returns the trimmed API key when one is configured and non-blank.
    fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|s| s.expose_secret().trim())
            .filter(|k| !k.is_empty())
    }
}

/// Configuration trait for the WebSets client
///
/// Implement this trait to provide custom authentication and API configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::ExaError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in requests
    fn query(&self) -> Vec<(&str, &str)>;

    /// Validates that authentication credentials are present.
    ///
    /// # Errors
    ///
    /// Returns an error if authentication is not properly configured.
    fn validate_auth(&self) -> Result<(), crate::error::ExaError>;
}

impl Config for ExaConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::ExaError> {
        use crate::error::ExaError;

        let mut h = HeaderMap::new();
        if let Some(key) = self.usable_key() {
            h.insert(
                HDR_X_API_KEY,
                HeaderValue::from_str(key)
                    .map_err(|_| ExaError::Config("Invalid x-api-key value".into()))?,
            );
        }
        Ok(h)
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }

    fn validate_auth(&self) -> Result<(), crate::error::ExaError> {
        if self.usable_key().is_some() {
            return Ok(());
        }
        Err(crate::error::ExaError::Config(format!(
            "Missing Exa credentials: set {ENV_API_KEY} environment variable"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::EnvGuard;
    use serial_test::serial;

    #[test]
    #[serial(env)]
    fn config_reads_env_vars() {
        let _key = EnvGuard::set(ENV_API_KEY, "test-key-123");
        let _base = EnvGuard::set(ENV_BASE_URL, "https://custom.exa.ai");

        let cfg = ExaConfig::new();
        assert_eq!(cfg.api_base(), "https://custom.exa.ai");

        let h = cfg.headers().unwrap();
        assert_eq!(
            h.get(HDR_X_API_KEY).unwrap().to_str().unwrap(),
            "test-key-123"
        );
    }

    #[test]
    #[serial(env)]
    fn config_defaults_base_url() {
        let _key = EnvGuard::set(ENV_API_KEY, "k");
        let _base = EnvGuard::remove(ENV_BASE_URL);

        assert_eq!(ExaConfig::new().api_base(), EXA_DEFAULT_BASE);
    }

    #[test]
    #[serial(env)]
    fn missing_key_fails_validation_and_sends_no_header() {
        let _key = EnvGuard::remove(ENV_API_KEY);

        let cfg = ExaConfig::new();
        let err = cfg.validate_auth().unwrap_err();
        assert!(err.to_string().contains(ENV_API_KEY));
        assert!(cfg.headers().unwrap().get(HDR_X_API_KEY).is_none());
    }

    #[test]
    #[serial(env)]
    fn blank_env_key_is_treated_as_unset() {
        let _key = EnvGuard::set(ENV_API_KEY, "   ");
        let _base = EnvGuard::remove(ENV_BASE_URL);

        assert!(ExaConfig::new().validate_auth().is_err());
    }

    #[test]
    #[serial(env)]
    fn padded_env_key_is_trimmed() {
        let _key = EnvGuard::set(ENV_API_KEY, "  trimmed-key  \n");

        let cfg = ExaConfig::new();
        assert!(cfg.validate_auth().is_ok());
        let h = cfg.headers().unwrap();
        assert_eq!(
            h.get(HDR_X_API_KEY).unwrap().to_str().unwrap(),
            "trimmed-key"
        );
    }

    #[test]
    fn builder_overrides_and_clears_key() {
        let cfg = ExaConfig::new()
            .with_api_base("https://test.exa.ai/")
            .with_api_key("my-key");
        assert!(cfg.validate_auth().is_ok());
        assert_eq!(
            cfg.url("/websets/v0/websets/"),
            "https://test.exa.ai/websets/v0/websets/"
        );

        let cfg = cfg.without_api_key();
        assert!(cfg.validate_auth().is_err());
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let cfg = ExaConfig::new().with_api_key("super-secret-key-12345");
        let debug_str = format!("{cfg:?}");

        assert!(!debug_str.contains("super-secret-key-12345"));
        assert!(
            debug_str.contains("[REDACTED]"),
            "Debug output should contain '[REDACTED]', got: {debug_str}"
        );
    }
}

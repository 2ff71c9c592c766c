//! Connection configuration
//!
//! One `ConnectionConfig` describes a single logical connection to the
//! LaunchDarkly API. It can be loaded from YAML or JSON; every field has a
//! default so an empty file (or no file at all) is valid and the access
//! token is then taken from the environment.

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Environment variable consulted when no token is configured
pub const ACCESS_TOKEN_ENV: &str = "LAUNCHDARKLY_ACCESS_TOKEN";

/// Default API host
pub const DEFAULT_BASE_URL: &str = "https://app.launchdarkly.com";

// ============================================================================
// Connection Config
// ============================================================================

/// Configuration for one logical connection
#[derive(Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// API access token. Falls back to `LAUNCHDARKLY_ACCESS_TOKEN` when unset.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Prefix placed before the token in the Authorization header
    #[serde(default)]
    pub auth_prefix: Option<String>,

    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            auth_prefix: None,
            base_url: default_base_url(),
            http: HttpSettings::default(),
        }
    }
}

// The token must never reach the logs.
impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "<redacted>"),
            )
            .field("auth_prefix", &self.auth_prefix)
            .field("base_url", &self.base_url)
            .field("http", &self.http)
            .finish()
    }
}

impl ConnectionConfig {
    /// Create a config with an explicit token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Override the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override HTTP settings
    #[must_use]
    pub fn http(mut self, http: HttpSettings) -> Self {
        self.http = http;
        self
    }

    /// Load a config file (YAML by extension, JSON otherwise)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {e}",
                    path.display()
                ))
            }
        })?;

        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client settings for a connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of retries for throttled requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Backoff strategy between retries
    #[serde(default)]
    pub backoff: BackoffType,

    /// Initial backoff delay in milliseconds
    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    /// Maximum backoff delay in milliseconds
    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Client-side request rate. `0` disables the limiter.
    #[serde(default = "default_rps")]
    pub requests_per_second: u32,

    /// Token bucket burst size
    #[serde(default = "default_rps")]
    pub burst_size: u32,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffType::default(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            requests_per_second: default_rps(),
            burst_size: default_rps(),
        }
    }
}

impl HttpSettings {
    /// Build the HTTP client configuration for a base URL
    pub fn client_config(&self, base_url: &str) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(base_url)
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff,
                Duration::from_millis(self.initial_backoff_ms),
                Duration::from_millis(self.max_backoff_ms),
            );

        builder = if self.requests_per_second == 0 {
            builder.no_rate_limit()
        } else {
            builder.rate_limit(RateLimiterConfig::new(
                self.requests_per_second,
                self.burst_size.max(1),
            ))
        };

        builder.build()
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    5
}

fn default_initial_backoff_ms() -> u64 {
    500
}

fn default_max_backoff_ms() -> u64 {
    30_000
}

fn default_rps() -> u32 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ConnectionConfig::default();
        assert!(config.access_token.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.http.max_retries, 5);
        assert_eq!(config.http.requests_per_second, 10);
    }

    #[test]
    fn test_from_yaml() {
        let config = ConnectionConfig::from_yaml(
            r"
access_token: api-123
base_url: http://localhost:9000
http:
  max_retries: 2
  backoff: constant
  requests_per_second: 0
",
        )
        .unwrap();

        assert_eq!(config.access_token.as_deref(), Some("api-123"));
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.http.max_retries, 2);
        assert_eq!(config.http.backoff, BackoffType::Constant);
        assert_eq!(config.http.timeout_secs, 30);

        let client = config.http.client_config(&config.base_url);
        assert!(client.rate_limit.is_none());
        assert_eq!(client.max_retries, 2);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ConnectionConfig::from_yaml("  \n").unwrap();
        assert!(config.access_token.is_none());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"access_token": "api-json"}}"#).unwrap();

        let config = ConnectionConfig::load(file.path()).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("api-json"));
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "access_token: api-yaml").unwrap();

        let config = ConnectionConfig::load(file.path()).unwrap();
        assert_eq!(config.access_token.as_deref(), Some("api-yaml"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ConnectionConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ConnectionConfig::with_token("api-secret-token");
        let debug = format!("{config:?}");
        assert!(!debug.contains("api-secret-token"));
        assert!(debug.contains("<redacted>"));
    }
}

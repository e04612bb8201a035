//! Client configuration
//!
//! Endpoint URLs and credentials. Every URL has a production default and can
//! be overridden from the environment or through the builder, which is how
//! tests point the client at a mock server.

use crate::error::{Error, Result};
use std::time::Duration;

/// Default API root
pub const DEFAULT_API_URL: &str = "https://api.skalin.io/v1";

/// Default OAuth2 token endpoint
pub const DEFAULT_AUTH_URL: &str = "https://auth.skalin.io/oauth/token";

/// Default tracking endpoint
pub const DEFAULT_HIT_URL: &str = "https://collect.skalin.io/hit";

/// Audience requested during the client-credentials exchange
pub const DEFAULT_AUDIENCE: &str = "https://api.skalin.io/";

/// Environment variable overriding the API root
pub const ENV_API_URL: &str = "SKALIN_API_URL";
/// Environment variable overriding the token endpoint
pub const ENV_AUTH_URL: &str = "SKALIN_AUTH_URL";
/// Environment variable overriding the tracking endpoint
pub const ENV_HIT_URL: &str = "SKALIN_HIT_URL";

/// Environment variable holding the application client id
pub const ENV_APP_CLIENT_ID: &str = "SKALIN_APP_CLIENT_ID";
/// Environment variable holding the API client id
pub const ENV_CLIENT_API_ID: &str = "SKALIN_CLIENT_API_ID";
/// Environment variable holding the API secret
pub const ENV_CLIENT_API_SECRET: &str = "SKALIN_CLIENT_API_SECRET";

/// Endpoint configuration for a [`crate::SkalinClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, resource paths are appended to it
    pub api_url: String,
    /// Token endpoint
    pub auth_url: String,
    /// Tracking endpoint
    pub hit_url: String,
    /// Audience sent with the token request
    pub audience: String,
    /// Request timeout, `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            hit_url: DEFAULT_HIT_URL.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Defaults, with URL overrides taken from the environment
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(ENV_API_URL) {
            config.api_url = url;
        }
        if let Some(url) = non_empty_env(ENV_AUTH_URL) {
            config.auth_url = url;
        }
        if let Some(url) = non_empty_env(ENV_HIT_URL) {
            config.hit_url = url;
        }
        config
    }

    /// Build a full URL from a resource path
    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API root
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the token endpoint
    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.config.auth_url = url.into();
        self
    }

    /// Set the tracking endpoint
    pub fn hit_url(mut self, url: impl Into<String>) -> Self {
        self.config.hit_url = url.into();
        self
    }

    /// Set the token audience
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.config.audience = audience.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

/// The three secrets needed to open a session.
///
/// `app_client_id` identifies the Skalin application and is sent as the
/// `clientId` query parameter on every call; the API pair is only used for
/// the token exchange.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub app_client_id: String,
    pub api_client_id: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(
        app_client_id: impl Into<String>,
        api_client_id: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            app_client_id: app_client_id.into(),
            api_client_id: api_client_id.into(),
            api_secret: api_secret.into(),
        }
    }

    /// Read credentials from `SKALIN_APP_CLIENT_ID`, `SKALIN_CLIENT_API_ID`
    /// and `SKALIN_CLIENT_API_SECRET`
    pub fn from_env() -> Result<Self> {
        let require = |name: &str| non_empty_env(name).ok_or_else(|| Error::missing_field(name));
        Ok(Self {
            app_client_id: require(ENV_APP_CLIENT_ID)?,
            api_client_id: require(ENV_CLIENT_API_ID)?,
            api_secret: require(ENV_CLIENT_API_SECRET)?,
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_client_id", &self.app_client_id)
            .field("api_client_id", &self.api_client_id)
            .field("api_secret", &"***")
            .finish()
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "https://api.skalin.io/v1");
        assert_eq!(config.auth_url, "https://auth.skalin.io/oauth/token");
        assert_eq!(config.hit_url, "https://collect.skalin.io/hit");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ClientConfig::builder()
            .api_url("http://localhost:8080/v1/")
            .auth_url("http://localhost:8080/oauth/token")
            .hit_url("http://localhost:8080/hit")
            .audience("test")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.auth_url, "http://localhost:8080/oauth/token");
        assert_eq!(config.audience, "test");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(
            config.build_url("/customers"),
            "http://localhost:8080/v1/customers"
        );
    }

    #[test]
    fn test_build_url_default() {
        let config = ClientConfig::default();
        assert_eq!(
            config.build_url("/agreements/42"),
            "https://api.skalin.io/v1/agreements/42"
        );
    }

    #[test]
    fn test_credentials_debug_hides_secret() {
        let creds = Credentials::new("app", "api", "s3cr3t");
        let debug = format!("{creds:?}");
        assert!(debug.contains("app"));
        assert!(!debug.contains("s3cr3t"));
    }
}

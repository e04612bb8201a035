//! Authenticator implementation
//!
//! Performs the client-credentials exchange against the token endpoint.

use super::types::{Session, TokenRequest, CLIENT_CREDENTIALS_GRANT};
use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};
use crate::http::{HttpTransport, RequestConfig};
use serde_json::Value;
use tracing::info;

/// Field of the token response holding the bearer token
const ACCESS_TOKEN_FIELD: &str = "access_token";

/// Obtains a [`Session`] from [`Credentials`]
#[derive(Debug, Clone)]
pub struct Authenticator {
    /// Transport without token or client id
    transport: HttpTransport,
    /// Token endpoint
    auth_url: String,
    /// Audience requested for the token
    audience: String,
}

impl Authenticator {
    /// Create an authenticator for the endpoints in `config`
    pub fn new(transport: HttpTransport, config: &ClientConfig) -> Self {
        Self {
            transport,
            auth_url: config.auth_url.clone(),
            audience: config.audience.clone(),
        }
    }

    /// Exchange the credentials for a bearer token.
    ///
    /// Fails with [`Error::Auth`] when the call fails, when the response is
    /// not JSON, or when it carries no string `access_token`.
    pub async fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        let request = TokenRequest {
            client_id: &credentials.api_client_id,
            client_secret: &credentials.api_secret,
            grant_type: CLIENT_CREDENTIALS_GRANT,
            audience: &self.audience,
        };
        let body = serde_json::to_vec(&request)?;

        let response = self
            .transport
            .post(&self.auth_url, RequestConfig::json().json_body(body))
            .await
            .map_err(|e| Error::auth(format!("token request failed: {e}")))?;

        let token = extract_access_token(&response)?;
        info!(client_id = %credentials.app_client_id, "skalin session opened");

        Ok(Session::new(credentials.app_client_id.clone(), token))
    }
}

/// Pull the bearer token out of a token endpoint response
fn extract_access_token(body: &[u8]) -> Result<String> {
    let json: Value = serde_json::from_slice(body)
        .map_err(|e| Error::auth(format!("invalid token response: {e}")))?;

    match json.get(ACCESS_TOKEN_FIELD) {
        Some(Value::String(token)) => Ok(token.clone()),
        Some(_) => Err(Error::auth("access_token is not a string")),
        None => Err(Error::auth("access_token missing from token response")),
    }
}

#[cfg(test)]
mod extract_tests {
    use super::*;

    #[test]
    fn test_extract_access_token() {
        let token = extract_access_token(br#"{"access_token":"abc","expires_in":86400}"#).unwrap();
        assert_eq!(token, "abc");
    }

    #[test]
    fn test_extract_access_token_failures() {
        assert!(matches!(
            extract_access_token(b"not json"),
            Err(Error::Auth { .. })
        ));
        assert!(matches!(
            extract_access_token(br#"{"token_type":"Bearer"}"#),
            Err(Error::Auth { .. })
        ));
        assert!(matches!(
            extract_access_token(br#"{"access_token":42}"#),
            Err(Error::Auth { .. })
        ));
    }
}

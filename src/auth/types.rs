//! Auth types

use crate::http::HttpTransport;
use serde::Serialize;

/// Grant type used for the token exchange
pub const CLIENT_CREDENTIALS_GRANT: &str = "client_credentials";

/// JSON body of the token request
#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub grant_type: &'a str,
    pub audience: &'a str,
}

/// An authenticated session: the bearer token plus the application client id
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    client_id: String,
    token: String,
}

impl Session {
    /// Create a session from an already obtained token
    pub fn new(client_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            token: token.into(),
        }
    }

    /// Application client id sent as `clientId` on every call
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Bearer token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Bind a transport to this session
    pub fn apply(&self, transport: HttpTransport) -> HttpTransport {
        transport
            .with_token(self.token.clone())
            .with_client_id(self.client_id.clone())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client_id", &self.client_id)
            .field("token", &"***")
            .finish()
    }
}

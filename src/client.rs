//! Skalin API client
//!
//! [`SkalinClient`] authenticates once at construction and then shares the
//! resulting session across every call. Resource-specific operations live in
//! [`crate::resources`]; this module holds the generic pipeline they share:
//! encode, send, decode, paginate.

use crate::auth::{Authenticator, Session};
use crate::codec::{CustomerScoped, Entity};
use crate::config::{ClientConfig, Credentials};
use crate::decode::{decode_entity, decode_page};
use crate::error::{Error, Result};
use crate::http::{HttpTransport, RequestConfig};
use crate::pagination::{collect_pages, GetParams};
use crate::tracking::Tracker;
use tracing::{info, Span};

/// Authenticated client for the Skalin API.
///
/// Cheap to clone; clones share the same session.
#[derive(Debug, Clone)]
pub struct SkalinClient {
    transport: HttpTransport,
    config: ClientConfig,
    session: Session,
}

impl SkalinClient {
    /// Authenticate with the default endpoints
    pub async fn new(credentials: &Credentials) -> Result<Self> {
        Self::builder().build(credentials).await
    }

    /// Authenticate with credentials and endpoint overrides from the environment
    pub async fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Self::builder()
            .config(ClientConfig::from_env())
            .build(&credentials)
            .await
    }

    /// Create a client builder
    pub fn builder() -> SkalinClientBuilder {
        SkalinClientBuilder::default()
    }

    /// Build a client around an existing session, without authenticating
    pub fn with_session(session: Session, config: ClientConfig) -> Result<Self> {
        let transport = session.apply(HttpTransport::with_timeout(config.timeout)?);
        Ok(Self {
            transport,
            config,
            session,
        })
    }

    /// The authenticated session
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The endpoint configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The session-bound transport, for calls this crate does not wrap
    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// A tracker sharing this client's session
    pub fn tracker(&self) -> Tracker {
        Tracker::new(self.transport.clone(), self.config.hit_url.clone())
    }

    // ========================================================================
    // Shared pipeline
    // ========================================================================

    /// Vendor id of `entity`, or a precondition error
    pub(crate) fn require_id<'a, T: Entity>(&self, entity: &'a T) -> Result<&'a str> {
        entity
            .id()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::precondition(format!("{} id is empty", T::KIND)))
    }

    /// POST `entity` to `path` and decode the entity sent back
    pub(crate) async fn save<T: Entity>(&self, path: &str, entity: &T) -> Result<T> {
        let url = self.config.build_url(path);
        let body = serde_json::to_vec(entity)?;
        let config = RequestConfig::json().json_body(body);
        let response = self.transport.post(&url, config).await?;
        decode_entity(path, &response)
    }

    /// PATCH `entity` to `path`; the response only carries a status
    pub(crate) async fn update<T: Entity>(&self, path: &str, entity: &T) -> Result<()> {
        let url = self.config.build_url(path);
        let body = serde_json::to_vec(entity)?;
        let config = RequestConfig::json().json_body(body);
        self.transport.patch(&url, config).await?;
        Ok(())
    }

    /// DELETE `path`; the response body is not read
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        self.transport
            .delete(&self.config.build_url(path), RequestConfig::new())
            .await?;
        info!(path, "skalin entity deleted");
        Ok(())
    }

    /// GET a single entity
    pub(crate) async fn get_one<T: Entity>(&self, path: &str) -> Result<T> {
        let response = self
            .transport
            .get(&self.config.build_url(path), RequestConfig::json())
            .await?;
        decode_entity(path, &response)
    }

    /// GET every page of a listing
    pub(crate) async fn get_all<T: Entity>(
        &self,
        path: &str,
        params: Option<GetParams>,
    ) -> Result<Vec<T>> {
        let url = self.config.build_url(path);
        let query = params.map(|p| p.to_query()).unwrap_or_default();

        collect_pages(query, |query| {
            let url = url.clone();
            async move {
                let response = self
                    .transport
                    .get(&url, RequestConfig::json().with_query(query))
                    .await?;
                decode_page::<T>(path, &response)
            }
        })
        .await
    }

    /// POST `entity` under a customer-scoped path.
    ///
    /// The customer's vendor id is implied by the path and stripped from the
    /// body; the refId form of the link is sent unchanged.
    pub(crate) async fn create_for_customer<T: CustomerScoped>(
        &self,
        path: &str,
        entity: &T,
    ) -> Result<T> {
        let mut body = entity.clone();
        body.clear_customer_id();
        self.save(path, &body).await
    }
}

/// Builder for [`SkalinClient`]
#[derive(Debug, Default)]
pub struct SkalinClientBuilder {
    config: ClientConfig,
    span: Option<Span>,
    http_client: Option<reqwest::Client>,
}

impl SkalinClientBuilder {
    /// Set the endpoint configuration
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Run every request inside `span` instead of the default `skalin` span
    #[must_use]
    pub fn span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Use a preconfigured reqwest client; the config timeout is then ignored
    #[must_use]
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Authenticate and build the client
    pub async fn build(self, credentials: &Credentials) -> Result<SkalinClient> {
        let mut transport = match self.http_client {
            Some(client) => HttpTransport::with_client(client),
            None => HttpTransport::with_timeout(self.config.timeout)?,
        };
        if let Some(span) = self.span {
            transport = transport.with_span(span);
        }

        let session = Authenticator::new(transport.clone(), &self.config)
            .authenticate(credentials)
            .await?;

        Ok(SkalinClient {
            transport: session.apply(transport),
            config: self.config,
            session,
        })
    }
}

//! HTTP transport
//!
//! One request per call, no retries. Handles:
//! - Bearer token, `clientId` query parameter and the fixed locale header
//! - Structured logging of every call and every failure
//! - Classification of unexpected status codes into vendor errors

use crate::error::{Error, Result};
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE,
};
use reqwest::{Client, Method, StatusCode};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{error, info, Instrument, Span};
use url::Url;

/// Content type of every JSON request
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Content type of tracking hits
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Locale sent with every request
const ACCEPT_LANGUAGE_VALUE: &str = "fr";

/// Query parameter carrying the application client id
const CLIENT_ID_PARAM: &str = "clientId";

/// Request payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Pre-encoded JSON document
    Json(Vec<u8>),
    /// Key/value pairs sent URL-encoded
    Form(Vec<(String, String)>),
}

impl Body {
    fn into_bytes(self) -> Vec<u8> {
        match self {
            Body::Json(bytes) => bytes,
            Body::Form(pairs) => url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(pairs)
                .finish()
                .into_bytes(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Body::Json(bytes) => String::from_utf8_lossy(bytes).into_owned(),
            Body::Form(pairs) => pairs
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&"),
        }
    }
}

/// Configuration for a single request
#[derive(Debug, Clone)]
pub struct RequestConfig {
    /// Content-Type header, omitted when `None`
    pub content_type: Option<String>,
    /// Extra headers, appended in order (a name may repeat)
    pub headers: Vec<(String, String)>,
    /// Query parameters, encoded in key order
    pub query: BTreeMap<String, String>,
    /// Request body
    pub body: Option<Body>,
    /// Status the caller treats as success
    pub expected_status: StatusCode,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            content_type: None,
            headers: Vec::new(),
            query: BTreeMap::new(),
            body: None,
            expected_status: StatusCode::OK,
        }
    }
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// A config with `Content-Type: application/json`
    pub fn json() -> Self {
        Self::new().content_type(JSON_CONTENT_TYPE)
    }

    /// Set the content type
    #[must_use]
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Replace all query parameters
    #[must_use]
    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = query;
        self
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Set a pre-encoded JSON body
    #[must_use]
    pub fn json_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(Body::Json(body));
        self
    }

    /// Set a URL-encoded form body
    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = Some(Body::Form(pairs));
        self
    }

    /// Set the expected status
    #[must_use]
    pub fn expect(mut self, status: StatusCode) -> Self {
        self.expected_status = status;
        self
    }
}

/// Single-attempt HTTP transport bound to one session
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    token: Option<String>,
    client_id: Option<String>,
    span: Span,
}

impl HttpTransport {
    /// Create a transport with a default HTTP client and no credentials
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a transport whose client uses the given timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(format!("skalin-sdk/{}", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?))
    }

    /// Wrap an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            token: None,
            client_id: None,
            span: crate::logging::default_span(),
        }
    }

    /// Attach a bearer token
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Attach the application client id sent as `clientId`
    #[must_use]
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Run every request inside this span
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// The application client id, if set
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Whether a bearer token is attached
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Make a GET request
    pub async fn get(&self, url: &str, config: RequestConfig) -> Result<Vec<u8>> {
        self.send(Method::GET, url, config).await
    }

    /// Make a POST request
    pub async fn post(&self, url: &str, config: RequestConfig) -> Result<Vec<u8>> {
        self.send(Method::POST, url, config).await
    }

    /// Make a PATCH request
    pub async fn patch(&self, url: &str, config: RequestConfig) -> Result<Vec<u8>> {
        self.send(Method::PATCH, url, config).await
    }

    /// Make a PUT request
    pub async fn put(&self, url: &str, config: RequestConfig) -> Result<Vec<u8>> {
        self.send(Method::PUT, url, config).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, url: &str, config: RequestConfig) -> Result<Vec<u8>> {
        self.send(Method::DELETE, url, config).await
    }

    /// Send one request and return the raw response body.
    ///
    /// Fails when the request cannot be sent or when the response status
    /// differs from `config.expected_status`.
    pub async fn send(&self, method: Method, url: &str, config: RequestConfig) -> Result<Vec<u8>> {
        self.dispatch(method, url, config)
            .instrument(self.span.clone())
            .await
    }

    async fn dispatch(&self, method: Method, url: &str, config: RequestConfig) -> Result<Vec<u8>> {
        let expected = config.expected_status;
        let content_type = config.content_type.clone().unwrap_or_default();

        let mut query = config.query;
        if let Some(client_id) = &self.client_id {
            query.insert(CLIENT_ID_PARAM.to_string(), client_id.clone());
        }
        let params = encode_query(&query);

        info!(
            method = %method,
            url,
            content_type = %content_type,
            expected_status = expected.as_u16(),
            params = %params,
            "call skalin API"
        );

        let full_url = build_url(url, &query)?;
        let headers = self.build_headers(config.content_type.as_deref(), &config.headers)?;
        let request_body = config.body.as_ref().map(Body::describe);

        let mut req = self
            .client
            .request(method.clone(), full_url)
            .headers(headers);
        if let Some(body) = config.body {
            req = req.body(body.into_bytes());
        }

        let response = match req.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(
                    method = %method,
                    url,
                    content_type = %content_type,
                    expected_status = expected.as_u16(),
                    error = %e,
                    "error to call skalin API"
                );
                return Err(Error::Http(e));
            }
        };

        let status = response.status();
        let bytes = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(e) => {
                error!(
                    method = %method,
                    url,
                    response_status = status.as_u16(),
                    error = %e,
                    "error to read response from skalin API"
                );
                return Err(Error::Http(e));
            }
        };

        if status != expected {
            let err = classify_failure(status, expected, &bytes);
            error!(
                method = %method,
                url,
                content_type = %content_type,
                expected_status = expected.as_u16(),
                body = request_body.as_deref().unwrap_or_default(),
                response_body = %String::from_utf8_lossy(&bytes),
                response_status = status.as_u16(),
                error = %err,
                "error to read response from skalin API"
            );
            return Err(err);
        }

        Ok(bytes)
    }

    fn build_headers(
        &self,
        content_type: Option<&str>,
        extra: &[(String, String)],
    ) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        for (key, value) in extra {
            let invalid = |message: String| Error::validation(key.as_str(), message);
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| invalid(format!("invalid header name: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| invalid(format!("invalid header value: {e}")))?;
            headers.append(name, value);
        }

        if let Some(content_type) = content_type.filter(|c| !c.is_empty()) {
            let value = HeaderValue::from_str(content_type)
                .map_err(|e| Error::validation("Content-Type", e.to_string()))?;
            headers.insert(CONTENT_TYPE, value);
        }

        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| Error::auth("access token contains invalid header characters"))?;
            headers.insert(AUTHORIZATION, value);
        }

        let locale = HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE);
        headers.insert(ACCEPT_LANGUAGE, locale);

        Ok(headers)
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("client_id", &self.client_id)
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}

/// Error envelope the API sends with failing statuses
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    #[allow(dead_code)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<i64>,
}

/// Turn an unexpected response into the most specific error available
pub(crate) fn classify_failure(status: StatusCode, expected: StatusCode, body: &[u8]) -> Error {
    if body.is_empty() {
        return Error::Undefined {
            status: status.as_u16(),
        };
    }

    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.message.filter(|m| !m.is_empty()) {
            Some(message) => Error::vendor(status.as_u16(), message),
            None => Error::StatusMismatch {
                expected: expected.as_u16(),
                actual: status.as_u16(),
                code: envelope.code.unwrap_or_default(),
            },
        },
        Err(e) => {
            info!(error = %e, "error to unmarshal skalin response error");
            Error::vendor(status.as_u16(), String::from_utf8_lossy(body))
        }
    }
}

/// Encode query parameters in key order
pub(crate) fn encode_query(query: &BTreeMap<String, String>) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(query)
        .finish()
}

fn build_url(url: &str, query: &BTreeMap<String, String>) -> Result<Url> {
    let mut url = Url::parse(url)?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
}

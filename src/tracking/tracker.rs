//! Hit sender

use super::types::{HitAction, HitTrack};
use super::validate::validate;
use crate::error::{Error, Result, ResultExt};
use crate::http::{HttpTransport, RequestConfig, FORM_CONTENT_TYPE};
use chrono::Local;
use tracing::debug;

/// Format of `localtime`
const LOCAL_TIME_FORMAT: &str = "%H:%M:%S";

/// Format of `ts`, always UTC
const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sends [`HitTrack`]s to the collector
#[derive(Debug, Clone)]
pub struct Tracker {
    transport: HttpTransport,
    hit_url: String,
}

impl Tracker {
    /// Create a tracker; the transport must carry the application client id
    pub fn new(transport: HttpTransport, hit_url: impl Into<String>) -> Self {
        Self {
            transport,
            hit_url: hit_url.into(),
        }
    }

    /// Create a tracker that needs no API session
    pub fn standalone(client_id: impl Into<String>, hit_url: impl Into<String>) -> Result<Self> {
        let transport = HttpTransport::new()?.with_client_id(client_id);
        Ok(Self::new(transport, hit_url))
    }

    /// Validate and send a hit
    pub async fn hit(&self, hit: &HitTrack) -> Result<()> {
        validate(hit)?;

        let client_id = self
            .transport
            .client_id()
            .ok_or_else(|| Error::validation("client_id", "is not set"))?;

        let form = build_form(hit, client_id)?;
        debug!(
            action = hit.action.as_str(),
            fields = form.len(),
            "sending hit"
        );

        let mut config = RequestConfig::new()
            .content_type(FORM_CONTENT_TYPE)
            .form(form);
        for (key, value) in &hit.custom_headers {
            config = config.header(key, value);
        }

        self.transport.post(&self.hit_url, config).await?;
        Ok(())
    }
}

/// Form fields of a hit, in wire order
pub(crate) fn build_form(hit: &HitTrack, client_id: &str) -> Result<Vec<(String, String)>> {
    let mut form = vec![
        ("rec".to_string(), "1".to_string()),
        ("action".to_string(), hit.action.as_str().to_string()),
        ("visitor_id".to_string(), hit.visitor_id.clone()),
        ("visit_id".to_string(), hit.visit_id.clone()),
        ("client_id".to_string(), client_id.to_string()),
    ];

    let identity = serde_json::to_string(&hit.identity).context("encode hit identity")?;
    form.push(("identity".to_string(), identity));

    if let Some(event) = &hit.event {
        let event = serde_json::to_string(event).context("encode hit event")?;
        form.push(("event".to_string(), event));
    }
    if let Some(customer_id) = &hit.customer_id {
        form.push(("customer_id".to_string(), customer_id.clone()));
    }
    if let Some(event_id) = &hit.event_id {
        form.push(("event_id".to_string(), event_id.clone()));
    }
    if let Some(ts) = &hit.ts {
        let local = ts.with_timezone(&Local).format(LOCAL_TIME_FORMAT);
        form.push(("localtime".to_string(), local.to_string()));
    }
    if let Some(url) = &hit.url {
        form.push(("url".to_string(), url.clone()));
        if let (HitAction::Event, Some(ts)) = (hit.action, &hit.ts) {
            form.push(("ts".to_string(), ts.format(TS_FORMAT).to_string()));
        }
    }

    Ok(form)
}

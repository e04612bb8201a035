//! Hit types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Length of visitor, visit and event ids
pub const ID_LENGTH: usize = 16;

/// Kind of hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitAction {
    /// Associate the visitor with a user identity
    #[default]
    Identity,
    /// Record an event
    Event,
}

impl HitAction {
    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            HitAction::Identity => "ui",
            HitAction::Event => "ev",
        }
    }
}

/// Who the visitor is; at least one of `id` and `email` is required
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HitIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl HitIdentity {
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            email: None,
        }
    }

    pub fn email(email: impl Into<String>) -> Self {
        Self {
            id: None,
            email: Some(email.into()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HitEvent {
    pub name: String,
    pub event_name: String,
}

impl HitEvent {
    pub fn new(name: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event_name: event_name.into(),
        }
    }
}

/// A tracking hit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitTrack {
    pub action: HitAction,
    /// 16 characters
    pub visitor_id: String,
    /// 16 characters
    pub visit_id: String,
    pub identity: HitIdentity,
    /// Required for [`HitAction::Event`]
    pub event: Option<HitEvent>,
    /// 16 characters when set
    pub event_id: Option<String>,
    pub customer_id: Option<String>,
    /// When the hit happened
    pub ts: Option<DateTime<Utc>>,
    /// Page the hit happened on
    pub url: Option<String>,
    /// Extra headers sent with the hit
    pub custom_headers: Vec<(String, String)>,
}

impl HitTrack {
    /// An identity hit
    pub fn identity(
        visitor_id: impl Into<String>,
        visit_id: impl Into<String>,
        identity: HitIdentity,
    ) -> Self {
        Self {
            action: HitAction::Identity,
            visitor_id: visitor_id.into(),
            visit_id: visit_id.into(),
            identity,
            ..Default::default()
        }
    }

    /// An event hit
    pub fn event(
        visitor_id: impl Into<String>,
        visit_id: impl Into<String>,
        identity: HitIdentity,
        event: HitEvent,
    ) -> Self {
        Self {
            action: HitAction::Event,
            visitor_id: visitor_id.into(),
            visit_id: visit_id.into(),
            identity,
            event: Some(event),
            ..Default::default()
        }
    }
}

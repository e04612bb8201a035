//! Hit validation rules

use super::types::{HitAction, HitTrack, ID_LENGTH};
use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Loose address check: something@domain.tld, no whitespace
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Check a hit before it is sent. Reports the first failing field.
pub fn validate(hit: &HitTrack) -> Result<()> {
    check_id("visitor_id", &hit.visitor_id)?;
    check_id("visit_id", &hit.visit_id)?;

    let id = hit.identity.id.as_deref().filter(|s| !s.is_empty());
    let email = hit.identity.email.as_deref().filter(|s| !s.is_empty());
    if id.is_none() && email.is_none() {
        return Err(Error::validation("identity", "id or email is required"));
    }
    if let Some(email) = email {
        if !EMAIL_REGEX.is_match(email) {
            return Err(Error::validation("identity.email", "not a valid email address"));
        }
    }

    match &hit.event {
        Some(event) => {
            if event.name.is_empty() {
                return Err(Error::validation("event.name", "is required"));
            }
            if event.event_name.is_empty() {
                return Err(Error::validation("event.event_name", "is required"));
            }
        }
        None if hit.action == HitAction::Event => {
            return Err(Error::validation("event", "is required for event hits"));
        }
        None => {}
    }

    if let Some(event_id) = hit.event_id.as_deref().filter(|s| !s.is_empty()) {
        check_id("event_id", event_id)?;
    }

    Ok(())
}

fn check_id(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::validation(field, "is required"));
    }
    if value.chars().count() != ID_LENGTH {
        return Err(Error::validation(
            field,
            format!("must be {ID_LENGTH} characters"),
        ));
    }
    Ok(())
}

//! Envelope decoding

use super::types::{Envelope, Page};
use crate::error::{Error, Result};
use serde::de::DeserializeOwned;

/// Decode a single-entity response
pub fn decode_entity<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<T> {
    let envelope = parse::<T>(path, body)?;
    envelope
        .data
        .ok_or_else(|| Error::decode(format!("response for [{path}] has no data")))
}

/// Decode one page of a listing response.
///
/// A missing `data` field decodes as an empty page.
pub fn decode_page<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<Page<T>> {
    let envelope = parse::<Vec<T>>(path, body)?;
    Ok(Page {
        items: envelope.data.unwrap_or_default(),
        pagination: envelope.metadata.unwrap_or_default().pagination,
    })
}

fn parse<T: DeserializeOwned>(path: &str, body: &[u8]) -> Result<Envelope<T>> {
    let envelope: Envelope<T> = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            let message = format!("error to unmarshal entity for [{path}] response: {e}");
            return Err(Error::decode(message));
        }
    };

    if envelope.is_error() {
        let message = envelope
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "undefined error".to_string());
        return Err(Error::vendor(200, message));
    }

    Ok(envelope)
}

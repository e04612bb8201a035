//! Response envelope decoder module
//!
//! Every API response is wrapped as `{status, data, metadata}`. This module
//! unwraps it into a single entity or a page of entities, and turns an
//! envelope whose status reports a failure into a vendor error.

mod envelope;
mod types;

pub use envelope::{decode_entity, decode_page};
pub use types::{Envelope, Page, PaginationMetadata, ResponseMetadata};

#[cfg(test)]
mod tests;

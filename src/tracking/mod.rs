//! Tracking module
//!
//! Sends page-view style hits to the Skalin collector: identity hits tie a
//! visitor to a known user, event hits record a named action. Hits are
//! validated locally before anything is sent.

mod tracker;
mod types;
mod validate;

pub use tracker::Tracker;
pub use types::{HitAction, HitEvent, HitIdentity, HitTrack, ID_LENGTH};
pub use validate::validate;

#[cfg(test)]
mod tests;

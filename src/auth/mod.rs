//! Authentication module
//!
//! Exchanges the API client id and secret for a bearer token once, through
//! the OAuth2 client-credentials grant. The resulting [`Session`] is never
//! refreshed: it lives as long as the client built from it.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{Session, TokenRequest};

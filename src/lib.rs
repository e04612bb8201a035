// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]

//! # Skalin SDK
//!
//! A typed async client for the Skalin customer success REST API.
//!
//! ## Features
//!
//! - **OAuth2 client credentials**: one token exchange when the client is built
//! - **Typed resources**: customers, contacts, agreements and tags
//! - **Custom attributes**: flattened into customer and contact objects
//! - **Transparent pagination**: listings follow every page
//! - **Tracking hits**: identity and event hits for the collector
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use skalin_sdk::{Credentials, Customer, GetParams, Result, SkalinClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     skalin_sdk::logging::init();
//!
//!     let credentials = Credentials::new("app-client-id", "api-client-id", "api-secret");
//!     let client = SkalinClient::new(&credentials).await?;
//!
//!     let customer = Customer {
//!         ref_id: Some("acme".into()),
//!         name: Some("Acme".into()),
//!         ..Default::default()
//!     };
//!     let saved = client.save_customer(&customer).await?;
//!
//!     let leads = client
//!         .get_customers(Some(GetParams::new().filter("stage", "lead")))
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          SkalinClient                           │
//! │  customers   contacts   agreements   tags        tracker()      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │   Auth   │   HTTP    │   Paginate    │  Decode   │   Codec     │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ OAuth2   │ Bearer    │ page/size     │ Envelope  │ Attributes  │
//! │ client   │ clientId  │ filters       │ Vendor    │ Dates       │
//! │ creds    │ Logging   │ latest total  │ errors    │             │
//! └──────────┴───────────┴───────────────┴───────────┴─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Endpoints and credentials
pub mod config;

/// Tracing span and subscriber setup
pub mod logging;

/// OAuth2 client credentials exchange
pub mod auth;

/// HTTP transport with session headers
pub mod http;

/// Entity wire rules: custom attributes and dates
pub mod codec;

/// Response envelope decoding
pub mod decode;

/// Listing parameters and page following
pub mod pagination;

/// Customers, contacts, agreements and tags
pub mod resources;

/// The authenticated client
pub mod client;

/// Tracking hits
pub mod tracking;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{SkalinClient, SkalinClientBuilder};
pub use codec::{CalendarDate, CustomAttributes};
pub use config::{ClientConfig, Credentials};
pub use error::{Error, Result};
pub use pagination::GetParams;
pub use resources::{Agreement, Contact, Customer, Tag};
pub use tracking::{HitAction, HitEvent, HitIdentity, HitTrack, Tracker};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

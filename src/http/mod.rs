//! HTTP transport module
//!
//! Sends one request per call and classifies failures. No retry, no rate
//! limiting: every call is a single round trip.
//!
//! # Features
//!
//! - **Session headers**: bearer token, `clientId` query, `Accept-Language: fr`
//! - **Structured logging**: one info line per call, one error line per failure
//! - **Vendor errors**: the API's `{status, message, code}` error envelope is
//!   surfaced as the error message

mod client;

pub use client::{Body, HttpTransport, RequestConfig, FORM_CONTENT_TYPE, JSON_CONTENT_TYPE};

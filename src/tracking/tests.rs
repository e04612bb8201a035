//! Tests for the tracking module

use super::tracker::build_form;
use super::*;
use crate::error::Error;
use crate::http::HttpTransport;
use chrono::{Local, TimeZone, Utc};
use test_case::test_case;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VISITOR: &str = "1234567890123456";
const VISIT: &str = "abcdefghijklmnop";

fn event_hit() -> HitTrack {
    HitTrack::event(
        VISITOR,
        VISIT,
        HitIdentity::id("user-1"),
        HitEvent::new("signup", "Signed up"),
    )
}

fn field<'a>(form: &'a [(String, String)], name: &str) -> Option<&'a str> {
    form.iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_valid_hits() {
    assert!(validate(&event_hit()).is_ok());
    let identity_hit = HitTrack::identity(VISITOR, VISIT, HitIdentity::email("a@b.io"));
    assert!(validate(&identity_hit).is_ok());
}

fn clear_visitor_id(hit: &mut HitTrack) {
    hit.visitor_id = String::new();
}

fn short_visitor_id(hit: &mut HitTrack) {
    hit.visitor_id = "short".into();
}

fn long_visit_id(hit: &mut HitTrack) {
    hit.visit_id = "12345678901234567".into();
}

fn clear_identity(hit: &mut HitTrack) {
    hit.identity = HitIdentity::default();
}

fn bad_email(hit: &mut HitTrack) {
    hit.identity = HitIdentity::email("not-an-email");
}

fn clear_event(hit: &mut HitTrack) {
    hit.event = None;
}

fn unnamed_event(hit: &mut HitTrack) {
    hit.event = Some(HitEvent::new("", "x"));
}

fn event_without_event_name(hit: &mut HitTrack) {
    hit.event = Some(HitEvent::new("x", ""));
}

fn short_event_id(hit: &mut HitTrack) {
    hit.event_id = Some("abc".into());
}

#[test_case(clear_visitor_id, "visitor_id" ; "missing visitor id")]
#[test_case(short_visitor_id, "visitor_id" ; "short visitor id")]
#[test_case(long_visit_id, "visit_id" ; "long visit id")]
#[test_case(clear_identity, "identity" ; "missing identity")]
#[test_case(bad_email, "identity.email" ; "bad email")]
#[test_case(clear_event, "event" ; "event hit without event")]
#[test_case(unnamed_event, "event.name" ; "event without name")]
#[test_case(event_without_event_name, "event.event_name" ; "event without event name")]
#[test_case(short_event_id, "event_id" ; "short event id")]
fn test_invalid_hits(mutate: fn(&mut HitTrack), expected_field: &str) {
    let mut hit = event_hit();
    mutate(&mut hit);

    match validate(&hit) {
        Err(Error::Validation { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("Expected validation error on {expected_field}, got {other:?}"),
    }
}

#[test]
fn test_identity_hit_needs_no_event() {
    let hit = HitTrack::identity(VISITOR, VISIT, HitIdentity::id("user-1"));
    assert!(validate(&hit).is_ok());
}

// ============================================================================
// Form encoding
// ============================================================================

#[test]
fn test_build_form_minimal() {
    let hit = HitTrack::identity(VISITOR, VISIT, HitIdentity::id("user-1"));
    let form = build_form(&hit, "app-1").unwrap();

    assert_eq!(field(&form, "rec"), Some("1"));
    assert_eq!(field(&form, "action"), Some("ui"));
    assert_eq!(field(&form, "visitor_id"), Some(VISITOR));
    assert_eq!(field(&form, "visit_id"), Some(VISIT));
    assert_eq!(field(&form, "client_id"), Some("app-1"));
    assert_eq!(field(&form, "identity"), Some(r#"{"id":"user-1"}"#));
    assert_eq!(field(&form, "event"), None);
    assert_eq!(field(&form, "localtime"), None);
    assert_eq!(field(&form, "ts"), None);
}

#[test]
fn test_build_form_full_event() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();
    let mut hit = event_hit();
    hit.event_id = Some("evt0000000000001".into());
    hit.customer_id = Some("cust-9".into());
    hit.ts = Some(ts);
    hit.url = Some("https://app.example.com/home".into());

    let form = build_form(&hit, "app-1").unwrap();

    assert_eq!(field(&form, "action"), Some("ev"));
    assert_eq!(
        field(&form, "event"),
        Some(r#"{"name":"signup","event_name":"Signed up"}"#)
    );
    assert_eq!(field(&form, "event_id"), Some("evt0000000000001"));
    assert_eq!(field(&form, "customer_id"), Some("cust-9"));
    assert_eq!(field(&form, "url"), Some("https://app.example.com/home"));
    assert_eq!(field(&form, "ts"), Some("2024-03-05T14:07:09"));

    let expected_local = ts.with_timezone(&Local).format("%H:%M:%S").to_string();
    assert_eq!(field(&form, "localtime"), Some(expected_local.as_str()));
}

#[test]
fn test_build_form_ts_needs_url_and_event() {
    let ts = Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap();

    let mut no_url = event_hit();
    no_url.ts = Some(ts);
    assert_eq!(field(&build_form(&no_url, "app").unwrap(), "ts"), None);

    let mut identity = HitTrack::identity(VISITOR, VISIT, HitIdentity::id("u"));
    identity.ts = Some(ts);
    identity.url = Some("https://example.com".into());
    let form = build_form(&identity, "app").unwrap();
    assert_eq!(field(&form, "ts"), None);
    assert!(field(&form, "localtime").is_some());
}

// ============================================================================
// Sending
// ============================================================================

#[tokio::test]
async fn test_hit_posts_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hit"))
        .and(header("Content-Type", "application/x-www-form-urlencoded"))
        .and(header("X-Forwarded-For", "10.0.0.1"))
        .and(body_string_contains("rec=1"))
        .and(body_string_contains("action=ev"))
        .and(body_string_contains("client_id=app-1"))
        .and(body_string_contains(format!("visitor_id={VISITOR}")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let tracker = Tracker::standalone("app-1", format!("{}/hit", mock_server.uri())).unwrap();
    let mut hit = event_hit();
    hit.custom_headers = vec![("X-Forwarded-For".into(), "10.0.0.1".into())];

    tracker.hit(&hit).await.unwrap();
}

#[tokio::test]
async fn test_hit_invalid_is_not_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let tracker = Tracker::standalone("app-1", format!("{}/hit", mock_server.uri())).unwrap();
    let mut hit = event_hit();
    hit.visitor_id = "too-short".into();

    let err = tracker.hit(&hit).await.unwrap_err();
    assert!(err.is_local());
}

#[tokio::test]
async fn test_hit_requires_client_id() {
    let tracker = Tracker::new(HttpTransport::new().unwrap(), "http://127.0.0.1:9/hit");

    let err = tracker.hit(&event_hit()).await.unwrap_err();
    match err {
        Error::Validation { field, .. } => assert_eq!(field, "client_id"),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_hit_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/hit"))
        .respond_with(ResponseTemplate::new(400).set_body_string(r#"{"message":"bad hit"}"#))
        .mount(&mock_server)
        .await;

    let tracker = Tracker::standalone("app-1", format!("{}/hit", mock_server.uri())).unwrap();
    let err = tracker.hit(&event_hit()).await.unwrap_err();

    assert_eq!(err.to_string(), "bad hit");
}

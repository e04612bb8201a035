//! Tests for the entity codec

use super::*;
use crate::error::Error;
use crate::resources::{Agreement, Contact, Customer, Tag};
use pretty_assertions::assert_eq;
use serde_json::json;

fn attributes(value: serde_json::Value) -> CustomAttributes {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("Expected object, got {other}"),
    }
}

// ============================================================================
// Custom attributes
// ============================================================================

#[test]
fn test_customer_attributes_are_flattened() {
    let customer = Customer {
        ref_id: Some("acme".into()),
        name: Some("Acme".into()),
        custom_attributes: attributes(json!({"plan": "gold", "seats": 12})),
        ..Default::default()
    };

    let encoded = serde_json::to_value(&customer).unwrap();
    assert_eq!(
        encoded,
        json!({"refId": "acme", "name": "Acme", "plan": "gold", "seats": 12})
    );
}

#[test]
fn test_contact_attributes_are_flattened() {
    let contact = Contact {
        email: Some("jane@acme.io".into()),
        customer: Some("acme".into()),
        custom_attributes: attributes(json!({"role": "admin"})),
        ..Default::default()
    };

    let encoded = serde_json::to_value(&contact).unwrap();
    assert_eq!(
        encoded,
        json!({"customer": "acme", "email": "jane@acme.io", "role": "admin"})
    );
}

#[test]
fn test_declared_field_wins_over_attribute() {
    let customer = Customer {
        name: Some("Acme".into()),
        custom_attributes: attributes(json!({"name": "Shadow", "stage": "lead", "tier": 2})),
        ..Default::default()
    };

    let encoded = serde_json::to_value(&customer).unwrap();
    // `stage` is declared but unset; the attribute is still dropped
    assert_eq!(encoded, json!({"name": "Acme", "tier": 2}));
}

#[test]
fn test_decode_ignores_unknown_keys() {
    let body = json!({
        "id": "c1",
        "refId": "acme",
        "tags": ["vip"],
        "lastActivityTs": "2024-01-02T03:04:05Z",
        "plan": "gold"
    });

    let customer: Customer = serde_json::from_value(body).unwrap();
    assert_eq!(customer.id.as_deref(), Some("c1"));
    assert_eq!(customer.tags, vec!["vip".to_string()]);
    assert!(customer.last_activity_ts.is_some());
    assert!(customer.custom_attributes.is_empty());
}

#[test]
fn test_null_fields_decode_as_empty() {
    let customer: Customer = serde_json::from_value(json!({"id": "c1", "tags": null})).unwrap();
    assert_eq!(customer.id.as_deref(), Some("c1"));
    assert!(customer.tags.is_empty());

    let contact: Contact =
        serde_json::from_value(json!({"id": "ct1", "tags": null, "email": null})).unwrap();
    assert!(contact.tags.is_empty());
    assert!(contact.email.is_none());

    let tag: Tag = serde_json::from_value(json!({
        "id": "t1",
        "name": "VIP",
        "type": null,
        "entity": null,
        "color": null
    }))
    .unwrap();
    assert_eq!(
        tag,
        Tag {
            id: "t1".into(),
            name: "VIP".into(),
            ..Default::default()
        }
    );
}

#[test]
fn test_empty_entity_encodes_to_empty_object() {
    let contact = serde_json::to_value(Contact::default()).unwrap();
    let agreement = serde_json::to_value(Agreement::default()).unwrap();

    assert_eq!(contact, json!({}));
    assert_eq!(agreement, json!({}));
}

// ============================================================================
// Calendar dates
// ============================================================================

#[test]
fn test_calendar_date_parse() {
    let date = CalendarDate::parse("2020-01-01").unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2020, 1, 1));
    assert_eq!(date.to_string(), "2020-01-01");
}

#[test]
fn test_calendar_date_from_rfc3339() {
    let date: CalendarDate = "2020-01-01T10:00:00Z".parse().unwrap();
    assert_eq!(date, CalendarDate::from_ymd(2020, 1, 1).unwrap());

    // The date is read in the timestamp's own offset
    let date = CalendarDate::parse("2020-01-01T23:30:00-05:00").unwrap();
    assert_eq!(date.to_string(), "2020-01-01");
}

#[test]
fn test_calendar_date_invalid() {
    for value in ["", "yesterday", "2020-13-01", "01/02/2020"] {
        match CalendarDate::parse(value) {
            Err(Error::DateParse { value: v }) => assert_eq!(v, value),
            other => panic!("Expected DateParse for {value:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_calendar_date_from_ymd_rejects_missing_day() {
    assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
    assert!(CalendarDate::from_ymd(2024, 2, 29).is_some());
}

#[test]
fn test_agreement_dates_on_the_wire() {
    let agreement = Agreement {
        customer_id: Some("c1".into()),
        start_date: CalendarDate::from_ymd(2024, 1, 15),
        end_date: Some(CalendarDate::parse("2025-01-14T00:00:00Z").unwrap()),
        auto_renew: Some(false),
        mrr: Some(0),
        kind: Some("subscription".into()),
        ..Default::default()
    };

    let encoded = serde_json::to_value(&agreement).unwrap();
    assert_eq!(
        encoded,
        json!({
            "customerId": "c1",
            "startDate": "2024-01-15",
            "endDate": "2025-01-14",
            "autoRenew": false,
            "type": "subscription",
            "mrr": 0
        })
    );

    let decoded: Agreement = serde_json::from_value(json!({
        "id": "a1",
        "startDate": "2024-01-15T08:00:00Z",
        "renewalDate": "2025-01-15"
    }))
    .unwrap();
    assert_eq!(decoded.start_date, CalendarDate::from_ymd(2024, 1, 15));
    assert_eq!(decoded.renewal_date, CalendarDate::from_ymd(2025, 1, 15));
}

#[test]
fn test_agreement_bad_date_fails_decode() {
    let result: std::result::Result<Agreement, _> =
        serde_json::from_value(json!({"startDate": "soon"}));
    assert!(result.is_err());
}

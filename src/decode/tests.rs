//! Tests for the envelope decoder

use super::*;
use crate::error::Error;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Item {
    id: String,
}

#[test]
fn test_decode_entity() {
    let body = br#"{"status":"success","data":{"id":"42","extra":true}}"#;
    let item: Item = decode_entity("/items", body).unwrap();
    assert_eq!(item, Item { id: "42".into() });
}

#[test]
fn test_decode_entity_missing_data() {
    let err = decode_entity::<Item>("/items", br#"{"status":"success"}"#).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(err.to_string().contains("/items"));
}

#[test]
fn test_decode_entity_malformed() {
    let err = decode_entity::<Item>("/items", b"{not json").unwrap_err();
    match err {
        Error::Decode { message } => assert!(message.contains("[/items]")),
        other => panic!("Expected Decode, got {other:?}"),
    }
}

#[test]
fn test_decode_entity_error_status() {
    let body = br#"{"status":"error","message":"refId already used"}"#;
    let err = decode_entity::<Item>("/items", body).unwrap_err();
    assert!(matches!(err, Error::Vendor { .. }));
    assert_eq!(err.to_string(), "refId already used");
}

#[test]
fn test_decode_entity_error_status_without_message() {
    let err = decode_entity::<Item>("/items", br#"{"status":"error"}"#).unwrap_err();
    assert_eq!(err.to_string(), "undefined error");
}

#[test]
fn test_decode_page() {
    let body = br#"{
        "status": "success",
        "data": [{"id": "1"}, {"id": "2"}],
        "metadata": {"pagination": {"page": 1, "size": 2, "total": 5}}
    }"#;
    let page: Page<Item> = decode_page("/items", body).unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.items[1].id, "2");
    assert_eq!(
        page.pagination,
        PaginationMetadata {
            page: 1,
            size: 2,
            total: 5
        }
    );
}

#[test]
fn test_decode_page_without_metadata() {
    let body = br#"{"status":"success","data":[{"id":"1"}]}"#;
    let page: Page<Item> = decode_page("/items", body).unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.pagination, PaginationMetadata::default());
}

#[test]
fn test_decode_page_without_data() {
    let body = br#"{"status":"success","metadata":{"pagination":{"page":1,"size":10,"total":0}}}"#;
    let page: Page<Item> = decode_page("/items", body).unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.pagination.total, 0);
}

#[test]
fn test_decode_page_wrong_shape() {
    let body = br#"{"status":"success","data":{"id":"1"}}"#;
    let err = decode_page::<Item>("/items", body).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
}

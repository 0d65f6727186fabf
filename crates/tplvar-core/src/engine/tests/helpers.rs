//! Shared test helpers for rendering tests

use crate::record::Record;
use serde_json::json;

/// Record with basic scalar values
pub(super) fn simple_record() -> Record {
    Record::new(json!({
        "name": "Ann",
        "age": 30,
        "price": 9.99,
        "active": true
    }))
}

/// Record with nested objects, an array and a null
pub(super) fn nested_record() -> Record {
    Record::new(json!({
        "name": "Ann",
        "age": 30,
        "address": {
            "city": "Oslo",
            "geo": { "lat": "59.91", "lon": "10.75" }
        },
        "tags": ["a", "b"],
        "note": null
    }))
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tests for the optional serde support.

#![cfg(feature = "serde")]

use bstkcfg::domain::Value;
use bstkcfg::store::FlatStore;
use serde_json::json;

#[test]
fn test_value_serializes_untagged() {
    assert_eq!(serde_json::to_value(Value::from("US")).unwrap(), json!("US"));
    assert_eq!(serde_json::to_value(Value::from(16384i64)).unwrap(), json!(16384));
    assert_eq!(serde_json::to_value(Value::from(1.5)).unwrap(), json!(1.5));
    assert_eq!(serde_json::to_value(Value::from(true)).unwrap(), json!(true));
}

#[test]
fn test_value_deserializes_by_shape() {
    let values: Vec<Value> = serde_json::from_str(r#"["1", 1, 1.0, true]"#).unwrap();
    assert_eq!(
        values,
        vec![
            Value::from("1"),
            Value::Integer(1),
            Value::Real(1.0),
            Value::Boolean(true),
        ]
    );
}

#[test]
fn test_store_serializes_as_object_in_insertion_order() {
    let store = FlatStore::parse("bst.locale=\"en-US\"\nbst.country=\"US\"\nbst.system_ram=16384");
    let json = serde_json::to_string(&store).unwrap();
    assert_eq!(
        json,
        r#"{"bst.locale":"en-US","bst.country":"US","bst.system_ram":16384}"#
    );
}

#[test]
fn test_store_from_json_writes_line_format() {
    let store: FlatStore = serde_json::from_str(
        r#"{"bst.instance.Pie64.dpi": 240, "bst.enable_adb_access": true, "bst.country": "US"}"#,
    )
    .unwrap();

    assert_eq!(store.keys().collect::<Vec<_>>()[0], "bst.instance.Pie64.dpi");
    assert_eq!(
        store.to_string(),
        "bst.country=\"US\"\n\
         bst.enable_adb_access=\"1\"\n\
         bst.instance.Pie64.dpi=\"240\"\n"
    );
}

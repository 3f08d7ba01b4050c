//! Deferred value matrix: encode/decode helpers, the null state, in-document
//! capture and pass-through.

use jason::{Error, Object, Value, ValueArray, ValueObject};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Record {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Count")]
    count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    id: u64,
    payload: Value,
}

// ---------------------------------------------------------------------------
// Encode then decode
// ---------------------------------------------------------------------------

#[test]
fn integer_decodes_as_float() {
    let v = jason::from(&42);
    assert_eq!(jason::to::<f64>(&v), 42.0);
}

#[test]
fn record_roundtrip() {
    let v = jason::from(&Record {
        name: "a".into(),
        count: 3,
    });
    assert_eq!(v.to_string(), r#"{"Name":"a","Count":3}"#);
    let back: Record = jason::to(&v);
    assert_eq!(back.name, "a");
    assert_eq!(back.count, 3);
}

#[test]
fn encode_reports_unencodable_input() {
    let mut bad = std::collections::HashMap::new();
    bad.insert(vec![1u8], 1);
    assert!(matches!(jason::encode(&bad), Err(Error::Encode(_))));
}

#[test]
#[should_panic(expected = "jason: cannot encode")]
fn from_panics_on_unencodable_input() {
    let mut bad = std::collections::BTreeMap::new();
    bad.insert((1, 2), "tuple keys are not JSON keys");
    let _ = jason::from(&bad);
}

// ---------------------------------------------------------------------------
// Decodability
// ---------------------------------------------------------------------------

#[test]
fn decodability_of_integer_sequence() {
    let v = Value::from(&b"[1,2,3]"[..]);
    assert!(jason::is::<Vec<i64>>(&v));
    assert!(!jason::is::<bool>(&v));
}

#[test]
fn maybe_reports_decode_errors() {
    let v = Value::from("[1,2,3]");
    assert!(matches!(jason::maybe::<bool>(&v), Err(Error::Decode(_))));
    assert!(matches!(
        jason::maybe::<Vec<i64>>(&Value::from("[1,2,")),
        Err(Error::Decode(_))
    ));
}

#[test]
#[should_panic(expected = "jason: cannot decode into bool")]
fn to_panics_where_maybe_fails() {
    let v = Value::from("[1,2,3]");
    let _: bool = jason::to(&v);
}

#[test]
fn missing_field_is_not_decodable() {
    let v = Value::from(r#"{"Name":"a"}"#);
    assert!(!jason::is::<Record>(&v));
}

// ---------------------------------------------------------------------------
// Null identity
// ---------------------------------------------------------------------------

#[test]
fn empty_value_serializes_as_null() {
    assert_eq!(serde_json::to_vec(&Value::new()).unwrap(), b"null");
    assert_eq!(Value::default().as_json_bytes(), b"null");
    assert_eq!(Value::new().to_string(), "null");
}

#[test]
fn null_literal_survives_populate_and_serialize() {
    let v: Value = serde_json::from_str("null").unwrap();
    assert_eq!(v.as_bytes(), b"null");
    assert_eq!(serde_json::to_string(&v).unwrap(), "null");
}

#[test]
fn empty_value_inside_document() {
    let env = Envelope {
        id: 1,
        payload: Value::new(),
    };
    assert_eq!(
        serde_json::to_string(&env).unwrap(),
        r#"{"id":1,"payload":null}"#
    );
}

// ---------------------------------------------------------------------------
// Populate from a larger document
// ---------------------------------------------------------------------------

#[test]
fn captures_exact_span_of_nested_value() {
    let doc = r#"{"id": 7, "payload": {"b": [1, 2],  "a": "x"}}"#;
    let env: Envelope = serde_json::from_str(doc).unwrap();
    assert_eq!(env.id, 7);
    assert_eq!(env.payload.as_bytes(), br#"{"b": [1, 2],  "a": "x"}"#);
}

#[test]
fn pass_through_keeps_bytes_verbatim() {
    let doc = r#"{"id":7,"payload":{"z":1.50,"a":[true, null]}}"#;
    let env: Envelope = serde_json::from_str(doc).unwrap();
    assert_eq!(serde_json::to_string(&env).unwrap(), doc);
}

#[test]
fn populate_from_reader() {
    let doc = br#"{"id":2,"payload":"text"}"#;
    let env: Envelope = serde_json::from_reader(&doc[..]).unwrap();
    assert_eq!(env.payload.to::<String>(), "text");
}

#[test]
fn set_bytes_does_not_alias_source() {
    let mut scratch = b"[1,2,3]".to_vec();
    let mut v = Value::new();
    v.set_bytes(&scratch);
    scratch.copy_from_slice(b"[9,9,9]");
    assert_eq!(serde_json::to_string(&v).unwrap(), "[1,2,3]");
}

// ---------------------------------------------------------------------------
// Structural aliases
// ---------------------------------------------------------------------------

#[test]
fn value_object_defers_members() {
    let v = Value::from(r#"{"count":3,"tags":["a","b"],"extra":{"deep":true}}"#);
    let obj: ValueObject = v.to();
    assert_eq!(obj["count"].to::<u32>(), 3);
    assert_eq!(obj["tags"].to::<Vec<String>>(), vec!["a", "b"]);
    assert_eq!(obj["extra"].to_string(), r#"{"deep":true}"#);
    assert_eq!(
        obj.keys().map(String::as_str).collect::<Vec<_>>(),
        ["count", "tags", "extra"]
    );
}

#[test]
fn value_array_defers_elements() {
    let arr: ValueArray = jason::to(&Value::from(r#"[1,"two",[3]]"#));
    assert_eq!(arr.len(), 3);
    assert!(arr[0].is::<i64>());
    assert!(arr[1].is::<String>());
    assert!(arr[2].is::<Vec<i64>>());
}

#[test]
fn dynamic_object_holds_any_shape() {
    let obj: Object = jason::to(&Value::from(r#"{"a":1,"b":"c"}"#));
    assert_eq!(obj["a"], json!(1));
    assert_eq!(obj["b"], json!("c"));
}

#[test]
fn typed_object_rejects_mixed_members() {
    let v = Value::from(r#"{"a":true,"b":1}"#);
    assert!(!jason::is::<Object<bool>>(&v));
    assert!(jason::is::<Object<Value>>(&v));
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

#[test]
fn conversions_run_under_a_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
    let v = jason::from(&json!({"k": [1, 2]}));
    assert!(jason::is::<Object<Vec<u8>>>(&v));
}

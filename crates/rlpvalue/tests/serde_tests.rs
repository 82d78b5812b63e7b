use rlpvalue::{parse, Value, ValueError};
use serde_json::json;

// ============================================================================
// serde Serialize / Deserialize
// ============================================================================

#[test]
fn serialize_through_serde_json() {
    let v = parse(r#"{"a":[1,-2,18446744073709551615,1.5],"b":"x\u0000","c":null,"d":true}"#).unwrap();
    let text = serde_json::to_string(&v).unwrap();
    assert_eq!(text, r#"{"a":[1,-2,18446744073709551615,1.5],"b":"x\u0000","c":null,"d":true}"#);
}

#[test]
fn serialize_narrows_oversized_numbers_to_float() {
    let v = parse("[32482348723847471234]").unwrap();
    let back: serde_json::Value = serde_json::to_value(&v).unwrap();
    assert!(back[0].is_f64());
}

#[test]
fn deserialize_from_serde_json_text() {
    let v: Value = serde_json::from_str(r#"{"z":1,"a":[true,null,"s"],"f":2.5}"#).unwrap();
    assert!(v.is_object());
    assert_eq!(v.get_keys().unwrap(), vec!["z", "a", "f"]);
    assert_eq!(v["z"].get_int().unwrap(), 1);
    assert!(v["a"][0].is_true());
    assert!(v["a"][1].is_null());
    assert_eq!(v["a"][2].get_str().unwrap(), "s");
    assert_eq!(v["f"].get_val_str(), "2.5");
}

#[test]
fn deserialize_from_serde_json_value() {
    let v: Value = serde_json::from_value(json!({"n": -7, "list": [1, 2]})).unwrap();
    assert_eq!(v["n"].get_int64().unwrap(), -7);
    assert_eq!(v["list"].size(), 2);
}

// ============================================================================
// serde_json::Value conversions
// ============================================================================

#[test]
fn from_serde_json_value_keeps_order_and_text() {
    let json = json!({"b": 1, "a": {"x": [1.25, "y", false]}});
    let v = Value::from(json);
    assert_eq!(v.write(), r#"{"b":1,"a":{"x":[1.25,"y",false]}}"#);
}

#[test]
fn into_serde_json_value() {
    let v = parse(r#"{"n":800,"s":"str","l":[null,true],"f":-0.5}"#).unwrap();
    let json = serde_json::Value::try_from(&v).unwrap();
    assert_eq!(json, json!({"n": 800, "s": "str", "l": [null, true], "f": -0.5}));
}

#[test]
fn into_serde_json_collapses_duplicate_keys() {
    let v = parse(r#"{"k":1,"k":2}"#).unwrap();
    let json = serde_json::Value::try_from(&v).unwrap();
    assert_eq!(json, json!({"k": 2}));
}

#[test]
fn into_serde_json_rejects_unrepresentable_numbers() {
    let v = parse("[1e400]").unwrap();
    let err = serde_json::Value::try_from(&v).unwrap_err();
    assert!(matches!(err, ValueError::Json(_)));
}

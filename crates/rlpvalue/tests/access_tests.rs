use rlpvalue::{Kind, Value, ValueError};

fn num(text: &str) -> Value {
    let mut v = Value::new();
    v.set_num_str(text).expect("valid number text");
    v
}

// ============================================================================
// Integer coercion
// ============================================================================

#[test]
fn get_int64_reads_integer_text() {
    assert_eq!(num("1000").get_int64().unwrap(), 1000);
    assert_eq!(num("-9223372036854775808").get_int64().unwrap(), i64::MIN);
    assert_eq!(num("-0").get_int64().unwrap(), 0);
}

#[test]
fn get_int64_rejects_oversized_text() {
    let v = num("32482348723847471234");
    assert!(matches!(
        v.get_int64(),
        Err(ValueError::OutOfRange { target: "i64", .. })
    ));
    assert!(num("9223372036854775808").get_int64().is_err());
}

#[test]
fn get_int_is_32_bit() {
    let v = num("2147483648");
    assert_eq!(v.get_int64().unwrap(), 2147483648);
    assert!(matches!(
        v.get_int(),
        Err(ValueError::OutOfRange { target: "i32", .. })
    ));

    assert_eq!(num("1000").get_int().unwrap(), 1000);
    assert_eq!(num("2147483647").get_int().unwrap(), i32::MAX);
    assert_eq!(num("-2147483648").get_int().unwrap(), i32::MIN);
    assert!(num("-2147483649").get_int().is_err());
}

#[test]
fn integer_getters_reject_fraction_and_exponent() {
    for text in ["1.0", "1.5", "1e3", "2E2", "-0.0"] {
        let v = num(text);
        assert!(
            matches!(v.get_int(), Err(ValueError::NotAnInteger(_))),
            "get_int accepted {text}"
        );
        assert!(matches!(v.get_int64(), Err(ValueError::NotAnInteger(_))));
        assert!(matches!(v.get_uint64(), Err(ValueError::NotAnInteger(_))));
    }
}

#[test]
fn get_uint64_covers_full_unsigned_range() {
    assert_eq!(num("18446744073709551615").get_uint64().unwrap(), u64::MAX);
    assert!(matches!(
        num("18446744073709551616").get_uint64(),
        Err(ValueError::OutOfRange { target: "u64", .. })
    ));
    assert!(matches!(
        num("-1").get_uint64(),
        Err(ValueError::OutOfRange { .. })
    ));
}

#[test]
fn integer_getters_on_non_numbers_are_type_mismatch() {
    let s = Value::from("10");
    assert!(matches!(
        s.get_int(),
        Err(ValueError::TypeMismatch { found: Kind::Str, .. })
    ));
    assert!(matches!(
        Value::from(true).get_int64(),
        Err(ValueError::TypeMismatch { found: Kind::Bool, .. })
    ));
    assert!(matches!(
        Value::new().get_uint64(),
        Err(ValueError::TypeMismatch { found: Kind::Null, .. })
    ));
}

// ============================================================================
// Real coercion
// ============================================================================

#[test]
fn get_real_accepts_any_number_text() {
    assert_eq!(num("1.10000000").get_real().unwrap(), 1.1);
    assert_eq!(num("1e3").get_real().unwrap(), 1000.0);
    assert_eq!(num("-42").get_real().unwrap(), -42.0);
}

#[test]
fn get_real_rejects_overflow() {
    assert!(matches!(
        num("1e400").get_real(),
        Err(ValueError::OutOfRange { target: "f64", .. })
    ));
    assert!(Value::from("1.5").get_real().is_err());
}

// ============================================================================
// Kind-checked getters
// ============================================================================

#[test]
fn numeric_value_rejects_other_getters() {
    let v = num("1000");
    assert!(matches!(
        v.get_str(),
        Err(ValueError::TypeMismatch { found: Kind::Num, .. })
    ));
    assert!(matches!(v.get_array(), Err(ValueError::TypeMismatch { .. })));
    assert!(matches!(v.get_values(), Err(ValueError::TypeMismatch { .. })));
    assert!(matches!(v.get_object(), Err(ValueError::TypeMismatch { .. })));
    assert!(matches!(v.get_bool(), Err(ValueError::TypeMismatch { .. })));
    assert!(matches!(v.get_keys(), Err(ValueError::TypeMismatch { .. })));
}

#[test]
fn get_str_only_on_strings() {
    assert_eq!(Value::from("abc").get_str().unwrap(), "abc");
    assert!(Value::new().get_str().is_err());
}

#[test]
fn get_bool_only_on_bools() {
    assert!(Value::from(true).get_bool().unwrap());
    assert!(!Value::from(false).get_bool().unwrap());
    assert!(Value::from("true").get_bool().is_err());
}

#[test]
fn get_values_on_array_and_object() {
    let mut v = Value::new();
    v.read("[true, 10]").unwrap();
    assert!(v.get_array().is_ok());

    let vals = v.get_values().unwrap();
    assert!(matches!(
        vals[0].get_int(),
        Err(ValueError::TypeMismatch { found: Kind::Bool, .. })
    ));
    assert_eq!(vals[1].get_int().unwrap(), 10);

    let mut obj = Value::new();
    obj.read(r#"{"a": 1, "b": "two"}"#).unwrap();
    let vals = obj.get_values().unwrap();
    assert_eq!(vals.len(), 2);
    assert_eq!(vals[1].get_str().unwrap(), "two");
    assert_eq!(obj.get_keys().unwrap(), vec!["a", "b"]);
    assert_eq!(obj.get_object().unwrap().len(), 2);
    assert!(obj.get_array().is_err());
}

#[test]
fn type_mismatch_message_names_both_kinds() {
    let err = Value::from(5i32).get_str().unwrap_err();
    assert_eq!(
        err.to_string(),
        "JSON value is not a string as expected (found number)"
    );
}

/// Property-based tests for the reader, writer and numeric model.
///
/// Uses `proptest` to generate random value trees and numeral texts and checks that:
/// - `read(write(v)) == v` and a second write is byte-identical to the first
/// - any grammatical numeral survives `set_num_str` and a write/read cycle verbatim
/// - any string (NUL, control characters, astral plane) survives escaping
/// - appending non-whitespace after a valid document always fails the read
/// - integer coercions agree with the native integer that produced the text
use proptest::prelude::*;
use rlpvalue::{parse, Value};

// ============================================================================
// Strategies
// ============================================================================

/// JSON numeral text, including long digit runs, fractions with trailing zeros and
/// exponents in either case.
fn arb_numeral() -> impl Strategy<Value = String> {
    prop::string::string_regex("-?(0|[1-9][0-9]{0,30})(\\.[0-9]{1,12})?([eE][-+]?[0-9]{1,3})?")
        .unwrap()
}

fn arb_number() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        arb_numeral().prop_map(|text| {
            let mut v = Value::new();
            v.set_num_str(&text).unwrap();
            v
        }),
    ]
}

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        arb_number(),
        any::<String>().prop_map(Value::from),
    ]
}

/// Random trees up to 4 levels deep with at most 8 children per container.
/// Object keys may repeat; order is part of the value.
fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec((any::<String>(), inner), 0..8).prop_map(Value::Object),
        ]
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn write_then_read_is_identity(v in arb_value()) {
        let text = v.write();
        let back = parse(&text).unwrap();
        prop_assert_eq!(&back, &v);
        prop_assert_eq!(back.write(), text);
    }

    #[test]
    fn pretty_write_reads_back(v in arb_value(), indent in 1usize..5) {
        let back = parse(&v.write_pretty(indent)).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn numerals_are_stored_verbatim(text in arb_numeral()) {
        let mut v = Value::new();
        prop_assert!(v.set_num_str(&text).is_ok());
        prop_assert_eq!(v.get_val_str(), text.as_str());
        prop_assert_eq!(v.write(), text.clone());
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.get_val_str(), text.as_str());
    }

    #[test]
    fn strings_survive_escaping(s in any::<String>()) {
        let text = Value::from(s.as_str()).write();
        let back = parse(&text).unwrap();
        prop_assert_eq!(back.get_str().unwrap(), s.as_str());
    }

    #[test]
    fn trailing_garbage_is_rejected(
        v in arb_value(),
        gap in "[ \t\n]{0,2}",
        junk in "[a-zA-Z@{}\\[\\]]{1,5}",
    ) {
        let text = format!("{}{}{}", v.write(), gap, junk);
        prop_assert!(parse(&text).is_err(), "accepted {:?}", text);
    }

    #[test]
    fn surrounding_whitespace_is_ignored(v in arb_value(), pre in "[ \t\r\n]{0,4}", post in "[ \t\r\n]{0,4}") {
        let text = format!("{}{}{}", pre, v.write(), post);
        prop_assert_eq!(parse(&text).unwrap(), v);
    }

    #[test]
    fn i64_text_coerces_back(n in any::<i64>()) {
        let v = Value::from(n);
        prop_assert_eq!(v.get_int64().unwrap(), n);
        prop_assert_eq!(v.get_int().ok(), i32::try_from(n).ok());
    }

    #[test]
    fn u64_text_coerces_back(n in any::<u64>()) {
        let v = Value::from(n);
        prop_assert_eq!(v.get_uint64().unwrap(), n);
        prop_assert_eq!(v.get_int64().ok(), i64::try_from(n).ok());
    }

    #[test]
    fn invalid_numerals_leave_value_untouched(text in "[a-zA-Z +.]{1,10}") {
        let mut v = Value::from("before");
        prop_assert!(v.set_num_str(&text).is_err());
        prop_assert_eq!(v.get_val_str(), "before");
    }
}

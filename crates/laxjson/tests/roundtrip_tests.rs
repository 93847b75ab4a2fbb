use laxjson::{
    decode, decode_with, serialize, serialize_to_string, NullLiteral, ParseOptions, Value,
};

/// Assert that parse → serialize → parse yields the same value, and that the
/// canonical text is a fixed point of parse-then-serialize.
fn assert_roundtrip(input: &str) {
    let first = decode(input).expect("parse failed");
    let text = serialize(&first);
    let second = decode(&text).expect("reparse failed");
    assert_eq!(
        first,
        second,
        "Roundtrip failed:\n  input:  {input}\n  output: {}",
        String::from_utf8_lossy(&text)
    );
    assert_eq!(serialize(&second), text, "canonical text is not stable");
}

/// Assert the canonical serialization of a lenient input.
fn assert_normalizes(input: &str, expected: &str) {
    let value = decode(input).expect("parse failed");
    assert_eq!(serialize_to_string(&value), expected, "input: {input}");
}

// ============================================================================
// Primitive Roundtrips
// ============================================================================

#[test]
fn roundtrip_booleans() {
    assert_roundtrip("true");
    assert_roundtrip("false");
}

#[test]
fn roundtrip_integers() {
    assert_roundtrip("42");
    assert_roundtrip("-7");
    assert_roundtrip("0");
}

#[test]
fn roundtrip_64_bit_boundaries() {
    assert_roundtrip("18446744073709551615");
    assert_roundtrip("-9223372036854775808");
    assert_roundtrip("9223372036854775807");
}

#[test]
fn roundtrip_short_doubles() {
    assert_roundtrip("3.14");
    assert_roundtrip("-456.123");
    assert_roundtrip("1e-05");
}

#[test]
fn roundtrip_strings() {
    assert_roundtrip(r#""""#);
    assert_roundtrip(r#""hello""#);
    assert_roundtrip(r#""line1\nline2""#);
    assert_roundtrip(r#""path\\to\\file""#);
    assert_roundtrip(r#""say \"hi\"""#);
    assert_roundtrip(r#""col1\tcol2""#);
}

#[test]
fn roundtrip_unicode_strings() {
    assert_roundtrip(r#""caf\u00e9""#);
    assert_roundtrip(r#""\ud83d\ude00""#);
    assert_roundtrip(r#""\udc00 lone""#);
    assert_roundtrip("\"\u{4f60}\u{597d}\"");
}

// ============================================================================
// Container Roundtrips
// ============================================================================

#[test]
fn roundtrip_flat_object() {
    assert_roundtrip(r#"{"name":"Alice","age":30,"active":true}"#);
}

#[test]
fn roundtrip_nested_object() {
    assert_roundtrip(r#"{"server":{"host":"localhost","port":8080}}"#);
    assert_roundtrip(r#"{"a":{"b":{"c":"deep"}}}"#);
}

#[test]
fn roundtrip_empty_containers() {
    assert_roundtrip("{}");
    assert_roundtrip("[]");
    assert_roundtrip(r#"{"meta":{},"tags":[]}"#);
}

#[test]
fn roundtrip_nested_arrays() {
    assert_roundtrip("[[1,2],[3,[4,[]]]]");
    assert_roundtrip(r#"[{"a":1},{"b":[true,false]}]"#);
}

// ============================================================================
// Lenient input → canonical output
// ============================================================================

#[test]
fn normalize_sorts_keys() {
    assert_normalizes(r#"{"z": 1, "a": 2, "m": 3}"#, r#"{"a":2,"m":3,"z":1}"#);
}

#[test]
fn normalize_single_quotes_and_trailing_commas() {
    assert_normalizes(
        "['a', 'b\"c', {'d': \"e\",},]",
        r#"["a","b\"c",{"d":"e"}]"#,
    );
}

#[test]
fn normalize_lenient_numbers() {
    assert_normalizes("[+5, .5, 2e3, 1E2]", "[5,0.5,2000,100]");
}

#[test]
fn normalize_drops_unknown_escapes() {
    assert_normalizes(r#""a\ b\/c""#, r#""a b/c""#);
}

#[test]
fn normalize_duplicate_keys_keep_last() {
    assert_normalizes(r#"{"x": 1, "x": 2}"#, r#"{"x":2}"#);
}

#[test]
fn null_roundtrip_depends_on_mapping() {
    assert_normalizes("[null]", "[false]");

    let options = ParseOptions::default().with_null_literal(NullLiteral::Invalid);
    let value = decode_with("[null]", &options).unwrap();
    assert_eq!(value, Value::list([Value::Invalid]));
    assert_eq!(serialize_to_string(&value), "[null]");
}

#[test]
fn unsigned_values_that_fit_i64_come_back_signed() {
    let text = serialize(&Value::UInt64(5));
    assert_eq!(decode(text), Ok(Value::Int64(5)));
}

#[test]
fn high_precision_doubles_lose_digits_in_general_format() {
    let value = Value::Double(std::f64::consts::PI);
    let back = decode(serialize(&value)).unwrap();
    assert_eq!(back, Value::Double(3.14159));
}

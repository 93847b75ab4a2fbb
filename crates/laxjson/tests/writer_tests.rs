use laxjson::{
    serialize, serialize_to_string, serialize_with, write_value, FloatFormat, Utf16String, Value,
    WriteOptions,
};

fn assert_writes(value: Value, expected: &str) {
    let out = serialize_to_string(&value);
    assert_eq!(out, expected, "Write mismatch for {value:?}");
}

fn assert_writes_shortest(value: Value, expected: &str) {
    let options = WriteOptions::default().with_float_format(FloatFormat::Shortest);
    let out = serialize_with(&value, &options);
    assert_eq!(String::from_utf8(out).unwrap(), expected, "for {value:?}");
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn write_integers() {
    assert_writes(Value::Int64(42), "42");
    assert_writes(Value::Int64(-42), "-42");
    assert_writes(Value::Int64(0), "0");
}

#[test]
fn write_64_bit_extremes() {
    assert_writes(Value::UInt64(u64::MAX), "18446744073709551615");
    assert_writes(Value::Int64(i64::MIN), "-9223372036854775808");
}

#[test]
fn write_double_general_format() {
    assert_writes(Value::Double(42.5), "42.5");
    assert_writes(Value::Double(1.3), "1.3");
    assert_writes(Value::Double(-456.123), "-456.123");
    assert_writes(Value::Double(2000.0), "2000");
    assert_writes(Value::Double(0.0), "0");
    assert_writes(Value::Double(0.0001), "0.0001");
}

#[test]
fn write_double_general_keeps_six_significant_digits() {
    assert_writes(Value::Double(3.14159265), "3.14159");
    assert_writes(Value::Double(0.1 + 0.2), "0.3");
    assert_writes(Value::Double(999999.0), "999999");
}

#[test]
fn write_double_general_switches_to_exponent() {
    assert_writes(Value::Double(1e20), "1e+20");
    assert_writes(Value::Double(1e-5), "1e-05");
    assert_writes(Value::Double(123456789.0), "1.23457e+08");
    assert_writes(Value::Double(999999.5), "1e+06");
    assert_writes(Value::Double(-2.5e-7), "-2.5e-07");
    assert_writes(Value::Double(1.5e300), "1.5e+300");
}

#[test]
fn write_double_shortest_format() {
    assert_writes_shortest(Value::Double(0.1 + 0.2), "0.30000000000000004");
    assert_writes_shortest(Value::Double(42.5), "42.5");
    assert_writes_shortest(Value::Double(2000.0), "2000");
    assert_writes_shortest(Value::Double(1e21), "1e+21");
}

#[test]
fn write_non_finite_double_as_null() {
    assert_writes(Value::Double(f64::NAN), "null");
    assert_writes(Value::Double(f64::INFINITY), "null");
    assert_writes_shortest(Value::Double(f64::NEG_INFINITY), "null");
}

// ============================================================================
// Constants
// ============================================================================

#[test]
fn write_constants() {
    assert_writes(Value::Invalid, "null");
    assert_writes(Value::Bool(true), "true");
    assert_writes(Value::Bool(false), "false");
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn write_plain_strings() {
    assert_writes(Value::from(""), r#""""#);
    assert_writes(Value::from("x"), r#""x""#);
    assert_writes(Value::from("foo'bar"), r#""foo'bar""#);
}

#[test]
fn write_escapes_backslash_and_quote() {
    assert_writes(Value::from("foo\\bar\"baz"), r#""foo\\bar\"baz""#);
}

#[test]
fn write_escapes_control_characters() {
    assert_writes(Value::from("\u{8}\u{c}\n\r\t"), r#""\b\f\n\r\t""#);
}

#[test]
fn write_other_low_control_characters_raw() {
    assert_eq!(serialize(&Value::from("\u{1}")), b"\"\x01\"");
}

#[test]
fn write_nul_as_unicode_escape() {
    assert_writes(Value::from("a\0b"), r#""a\u0000b""#);
}

#[test]
fn write_non_ascii_as_lowercase_unicode_escapes() {
    assert_writes(Value::from("-\u{e9}\t-"), r#""-\u00e9\t-""#);
    assert_writes(Value::from("\u{7f}"), r#""\u007f""#);
    assert_writes(Value::from("\u{7e}"), r#""~""#);
    assert_writes(Value::from("\u{4f60}"), r#""\u4f60""#);
}

#[test]
fn write_surrogate_pair_as_two_escapes() {
    assert_writes(Value::from("\u{1f600}"), r#""\ud83d\ude00""#);
}

#[test]
fn write_lone_surrogate() {
    let text = Utf16String::from_units(vec![0xdc00, u16::from(b'a')]);
    assert_writes(Value::String(text), r#""\udc00a""#);
}

#[test]
fn forward_slash_is_not_escaped() {
    assert_writes(Value::from("a/b"), r#""a/b""#);
}

// ============================================================================
// Lists and maps
// ============================================================================

#[test]
fn write_empty_containers() {
    assert_writes(Value::List(vec![]), "[]");
    assert_writes(Value::Map(Default::default()), "{}");
}

#[test]
fn write_single_element_list() {
    assert_writes(Value::list([Value::Int64(42)]), "[42]");
}

#[test]
fn write_map_keys_sorted_not_insertion_order() {
    let value = Value::map([("def", Value::Int64(42)), ("abc", Value::Bool(true))]);
    assert_writes(value, r#"{"abc":true,"def":42}"#);
}

#[test]
fn write_map_keys_sorted_by_code_unit() {
    let value = Value::map([
        ("b", Value::Int64(1)),
        ("B", Value::Int64(2)),
        ("\u{e9}", Value::Int64(3)),
        ("a", Value::Int64(4)),
    ]);
    assert_writes(value, r#"{"B":2,"a":4,"b":1,"\u00e9":3}"#);
}

#[test]
fn write_map_keys_escaped() {
    let value = Value::map([("a\"b", Value::Invalid)]);
    assert_writes(value, r#"{"a\"b":null}"#);
}

#[test]
fn write_mixed_list() {
    let map = Value::map([
        ("x", Value::Bool(true)),
        ("y", Value::from("789")),
        ("z", Value::Int64(1234)),
    ]);
    let list = Value::list([
        Value::Int64(1),
        Value::from("foo bar' <- quote baz \u{e9} <- unicode \t<- tab \" <- dquote"),
        Value::Double(1.3),
        map,
        Value::Int64(0),
        Value::Invalid,
    ]);
    assert_writes(
        list,
        concat!(
            r#"[1,"foo bar' <- quote baz \u00e9 <- unicode \t<- tab \" <- dquote",1.3,"#,
            r#"{"x":true,"y":"789","z":1234},0,null]"#
        ),
    );
}

#[test]
fn write_value_appends_to_buffer() {
    let mut out = b"prefix:".to_vec();
    write_value(&Value::list([Value::Bool(true)]), &mut out, &WriteOptions::default());
    assert_eq!(out, b"prefix:[true]");
}

#[test]
fn output_is_always_ascii() {
    let value = Value::map([(
        "\u{4f60}\u{597d}",
        Value::list([Value::from("caf\u{e9} \u{1f980}"), Value::Double(1.0 / 3.0)]),
    )]);
    assert!(serialize(&value).is_ascii());
}

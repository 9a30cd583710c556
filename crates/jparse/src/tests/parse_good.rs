#![allow(clippy::float_cmp)]

use rstest::rstest;

use crate::{Map, ParserOptions, Value, parse, parse_slice, parse_values};

fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    entries.into_iter().collect()
}

fn array<const N: usize>(elements: [Value; N]) -> Value {
    elements.into_iter().collect()
}

#[rstest]
#[case("true", Value::Boolean(true))]
#[case("false", Value::Boolean(false))]
#[case("null", Value::Null)]
fn parses_basic_types(#[case] json: &str, #[case] expected: Value) {
    assert_eq!(parse(json).unwrap(), expected);
}

#[rstest]
#[case("0", 0.0)]
#[case("10", 10.0)]
#[case("123456789", 123_456_789.0)]
#[case("-0", 0.0)]
#[case("-1", -1.0)]
#[case("-10", -10.0)]
#[case("-999999", -999_999.0)]
#[case("0.0", 0.0)]
#[case("1.0", 1.0)]
#[case("-1.0", -1.0)]
#[case("3.14159", 3.14159)]
#[case("12345678.9", 12_345_678.9)]
#[case("1e1", 10.0)]
#[case("1e+1", 10.0)]
#[case("1.0e1", 10.0)]
#[case("1.0e+1", 10.0)]
#[case("1.0e2", 100.0)]
#[case("2.0e1", 20.0)]
#[case("1e-1", 0.1)]
#[case("1.0e-1", 0.1)]
#[case("1e-2", 0.01)]
#[case("1.0e-2", 0.01)]
#[allow(clippy::approx_constant)]
fn parses_numbers(#[case] json: &str, #[case] expected: f64) {
    assert_eq!(parse(json).unwrap(), Value::Number(expected));
}

#[test]
fn exponent_forms_agree() {
    let n = |json| parse(json).unwrap().as_f64().unwrap();
    assert_eq!(n("1e1"), n("1e+1"));
    assert_eq!(n("2.0e1"), n("20"));
    assert_eq!(n("1E2"), n("100"));
}

#[rstest]
#[case(r#""""#, "")]
#[case(r#""a""#, "a")]
#[case(r#""Hello, world!""#, "Hello, world!")]
#[case(r#""\"""#, "\"")]
#[case(r#""\\""#, "\\")]
#[case(r#""\/""#, "/")]
#[case(r#""\b""#, "\u{08}")]
#[case(r#""\n""#, "\n")]
#[case(r#""\r""#, "\r")]
#[case(r#""\t""#, "\t")]
#[case(r#""\u1234""#, "\u{1234}")]
#[case(r#""\uabcd""#, "\u{abcd}")]
#[case(r#""\ud83d\ude00 ok""#, "\u{1F600} ok")]
fn parses_strings(#[case] json: &str, #[case] expected: &str) {
    assert_eq!(parse(json).unwrap(), Value::String(expected.into()));
}

#[rstest]
#[case("[]", array([]))]
#[case("[ ]", array([]))]
#[case("[ true ]", array([Value::Boolean(true)]))]
#[case("[ false ]", array([Value::Boolean(false)]))]
#[case("[ null ]", array([Value::Null]))]
#[case("[ true, true ]", array([true.into(), true.into()]))]
#[case("[ true, false, null ]", array([true.into(), false.into(), Value::Null]))]
#[case("[ 1, 2, 3 ]", array([Value::Number(1.0), Value::Number(2.0), Value::Number(3.0)]))]
#[case(r#"[ "hello", "world" ]"#, array(["hello".into(), "world".into()]))]
#[case(r#"[ "foo", 1.2 ]"#, array(["foo".into(), Value::Number(1.2)]))]
#[case(r#"[ "bar", false ]"#, array(["bar".into(), false.into()]))]
#[case("[ 0.5, null ]", array([Value::Number(0.5), Value::Null]))]
fn parses_arrays(#[case] json: &str, #[case] expected: Value) {
    assert_eq!(parse(json).unwrap(), expected);
}

#[rstest]
#[case("{}", object([]))]
#[case(r#"{"foo": true}"#, object([("foo", true.into())]))]
#[case(r#"{"foo": 123, "bar": null }"#, object([("foo", Value::Number(123.0)), ("bar", Value::Null)]))]
#[case(r#"{ "obj": {} }"#, object([("obj", object([]))]))]
#[case(r#"{"arr": []}"#, object([("arr", array([]))]))]
fn parses_objects(#[case] json: &str, #[case] expected: Value) {
    assert_eq!(parse(json).unwrap(), expected);
}

#[test]
fn parses_real_world_object() {
    let json = r#"
{
    "Dog": {
        "Name": "Javvy",
        "Age": 4,
        "IsGoodBoy": true
    },
    "Names": [
        "Alice",
        "Bob",
        "Catherine",
        "David"
    ]
}
"#;
    let expected = object([
        (
            "Dog",
            object([
                ("Name", "Javvy".into()),
                ("Age", Value::Number(4.0)),
                ("IsGoodBoy", true.into()),
            ]),
        ),
        (
            "Names",
            array(["Alice".into(), "Bob".into(), "Catherine".into(), "David".into()]),
        ),
    ]);
    assert_eq!(parse(json).unwrap(), expected);
}

#[rstest]
#[case("[{}]", array([object([])]))]
#[case("[{},{}]", array([object([]), object([])]))]
#[case(r#"[{"Foo": "Bar"}]"#, array([object([("Foo", "Bar".into())])]))]
fn parses_object_arrays(#[case] json: &str, #[case] expected: Value) {
    assert_eq!(parse(json).unwrap(), expected);
}

#[test]
fn parses_heavily_nested_structure() {
    let json = r#"[ { "A": [ { "B": [ { } ] } ] } ]"#;
    let expected = array([object([(
        "A",
        array([object([("B", array([object([])]))])]),
    )])]);
    assert_eq!(parse(json).unwrap(), expected);
}

#[test]
fn object_keys_keep_document_order() {
    let Value::Object(map) = parse(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap() else {
        panic!("expected an object");
    };
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    let mut expected = Map::new();
    expected.insert("a".into(), Value::Number(2.0));
    assert_eq!(parse(r#"{"a":1,"a":2}"#).unwrap(), Value::Object(expected));
}

#[test]
fn whitespace_around_every_token() {
    let json = " \t\r\n{ \"a\" \n:\t[ 1 ,\r\n2 ] , \"b\" : { } } \n";
    let expected = object([
        ("a", array([Value::Number(1.0), Value::Number(2.0)])),
        ("b", object([])),
    ]);
    assert_eq!(parse(json).unwrap(), expected);
}

#[test]
fn deep_nesting_within_the_default_limit() {
    let depth = ParserOptions::DEFAULT_MAX_DEPTH;
    let json = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let mut value = &parse(&json).unwrap();
    for _ in 1..depth {
        value = &value.as_array().unwrap()[0];
    }
    assert_eq!(value, &Value::Array(vec![]));
}

#[test]
fn parses_bytes() {
    let value = parse_slice("{\"é\": \"日本\"}".as_bytes()).unwrap();
    assert_eq!(value, object([("é", "日本".into())]));
}

#[test]
fn parses_multiple_values() {
    let options = ParserOptions {
        allow_multiple_json_values: true,
        ..Default::default()
    };
    let values = parse_values("{}{} 1 2\n[3]\ttrue\"s\"", options).unwrap();
    assert_eq!(
        values,
        [
            object([]),
            object([]),
            Value::Number(1.0),
            Value::Number(2.0),
            array([Value::Number(3.0)]),
            true.into(),
            "s".into(),
        ]
    );
}

#[test]
fn single_value_mode_returns_one_value() {
    let values = parse_values(" [1] ", ParserOptions::default()).unwrap();
    assert_eq!(values, [array([Value::Number(1.0)])]);
}

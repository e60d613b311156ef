use safeson::{decode, encode, safeson, Map, Value};

#[test]
fn test_safeson_macro_null() {
    assert_eq!(safeson!(null), Value::Null);
}

#[test]
fn test_safeson_macro_booleans() {
    assert_eq!(safeson!(true), Value::Bool(true));
    assert_eq!(safeson!(false), Value::Bool(false));
}

#[test]
fn test_safeson_macro_numbers() {
    assert_eq!(safeson!(42), Value::Number(42.0));
    assert_eq!(safeson!(3.5), Value::Number(3.5));
    assert_eq!(safeson!(-123), Value::Number(-123.0));
    assert_eq!(safeson!(1e16), Value::Number(1e16));
}

#[test]
fn test_safeson_macro_strings() {
    assert_eq!(safeson!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(safeson!(""), Value::String(String::new()));
}

#[test]
fn test_safeson_macro_arrays() {
    assert_eq!(safeson!([]), Value::Array(vec![]));
    assert_eq!(
        safeson!([1, 2, 3]),
        Value::Array(vec![Value::from(1), Value::from(2), Value::from(3)])
    );
    assert_eq!(
        safeson!([true, "x", null, [false]]),
        Value::Array(vec![
            Value::Bool(true),
            Value::from("x"),
            Value::Null,
            Value::Array(vec![Value::Bool(false)]),
        ])
    );
}

#[test]
fn test_safeson_macro_objects() {
    assert_eq!(safeson!({}), Value::Object(Map::new()));

    let value = safeson!({
        "name": "Alice",
        "age": 30,
        "address": {
            "city": "Paris",
            "zip": null
        },
        "tags": ["a", "b"],
    });

    assert_eq!(value.get("name"), Some(&Value::from("Alice")));
    assert_eq!(value.get("age").and_then(Value::as_i64), Some(30));
    assert_eq!(
        value.get("address").and_then(|a| a.get("zip")),
        Some(&Value::Null)
    );
    assert_eq!(value.get("tags").and_then(Value::as_array).map(Vec::len), Some(2));
}

#[test]
fn test_safeson_macro_expressions() {
    let count = 7u32;
    let names = vec!["x", "y"];
    let value = safeson!({ "count": count, "names": names });
    assert_eq!(value.get("count"), Some(&Value::Number(7.0)));
    assert_eq!(value.get("names"), Some(&safeson!(["x", "y"])));
}

#[test]
fn test_safeson_macro_roundtrip() {
    let value = safeson!({
        "a": [1, 2.5, (-3)],
        "b": { "c": true },
        "d": ""
    });
    assert_eq!(decode(&encode(&value)).unwrap(), value);
}

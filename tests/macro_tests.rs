use jsontree::{to_string, tree, Map, Value};

#[test]
fn test_tree_macro_null() {
    assert_eq!(tree!(null), Value::Empty);
}

#[test]
fn test_tree_macro_booleans() {
    assert_eq!(tree!(true), Value::Bool(true));
    assert_eq!(tree!(false), Value::Bool(false));
}

#[test]
fn test_tree_macro_numbers() {
    assert_eq!(tree!(42), Value::Int(42));
    assert_eq!(tree!(3.5), Value::Float(3.5));
    assert_eq!(tree!(-123), Value::Int(-123));
    assert_eq!(tree!(41_000_000_000i64), Value::Int(41_000_000_000));
}

#[test]
fn test_tree_macro_strings() {
    assert_eq!(tree!("hello world"), Value::Str("hello world".to_string()));
    assert_eq!(tree!(""), Value::Str(String::new()));

    let owned = String::from("owned");
    assert_eq!(tree!(owned), Value::Str("owned".to_string()));
}

#[test]
fn test_tree_macro_lists() {
    assert_eq!(tree!([]), Value::List(vec![]));
    assert_eq!(
        tree!([1, "hello", true, null]),
        Value::List(vec![
            Value::Int(1),
            Value::Str("hello".to_string()),
            Value::Bool(true),
            Value::Empty,
        ])
    );
}

#[test]
fn test_tree_macro_maps() {
    assert_eq!(tree!({}), Value::Map(Map::new()));

    let map = tree!({
        "name": "Alice",
        "age": 30
    });
    assert_eq!(map.as_map().len(), 2);
    assert_eq!(map["name"], Value::Str("Alice".to_string()));
    assert_eq!(map["age"], Value::Int(30));
}

#[test]
fn test_tree_macro_nested() {
    let nested = tree!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "scores": [95, 87.5, [1, 2]],
        "meta": null
    });

    assert_eq!(nested["user"]["id"].as_int(), 123);
    assert_eq!(nested["scores"][2][1].as_int(), 2);
    assert_eq!(
        to_string(&nested),
        r#"{"user":{"id":123,"name":"Bob","active":true},"scores":[95,87.5,[1,2]],"meta":null}"#
    );
}

#[test]
fn test_tree_macro_matches_parser() {
    let built = tree!({ "a": [1, "x"], "b": { "c": false } });
    let parsed = jsontree::from_str("{ a: [1, 'x'], b: { c: false } }").unwrap();
    assert_eq!(built, parsed);
}

/// Builds a [`Value`](crate::Value) from literal notation.
///
/// ```rust
/// use jsontree::{tree, Value};
///
/// let value = tree!({
///     "name": "Alice",
///     "tags": ["admin", 7, null],
///     "active": true
/// });
/// assert_eq!(value["tags"][1], Value::Int(7));
/// assert!(value["tags"][2].is_empty());
/// ```
///
/// Nested values must be single token trees; wrap anything longer, such as
/// a negative number inside a list, in parentheses.
#[macro_export]
macro_rules! tree {
    (null) => {
        $crate::Value::Empty
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::List(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::tree!($elem)),*])
    };

    ({}) => {
        $crate::Value::Map($crate::Map::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut map = $crate::Map::new();
        $(
            map.insert($key.to_string(), $crate::tree!($value));
        )*
        $crate::Value::Map(map)
    }};

    // Anything else goes through `From`.
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Map, Value};

    #[test]
    fn test_tree_macro_primitives() {
        assert_eq!(tree!(null), Value::Empty);
        assert_eq!(tree!(true), Value::Bool(true));
        assert_eq!(tree!(false), Value::Bool(false));
        assert_eq!(tree!(42), Value::Int(42));
        assert_eq!(tree!(3.5), Value::Float(3.5));
        assert_eq!(tree!("hello"), Value::Str("hello".to_string()));
    }

    #[test]
    fn test_tree_macro_lists() {
        assert_eq!(tree!([]), Value::List(vec![]));
        assert_eq!(
            tree!([1, (-2), "x"]),
            Value::List(vec![Value::Int(1), Value::Int(-2), Value::from("x")])
        );
    }

    #[test]
    fn test_tree_macro_maps() {
        assert_eq!(tree!({}), Value::Map(Map::new()));

        let map = tree!({
            "name": "Alice",
            "age": 30,
        });
        let keys: Vec<_> = map.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, ["name", "age"]);
        assert_eq!(map["age"], Value::Int(30));
    }
}

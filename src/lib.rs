//! # jsontree
//!
//! A dynamically typed document tree with a forgiving parser and a
//! configurable serializer for JSON and JSON-like text.
//!
//! ## Key Features
//!
//! - **Relaxed input**: single- or double-quoted strings, bare keys, bare
//!   words as string values, alongside strict JSON
//! - **Lenient reads**: every node reads as any scalar type through a fixed
//!   coercion table, with an opt-in strict mode
//! - **Chained lookups**: missing keys and out-of-range indices yield an
//!   `Empty` node instead of panicking
//! - **Configurable output**: compact JSON, spaced, wrapped and indented, or
//!   JavaScript-style with bare keys and single quotes
//! - **Guards**: optional depth and length limits for untrusted input
//!
//! ## Quick Start
//!
//! ```rust
//! use jsontree::{from_str, to_string, Value};
//!
//! let mut root = from_str(r#"[ "first", { "aString": "Hello World", "aNumber": 42 } ]"#).unwrap();
//! assert_eq!(root[1]["aNumber"].as_int(), 42);
//!
//! root.get_mut(1)
//!     .and_then(Value::as_map_mut)
//!     .unwrap()
//!     .insert("new child".to_string(), Value::from("new string"));
//!
//! assert_eq!(
//!     to_string(&root),
//!     r#"["first",{"aString":"Hello World","aNumber":42,"new child":"new string"}]"#
//! );
//! ```
//!
//! ### Building trees
//!
//! ```rust
//! use jsontree::tree;
//!
//! let value = tree!({ "name": "Alice", "scores": [90, 85.5] });
//! assert_eq!(value.to_string(), "{ name: 'Alice', scores: [ 90, 85.5 ] }");
//! ```
//!
//! ### Typed data
//!
//! Any serde type converts to and from a tree:
//!
//! ```rust
//! use jsontree::{from_str, from_value, to_value};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct User { id: u32, name: String }
//!
//! let user: User = from_value(from_str("{ id: 7, name: 'Bo' }").unwrap()).unwrap();
//! assert_eq!(user, User { id: 7, name: "Bo".to_string() });
//! assert_eq!(to_value(&user).unwrap()["id"].as_int(), 7);
//! ```
//!
//! ## Logging
//!
//! The crate logs through the `log` facade: `debug` when a guard rejects
//! input, `trace` with input and output sizes. Install any logger to see it.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`inspect.rs`** - Parse, read, extend and print a document
//! - **`formatting.rs`** - The serializer presets side by side
//! - **`dynamic_values.rs`** - Coercion and missing-data lookups
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
mod lex;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use de::ValueDeserializer;
pub use error::{Error, Position, Result};
pub use map::Map;
pub use options::{FormatOptions, ParseOptions};
pub use ser::{Serializer, ValueSerializer};
pub use value::{Coercion, Index, Kind, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Parses text into a tree with no depth or length limits.
///
/// Empty or whitespace-only input yields [`Value::Empty`].
///
/// # Examples
///
/// ```rust
/// use jsontree::{from_str, Value};
///
/// let value = from_str("{a:41}").unwrap();
/// assert_eq!(value.as_map().len(), 1);
/// assert_eq!(value["a"], Value::Int(41));
///
/// assert_eq!(from_str("").unwrap(), Value::Empty);
/// ```
///
/// # Errors
///
/// Returns a parse error (see [`Error::is_parse_error`]) with the position
/// of the offending input.
pub fn from_str(s: &str) -> Result<Value> {
    from_str_with_options(s, &ParseOptions::default())
}

/// Parses text into a tree under the given guards.
///
/// # Examples
///
/// ```rust
/// use jsontree::{from_str_with_options, Error, ParseOptions};
///
/// let options = ParseOptions::new().with_max_depth(1);
/// assert!(from_str_with_options("[1, 2]", &options).is_ok());
/// assert!(matches!(
///     from_str_with_options("[[1]]", &options),
///     Err(Error::RecursionLimitExceeded { limit: 1, .. })
/// ));
/// ```
///
/// # Errors
///
/// Returns [`Error::InputTooLarge`] before parsing when the input exceeds
/// `max_length`, [`Error::RecursionLimitExceeded`] when nesting exceeds
/// `max_depth`, and the other parse errors for malformed input.
pub fn from_str_with_options(s: &str, options: &ParseOptions) -> Result<Value> {
    de::parse(s, options)
}

/// Parses optional text; `None` yields [`Value::Empty`].
///
/// # Errors
///
/// Same as [`from_str`].
pub fn from_opt_str(s: Option<&str>) -> Result<Value> {
    match s {
        Some(s) => from_str(s),
        None => Ok(Value::Empty),
    }
}

/// Parses UTF-8 bytes into a tree.
///
/// # Errors
///
/// Returns [`Error::Custom`] if the bytes are not valid UTF-8, otherwise the
/// same errors as [`from_str`].
pub fn from_slice(v: &[u8]) -> Result<Value> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Reads all of `reader` and parses it into a tree.
///
/// # Examples
///
/// ```rust
/// use jsontree::from_reader;
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(b"{ x: 1, y: 2 }")).unwrap();
/// assert_eq!(value["y"].as_int(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise the same errors as
/// [`from_str`].
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Serializes a tree as compact JSON.
///
/// Floats without a fractional part print as integers, so `Float(1.0)`
/// writes `1` and reads back as `Int(1)`. The numeric value survives; use
/// [`Value::as_float`] to compare across the two kinds.
///
/// # Examples
///
/// ```rust
/// use jsontree::{from_str, to_string};
///
/// let value = from_str("{ a: [1, 'two'], b: null }").unwrap();
/// assert_eq!(to_string(&value), r#"{"a":[1,"two"],"b":null}"#);
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_string_with_options(value, &FormatOptions::compact())
}

/// Serializes a tree over multiple lines with two-space indentation.
///
/// # Examples
///
/// ```rust
/// use jsontree::{from_str, to_string_pretty};
///
/// let value = from_str("{ a: 1 }").unwrap();
/// assert_eq!(to_string_pretty(&value), "{ \n  \"a\": 1 \n}");
/// ```
#[must_use]
pub fn to_string_pretty(value: &Value) -> String {
    to_string_with_options(value, &FormatOptions::formatted_wrapped())
}

/// Serializes a tree under custom formatting options.
#[must_use]
pub fn to_string_with_options(value: &Value, options: &FormatOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize(value);
    let output = serializer.into_inner();
    log::trace!("serialized {} node tree to {} bytes", value.kind(), output.len());
    output
}

/// Writes a tree as compact JSON.
///
/// # Examples
///
/// ```rust
/// use jsontree::{to_writer, tree};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &tree!([1, 2])).unwrap();
/// assert_eq!(buffer, b"[1,2]");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, &FormatOptions::compact())
}

/// Writes a tree under custom formatting options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
pub fn to_writer_with_options<W>(mut writer: W, value: &Value, options: &FormatOptions) -> Result<()>
where
    W: io::Write,
{
    let text = to_string_with_options(value, options);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Converts any `T: Serialize` into a tree.
///
/// # Examples
///
/// ```rust
/// use jsontree::to_value;
/// use std::collections::BTreeMap;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("ann", vec![1, 2]);
/// let value = to_value(&scores).unwrap();
/// assert_eq!(value["ann"][1].as_int(), 2);
/// ```
///
/// # Errors
///
/// Returns [`Error::Custom`] if `T` fails to serialize or uses map keys
/// that are not strings, integers or booleans.
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Reads a `T: Deserialize` out of a tree.
///
/// # Errors
///
/// Returns [`Error::Custom`] if the tree does not have the shape `T` expects.
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
        manager: Option<Box<User>>,
    }

    #[test]
    fn test_typed_round_trip_through_text() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
            manager: None,
        };

        let text = to_string(&to_value(&user).unwrap());
        let user_back: User = from_value(from_str(&text).unwrap()).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_pretty_round_trip() {
        let value = to_value(&vec![Point { x: 1, y: 2 }, Point { x: -3, y: 4 }]).unwrap();
        let pretty = to_string_pretty(&value);
        assert!(pretty.contains('\n'));
        assert_eq!(from_str(&pretty).unwrap(), value);
    }

    #[test]
    fn test_from_opt_str() {
        assert_eq!(from_opt_str(None).unwrap(), Value::Empty);
        assert_eq!(from_opt_str(Some("[]")).unwrap(), Value::List(vec![]));
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        assert!(matches!(from_slice(&[b'[', 0xff, b']']), Err(Error::Custom(_))));
        assert_eq!(from_slice(b"true").unwrap(), Value::Bool(true));
    }

    struct FailingWriter;

    impl io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_to_writer_reports_io_errors() {
        let err = to_writer(FailingWriter, &Value::Int(1)).unwrap_err();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("disk full")));
    }

    #[test]
    fn test_to_writer_with_options() {
        let mut buffer = Vec::new();
        let value = from_str("{ a: 'x' }").unwrap();
        to_writer_with_options(&mut buffer, &value, &FormatOptions::readable()).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{ a: 'x' }");
    }

    #[test]
    fn test_from_value_type_mismatch() {
        let result: Result<Point> = from_value(Value::from("nope"));
        assert!(result.is_err());
    }
}

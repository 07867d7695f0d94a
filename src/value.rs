//! The tagged value tree and its coercion rules.
//!
//! This module provides the [`Value`] enum, the node type of a parsed document.
//! Every node holds exactly one of seven kinds ([`Kind`]); containers own
//! their children, so a tree has no sharing and no cycles.
//!
//! ## Reading values
//!
//! The `as_*` accessors never fail. They read a node as the requested type
//! whatever its stored kind, following a fixed table of conversions, and fall
//! back to a zero value (`0`, `false`, `""`, `0.0`) where no conversion is
//! defined:
//!
//! ```rust
//! use jsontree::{from_str, Value};
//!
//! let root = from_str("{ a: '41', b: 42, c: true, d: 3.14 }").unwrap();
//!
//! assert_eq!(root["a"].as_int(), 41);
//! assert_eq!(root["b"].as_string(), "42");
//! assert_eq!(root["c"].as_int(), 0);
//! assert!(root["d"].as_bool());
//! ```
//!
//! The `coerce_*` variants take a [`Coercion`] mode; in
//! [`Coercion::Strict`] the fallback path becomes a
//! [`TypeMismatch`](crate::Error::TypeMismatch) error instead.
//!
//! ## Missing data
//!
//! Indexing with a key or position that is not there yields a shared `Empty`
//! node instead of panicking, so lookups chain:
//!
//! ```rust
//! use jsontree::from_str;
//!
//! let root = from_str("[ 'first', { aNumber: 42 } ]").unwrap();
//! assert_eq!(root[1]["aNumber"].as_int(), 42);
//! assert_eq!(root[7]["nothing"][0].as_int(), 0);
//! ```

use crate::{Error, FormatOptions, Map, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops;
use std::str::FromStr;
use std::sync::OnceLock;

/// Returned by lookups that miss.
pub(crate) static EMPTY: Value = Value::Empty;

/// A node of the document tree.
///
/// # Examples
///
/// ```rust
/// use jsontree::{Kind, Value};
///
/// let list = Value::list(vec![Value::from("a"), Value::from(42)]);
/// assert_eq!(list.kind(), Kind::List);
/// assert_eq!(list[0].as_string(), "a");
/// assert_eq!(list[1].as_int(), 42);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Empty,
    List(Vec<Value>),
    Map(Map),
    Int(i64),
    Bool(bool),
    Str(String),
    Float(f64),
}

/// The kind of a [`Value`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Empty,
    List,
    Map,
    Int,
    Bool,
    Str,
    Float,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Empty => "Empty",
            Kind::List => "List",
            Kind::Map => "Map",
            Kind::Int => "Int",
            Kind::Bool => "Bool",
            Kind::Str => "Str",
            Kind::Float => "Float",
        };
        f.write_str(name)
    }
}

/// How the `coerce_*` accessors treat a conversion that is not defined.
///
/// # Examples
///
/// ```rust
/// use jsontree::{Coercion, Error, Kind, Value};
///
/// let value = Value::from("not a number");
/// assert_eq!(value.coerce_int(Coercion::Lenient).unwrap(), 0);
/// assert_eq!(
///     value.coerce_int(Coercion::Strict),
///     Err(Error::type_mismatch(Kind::Int, Kind::Str))
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Coercion {
    /// Return the zero value of the requested type.
    #[default]
    Lenient,
    /// Fail with [`Error::TypeMismatch`].
    Strict,
}

impl Coercion {
    fn fallback<T: Default>(self, expected: Kind, found: Kind) -> Result<T> {
        match self {
            Coercion::Lenient => Ok(T::default()),
            Coercion::Strict => Err(Error::type_mismatch(expected, found)),
        }
    }
}

/// Formats a float as the shortest text that parses back to the same value.
///
/// Fixed notation is used for decimal exponents in `-4..=14`, exponential
/// notation (`1.5E+20`, `1E-05`) outside it. The decimal point is always `.`.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    let exponent = scientific
        .split_once('e')
        .and_then(|(mantissa, exp)| exp.parse::<i32>().ok().map(|exp| (mantissa, exp)));

    match exponent {
        Some((mantissa, exp)) if !(-5 < exp && exp < 15) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}E{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        _ => value.to_string(),
    }
}

impl Value {
    /// Creates a node of the given kind holding its zero payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::{Kind, Value};
    ///
    /// assert_eq!(Value::new(Kind::Int), Value::Int(0));
    /// assert_eq!(Value::new(Kind::Str), Value::Str(String::new()));
    /// assert!(Value::new(Kind::Map).as_map().is_empty());
    /// ```
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Empty => Value::Empty,
            Kind::List => Value::List(Vec::new()),
            Kind::Map => Value::Map(Map::new()),
            Kind::Int => Value::Int(0),
            Kind::Bool => Value::Bool(false),
            Kind::Str => Value::Str(String::new()),
            Kind::Float => Value::Float(0.0),
        }
    }

    /// Creates a list node from its elements.
    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::List(elements.into_iter().collect())
    }

    /// Creates a map node from key-value pairs. Later duplicates overwrite
    /// earlier ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Value;
    ///
    /// let map = Value::map([("a", Value::from(1)), ("a", Value::from(2))]);
    /// assert_eq!(map.as_map().len(), 1);
    /// assert_eq!(map["a"].as_int(), 2);
    /// ```
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Value::Empty => Kind::Empty,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Int(_) => Kind::Int,
            Value::Bool(_) => Kind::Bool,
            Value::Str(_) => Kind::Str,
            Value::Float(_) => Kind::Float,
        }
    }

    /// Returns `true` if the node is the `Empty` kind (not an empty container).
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Reads the node as an integer.
    ///
    /// Strings are trimmed and parsed as base-10 `i64`; floats are truncated
    /// toward zero (saturating at the `i64` bounds, NaN reads as 0).
    ///
    /// # Errors
    ///
    /// In [`Coercion::Strict`] mode, returns [`Error::TypeMismatch`] for
    /// booleans, containers, `Empty`, and strings that are not integers.
    pub fn coerce_int(&self, mode: Coercion) -> Result<i64> {
        match self {
            Value::Int(i) => Ok(*i),
            Value::Float(f) => Ok(*f as i64),
            Value::Str(s) => match s.trim().parse::<i64>() {
                Ok(i) => Ok(i),
                Err(_) => mode.fallback(Kind::Int, Kind::Str),
            },
            other => mode.fallback(Kind::Int, other.kind()),
        }
    }

    /// Reads the node as a boolean.
    ///
    /// Numbers are `true` when non-zero; strings are `true` when they equal
    /// `"true"` ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// In [`Coercion::Strict`] mode, returns [`Error::TypeMismatch`] for
    /// containers and `Empty`.
    pub fn coerce_bool(&self, mode: Coercion) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            Value::Int(i) => Ok(*i != 0),
            Value::Float(f) => Ok(*f != 0.0),
            Value::Str(s) => Ok(s.eq_ignore_ascii_case("true")),
            other => mode.fallback(Kind::Bool, other.kind()),
        }
    }

    /// Reads the node as text.
    ///
    /// # Errors
    ///
    /// In [`Coercion::Strict`] mode, returns [`Error::TypeMismatch`] for
    /// containers and `Empty`.
    pub fn coerce_string(&self, mode: Coercion) -> Result<String> {
        match self {
            Value::Str(s) => Ok(s.clone()),
            Value::Int(i) => Ok(i.to_string()),
            Value::Float(f) => Ok(format_float(*f)),
            Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_string()),
            other => mode.fallback(Kind::Str, other.kind()),
        }
    }

    /// Reads the node as a float.
    ///
    /// # Errors
    ///
    /// In [`Coercion::Strict`] mode, returns [`Error::TypeMismatch`] for
    /// booleans, containers, `Empty`, and strings that are not numbers.
    pub fn coerce_float(&self, mode: Coercion) -> Result<f64> {
        match self {
            Value::Float(f) => Ok(*f),
            Value::Int(i) => Ok(*i as f64),
            Value::Str(s) => match s.trim().parse::<f64>() {
                Ok(f) => Ok(f),
                Err(_) => mode.fallback(Kind::Float, Kind::Str),
            },
            other => mode.fallback(Kind::Float, other.kind()),
        }
    }

    /// Reads the node as an integer, or 0. See [`Value::coerce_int`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Value;
    ///
    /// assert_eq!(Value::from("41000000000").as_int(), 41_000_000_000);
    /// assert_eq!(Value::from(-2.9).as_int(), -2);
    /// assert_eq!(Value::from("forty-one").as_int(), 0);
    /// ```
    #[must_use]
    pub fn as_int(&self) -> i64 {
        self.coerce_int(Coercion::Lenient).unwrap_or_default()
    }

    /// Reads the node as a boolean, or `false`. See [`Value::coerce_bool`].
    #[must_use]
    pub fn as_bool(&self) -> bool {
        self.coerce_bool(Coercion::Lenient).unwrap_or_default()
    }

    /// Reads the node as text, or `""`. See [`Value::coerce_string`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::Value;
    ///
    /// assert_eq!(Value::from(41).as_string(), "41");
    /// assert_eq!(Value::from(41.0).as_string(), "41");
    /// assert_eq!(Value::from(1e20).as_string(), "1E+20");
    /// assert_eq!(Value::from(false).as_string(), "false");
    /// ```
    #[must_use]
    pub fn as_string(&self) -> String {
        self.coerce_string(Coercion::Lenient).unwrap_or_default()
    }

    /// Reads the node as a float, or `0.0`. See [`Value::coerce_float`].
    #[must_use]
    pub fn as_float(&self) -> f64 {
        self.coerce_float(Coercion::Lenient).unwrap_or_default()
    }

    /// Borrows the text of a `Str` node.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The elements of a list node; an empty slice for any other kind.
    #[must_use]
    pub fn as_list(&self) -> &[Value] {
        match self {
            Value::List(list) => list,
            _ => &[],
        }
    }

    /// The entries of a map node; a shared empty map for any other kind.
    #[must_use]
    pub fn as_map(&self) -> &Map {
        static EMPTY_MAP: OnceLock<Map> = OnceLock::new();
        match self {
            Value::Map(map) => map,
            _ => EMPTY_MAP.get_or_init(Map::new),
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a map key or list position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::{from_str, Value};
    ///
    /// let root = from_str("{ a: [41, 42] }").unwrap();
    /// assert_eq!(root.get("a").and_then(|a| a.get(1)), Some(&Value::Int(42)));
    /// assert_eq!(root.get("b"), None);
    /// assert_eq!(root.get(0), None);
    /// ```
    pub fn get<I: Index>(&self, index: I) -> Option<&Value> {
        index.index_into(self)
    }

    pub fn get_mut<I: Index>(&mut self, index: I) -> Option<&mut Value> {
        index.index_into_mut(self)
    }

    /// Looks up a map key or list position, returning the shared `Empty`
    /// node on a miss. Nothing is inserted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::from_str;
    ///
    /// let root = from_str("[41, 42]").unwrap();
    /// assert_eq!(root.get_or_empty(0).as_int(), 41);
    /// assert_eq!(root.get_or_empty(2).as_int(), 0);
    /// assert_eq!(root.as_list().len(), 2);
    /// ```
    pub fn get_or_empty<I: Index>(&self, index: I) -> &Value {
        index.index_into(self).unwrap_or(&EMPTY)
    }

    /// Serializes with [`FormatOptions::compact`].
    #[must_use]
    pub fn to_json(&self) -> String {
        crate::to_string(self)
    }
}

/// A type that can look up a child of a [`Value`]: `usize` for list
/// positions, `str`/`String` for map keys.
///
/// This trait is sealed.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value>;
}

impl Index for usize {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::List(list) => list.get(*self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        match value {
            Value::List(list) => list.get_mut(*self),
            _ => None,
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        match value {
            Value::Map(map) => map.get(self),
            _ => None,
        }
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        match value {
            Value::Map(map) => map.get_mut(self),
            _ => None,
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        self.as_str().index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        self.as_str().index_into_mut(value)
    }
}

impl<T> Index for &T
where
    T: ?Sized + Index,
{
    fn index_into<'v>(&self, value: &'v Value) -> Option<&'v Value> {
        (**self).index_into(value)
    }

    fn index_into_mut<'v>(&self, value: &'v mut Value) -> Option<&'v mut Value> {
        (**self).index_into_mut(value)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}

impl<I: Index> ops::Index<I> for Value {
    type Output = Value;

    fn index(&self, index: I) -> &Value {
        self.get_or_empty(index)
    }
}

/// Writes the readable notation: bare keys, single-quoted strings.
///
/// # Examples
///
/// ```rust
/// use jsontree::from_str;
///
/// let value = from_str(r#"{"a":"x","b":[1,2]}"#).unwrap();
/// assert_eq!(value.to_string(), "{ a: 'x', b: [ 1, 2 ] }");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string_with_options(
            self,
            &FormatOptions::readable(),
        ))
    }
}

impl FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::from_str(s)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Empty => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(list) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(list.len()))?;
                for element in list {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                use serde::ser::SerializeMap;
                let mut entries = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    entries.serialize_entry(k, v)?;
                }
                entries.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any tree value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Int(i)),
                    Err(_) => Ok(Value::Float(value as f64)),
                }
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Float(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::Str(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::Str(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Empty)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Empty)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut list = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    list.push(elem);
                }
                Ok(Value::List(list))
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = Map::new();
                while let Some((key, value)) = access.next_entry()? {
                    map.insert(key, value);
                }
                Ok(Value::Map(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::List(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Empty, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Value::Map(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_coercion() {
        assert_eq!(Value::Int(41).as_int(), 41);
        assert_eq!(Value::from("41").as_int(), 41);
        assert_eq!(Value::from(" -41 ").as_int(), -41);
        assert_eq!(Value::from("41.5").as_int(), 0);
        assert_eq!(Value::Float(2.99).as_int(), 2);
        assert_eq!(Value::Float(-2.99).as_int(), -2);
        assert_eq!(Value::Float(f64::NAN).as_int(), 0);
        assert_eq!(Value::Float(1e300).as_int(), i64::MAX);
        assert_eq!(Value::Bool(true).as_int(), 0);
        assert_eq!(Value::Empty.as_int(), 0);
    }

    #[test]
    fn test_bool_coercion() {
        assert!(Value::Int(-1).as_bool());
        assert!(!Value::Int(0).as_bool());
        assert!(Value::Float(0.1).as_bool());
        assert!(!Value::Float(0.0).as_bool());
        assert!(Value::from("TRUE").as_bool());
        assert!(Value::from("True").as_bool());
        assert!(!Value::from("yes").as_bool());
        assert!(!Value::list(vec![Value::Bool(true)]).as_bool());
    }

    #[test]
    fn test_string_coercion() {
        assert_eq!(Value::Int(41_000_000_000).as_string(), "41000000000");
        assert_eq!(Value::Float(3.14159265358979).as_string(), "3.14159265358979");
        assert_eq!(Value::Bool(true).as_string(), "true");
        assert_eq!(Value::Empty.as_string(), "");
        assert_eq!(Value::new(Kind::Map).as_string(), "");
    }

    #[test]
    fn test_float_coercion() {
        assert_eq!(Value::Int(41).as_float(), 41.0);
        assert_eq!(
            Value::from("3.14159265358979323").as_float(),
            3.14159265358979323
        );
        assert_eq!(Value::from("1.5E+3").as_float(), 1500.0);
        assert_eq!(Value::from("3,14").as_float(), 0.0);
        assert_eq!(Value::Bool(true).as_float(), 0.0);
    }

    #[test]
    fn test_strict_coercion() {
        assert_eq!(Value::Int(1).coerce_int(Coercion::Strict), Ok(1));
        assert_eq!(
            Value::Bool(true).coerce_int(Coercion::Strict),
            Err(Error::type_mismatch(Kind::Int, Kind::Bool))
        );
        assert_eq!(
            Value::Empty.coerce_string(Coercion::Strict),
            Err(Error::type_mismatch(Kind::Str, Kind::Empty))
        );
        assert_eq!(
            Value::new(Kind::List).coerce_bool(Coercion::Strict),
            Err(Error::type_mismatch(Kind::Bool, Kind::List))
        );
        assert_eq!(
            Value::from("x").coerce_float(Coercion::Strict),
            Err(Error::type_mismatch(Kind::Float, Kind::Str))
        );
        assert_eq!(Value::from("x").coerce_bool(Coercion::Strict), Ok(false));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(1.11), "1.11");
        assert_eq!(format_float(1.0), "1");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(0.0), "0");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1E-05");
        assert_eq!(format_float(1e14), "100000000000000");
        assert_eq!(format_float(1e15), "1E+15");
        assert_eq!(format_float(-1.5e300), "-1.5E+300");
        assert_eq!(format_float(f64::NAN), "NaN");
        assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_int_and_float_agree() {
        for n in [0i64, 1, -7, 42, 123_456_789] {
            let int = Value::Int(n);
            let float = Value::Float(n as f64);
            assert_eq!(int.as_string(), float.as_string());
            assert_eq!(int.as_bool(), float.as_bool());
            assert_eq!(int.as_int(), float.as_int());
        }
    }

    #[test]
    fn test_sentinel_lookups() {
        let mut map = Map::new();
        map.insert("a".to_string(), Value::Int(41));
        let value = Value::Map(map);

        assert_eq!(value["a"].as_int(), 41);
        assert!(value["b"].is_empty());
        assert!(value[0].is_empty());
        assert_eq!(value.as_map().len(), 1);
        assert!(Value::Int(3)["x"].is_empty());
        assert!(Value::Int(3).as_list().is_empty());
        assert!(Value::Int(3).as_map().is_empty());
    }

    #[test]
    fn test_mutation_through_accessors() {
        let mut value = Value::new(Kind::List);
        if let Some(list) = value.as_list_mut() {
            list.push(Value::from("x"));
        }
        if let Some(first) = value.get_mut(0) {
            *first = Value::from("y");
        }
        assert_eq!(value[0].as_string(), "y");
        assert!(Value::Int(1).as_map_mut().is_none());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42u8), Value::Int(42));
        assert_eq!(Value::from(2.5f32), Value::Float(2.5));
        assert_eq!(Value::from(None::<i32>), Value::Empty);
        assert_eq!(Value::from(Some("s")), Value::Str("s".to_string()));

        let list: Value = (1..=3).map(Value::from).collect();
        assert_eq!(list.as_list().len(), 3);

        let map: Value = vec![("k".to_string(), Value::from(1))]
            .into_iter()
            .collect();
        assert_eq!(map["k"].as_int(), 1);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(Kind::Str.to_string(), "Str");
        assert_eq!(Value::Float(1.0).kind(), Kind::Float);
    }
}

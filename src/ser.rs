//! Turning a [`Value`] tree into text, and Rust values into trees.
//!
//! [`Serializer`] writes a tree under a [`FormatOptions`]. The output is a
//! pure function of the tree and the options:
//!
//! ```rust
//! use jsontree::{from_str, FormatOptions, Serializer};
//!
//! let value = from_str("{ a: [1, 2], b: 'x' }").unwrap();
//!
//! let options = FormatOptions::formatted();
//! let mut serializer = Serializer::new(&options);
//! serializer.serialize(&value);
//! assert_eq!(serializer.into_inner(), r#"{ "a": [ 1, 2 ], "b": "x" }"#);
//! ```
//!
//! Strings are escaped only by prefixing each occurrence of the active quote
//! with a backslash. Backslashes and control characters are written as they
//! are, so text containing them is not valid JSON after compact
//! serialization.
//!
//! [`ValueSerializer`] goes the other way: it is a serde `Serializer` whose
//! output is a [`Value`].

use crate::value::format_float;
use crate::{Error, FormatOptions, Map, Result, Value};
use serde::{ser, Serialize};

/// Writes [`Value`] trees as text.
pub struct Serializer<'o> {
    output: String,
    options: &'o FormatOptions,
    indent_level: usize,
}

impl<'o> Serializer<'o> {
    pub fn new(options: &'o FormatOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends the text of `value` to the output.
    pub fn serialize(&mut self, value: &Value) {
        match value {
            Value::Empty => self.output.push_str("null"),
            Value::Bool(true) => self.output.push_str("true"),
            Value::Bool(false) => self.output.push_str("false"),
            Value::Int(i) => self.output.push_str(&i.to_string()),
            Value::Float(f) => self.output.push_str(&format_float(*f)),
            Value::Str(s) => {
                let quote = self.options.string_quote.as_str();
                write_quoted(&mut self.output, s, quote);
            }
            Value::List(list) => self.write_list(list),
            Value::Map(map) => self.write_map(map),
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.output.push_str(&self.options.indent_unit);
        }
    }

    fn push_space_if(&mut self, enabled: bool) {
        if enabled {
            self.output.push(' ');
        }
    }

    fn write_list(&mut self, list: &[Value]) {
        let options = self.options;
        self.output.push('[');

        if !list.is_empty() {
            self.push_space_if(options.space_after_list_bracket);
            if options.indent_list_body {
                self.output.push('\n');
                self.indent_level += 1;
            }

            for (i, element) in list.iter().enumerate() {
                if i > 0 {
                    self.push_space_if(options.space_before_list_comma);
                    self.output.push(',');
                    self.push_space_if(options.space_after_list_comma);
                    if options.newline_after_list_element {
                        self.output.push('\n');
                    }
                }
                if options.indent_list_body {
                    self.write_indent();
                }
                self.serialize(element);
            }

            self.push_space_if(options.space_before_list_bracket);
            if options.indent_list_body {
                self.output.push('\n');
                self.indent_level -= 1;
                self.write_indent();
            }
        }

        self.output.push(']');
    }

    fn write_map(&mut self, map: &Map) {
        let options = self.options;
        self.output.push('{');

        if !map.is_empty() {
            self.push_space_if(options.space_after_map_brace);
            if options.indent_map_body {
                self.output.push('\n');
                self.indent_level += 1;
            }

            for (i, (key, value)) in map.iter().enumerate() {
                if i > 0 {
                    self.push_space_if(options.space_before_map_comma);
                    self.output.push(',');
                    self.push_space_if(options.space_after_map_comma);
                    if options.newline_after_map_entry {
                        self.output.push('\n');
                    }
                }
                if options.indent_map_body {
                    self.write_indent();
                }
                write_quoted(&mut self.output, key, &options.key_quote);
                self.push_space_if(options.space_before_map_colon);
                self.output.push(':');
                self.push_space_if(options.space_after_map_colon);
                self.serialize(value);
            }

            self.push_space_if(options.space_before_map_brace);
            if options.indent_map_body {
                self.output.push('\n');
                self.indent_level -= 1;
                self.write_indent();
            }
        }

        self.output.push('}');
    }
}

/// Writes `text` between two `quote`s, escaping each inner `quote` as
/// `\` + quote. An empty quote writes `text` unchanged.
fn write_quoted(output: &mut String, text: &str, quote: &str) {
    if quote.is_empty() {
        output.push_str(text);
        return;
    }

    output.push_str(quote);
    let mut rest = text;
    while let Some(at) = rest.find(quote) {
        output.push_str(&rest[..at]);
        output.push('\\');
        output.push_str(quote);
        rest = &rest[at + quote.len()..];
    }
    output.push_str(rest);
    output.push_str(quote);
}

/// A serde `Serializer` that builds a [`Value`].
///
/// Enum variants are externally tagged: a unit variant becomes its name, any
/// other variant a single-entry map from the name to its content.
///
/// # Examples
///
/// ```rust
/// use jsontree::{Value, ValueSerializer};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = Point { x: 1, y: 2 }.serialize(ValueSerializer).unwrap();
/// assert_eq!(value["y"], Value::Int(2));
/// ```
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: String,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: String,
    map: Map,
}

fn tagged(name: &str, content: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(name.to_string(), content);
    Value::Map(map)
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Int(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Int(i)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::List(v.iter().map(|&b| Value::Int(i64::from(b))).collect()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Empty)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Empty)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Empty)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Str(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant.to_string(),
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: Map::new(),
            current_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap {
            map: Map::with_capacity(len),
            current_key: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant.to_string(),
            map: Map::with_capacity(len),
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(&self.name, Value::List(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = match to_value(key)? {
            Value::Str(s) => s,
            Value::Int(i) => i.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::custom(format!(
                    "Map keys must be strings, found {}",
                    other.kind()
                )))
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(&self.name, Value::Map(self.map)))
    }
}

fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_str;
    use std::collections::BTreeMap;

    fn render(value: &Value, options: &FormatOptions) -> String {
        let mut serializer = Serializer::new(options);
        serializer.serialize(value);
        serializer.into_inner()
    }

    #[test]
    fn test_scalars() {
        let options = FormatOptions::compact();
        assert_eq!(render(&Value::Empty, &options), "null");
        assert_eq!(render(&Value::Bool(true), &options), "true");
        assert_eq!(render(&Value::Int(-42), &options), "-42");
        assert_eq!(render(&Value::Float(1.11), &options), "1.11");
        assert_eq!(render(&Value::Float(2.0), &options), "2");
        assert_eq!(render(&Value::from("x"), &options), "\"x\"");
    }

    #[test]
    fn test_compact() {
        let value = from_str(r#"{a:"a", b:1, c:true, d:1.11, e:["e1","e2"], f:{f1:"f1", f2:"f2"}}"#)
            .unwrap();
        assert_eq!(
            render(&value, &FormatOptions::compact()),
            r#"{"a":"a","b":1,"c":true,"d":1.11,"e":["e1","e2"],"f":{"f1":"f1","f2":"f2"}}"#
        );
    }

    #[test]
    fn test_formatted_wrapped() {
        let value = from_str("{a:1,b:[1,2]}").unwrap();
        let options = FormatOptions::formatted_wrapped().with_key_quote("");
        assert_eq!(
            render(&value, &options),
            "{ \n  a: 1, \n  b: [ \n    1, \n    2 \n  ] \n}"
        );
    }

    #[test]
    fn test_empty_containers_have_no_spacing() {
        let value = from_str("{ a: [], b: {} }").unwrap();
        assert_eq!(
            render(&value, &FormatOptions::formatted_wrapped()),
            "{ \n  \"a\": [], \n  \"b\": {} \n}"
        );
        assert_eq!(render(&Value::List(vec![]), &FormatOptions::formatted()), "[]");
    }

    #[test]
    fn test_every_spacing_toggle() {
        let value = from_str("{ a: [1, 2], b: 3 }").unwrap();
        let options = FormatOptions {
            space_before_map_colon: true,
            space_before_list_comma: true,
            space_before_map_comma: true,
            ..FormatOptions::formatted()
        };
        assert_eq!(
            render(&value, &options),
            r#"{ "a" : [ 1 , 2 ] , "b" : 3 }"#
        );
    }

    #[test]
    fn test_quote_escaping() {
        let value = Value::from(r#"b'c b"c"#);
        assert_eq!(
            render(&value, &FormatOptions::compact()),
            r#""b'c b\"c""#
        );
        assert_eq!(
            render(&value, &FormatOptions::readable()),
            r#"'b\'c b"c'"#
        );
    }

    #[test]
    fn test_backslashes_pass_through() {
        let value = Value::from("C:\\temp\n");
        assert_eq!(render(&value, &FormatOptions::compact()), "\"C:\\temp\n\"");
    }

    #[test]
    fn test_empty_key_quote_does_not_escape() {
        let mut map = Map::new();
        map.insert("it's".to_string(), Value::from(1));
        let value = Value::Map(map);
        let options = FormatOptions::compact().with_key_quote("");
        assert_eq!(render(&value, &options), "{it's:1}");
    }

    #[test]
    fn test_multichar_quote() {
        let options = FormatOptions::compact().with_string_quote("''");
        assert_eq!(render(&Value::from("a''b"), &options), r"''a\''b''");
    }

    #[test]
    fn test_custom_indent_unit() {
        let value = from_str("[[1]]").unwrap();
        let options = FormatOptions::compact().with_indent_unit("\t");
        let options = FormatOptions {
            indent_list_body: true,
            newline_after_list_element: true,
            ..options
        };
        assert_eq!(render(&value, &options), "[\n\t[\n\t\t1\n\t]\n]");
    }

    #[derive(Serialize)]
    struct Config {
        name: String,
        retries: u8,
        ratio: f32,
        tags: Vec<&'static str>,
        parent: Option<u64>,
        mode: Mode,
    }

    #[derive(Serialize)]
    enum Mode {
        Fast,
        Limited(u32),
        Window { from: i32, to: i32 },
        Pair(i32, i32),
    }

    #[test]
    fn test_value_serializer_struct() {
        let config = Config {
            name: "main".to_string(),
            retries: 3,
            ratio: 0.5,
            tags: vec!["a", "b"],
            parent: None,
            mode: Mode::Fast,
        };
        let value = to_value(&config).unwrap();
        assert_eq!(
            crate::to_string(&value),
            r#"{"name":"main","retries":3,"ratio":0.5,"tags":["a","b"],"parent":null,"mode":"Fast"}"#
        );
    }

    #[test]
    fn test_value_serializer_variants() {
        assert_eq!(
            crate::to_string(&to_value(&Mode::Limited(5)).unwrap()),
            r#"{"Limited":5}"#
        );
        assert_eq!(
            crate::to_string(&to_value(&Mode::Window { from: 1, to: 2 }).unwrap()),
            r#"{"Window":{"from":1,"to":2}}"#
        );
        assert_eq!(
            crate::to_string(&to_value(&Mode::Pair(1, 2)).unwrap()),
            r#"{"Pair":[1,2]}"#
        );
    }

    #[test]
    fn test_value_serializer_large_u64() {
        assert_eq!(to_value(&u64::MAX).unwrap(), Value::Float(u64::MAX as f64));
        assert_eq!(to_value(&7u64).unwrap(), Value::Int(7));
    }

    #[test]
    fn test_value_serializer_integer_keys() {
        let mut map = BTreeMap::new();
        map.insert(2, "two");
        map.insert(1, "one");
        let value = to_value(&map).unwrap();
        assert_eq!(crate::to_string(&value), r#"{"1":"one","2":"two"}"#);
    }
}

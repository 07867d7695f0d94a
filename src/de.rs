//! Parsing text into a [`Value`] tree, and reading trees back into Rust types.
//!
//! The parser accepts standard JSON plus a relaxed superset:
//!
//! - strings in single or double quotes, where a backslash escapes the
//!   opening quote character
//! - bare (unquoted) map keys
//! - bare words as values: `true`, `false`, `null`, numbers, and anything
//!   else as a string
//!
//! ```rust
//! use jsontree::{from_str, Value};
//!
//! let root = from_str("{ name: 'Ada', tags: [math, 'engines'], born: 1815 }").unwrap();
//! assert_eq!(root["name"].as_string(), "Ada");
//! assert_eq!(root["tags"][0], Value::Str("math".to_string()));
//! assert_eq!(root["born"], Value::Int(1815));
//! ```
//!
//! [`ValueDeserializer`] drives serde's `Deserialize` from an already parsed
//! tree; [`from_value`](crate::from_value) is the usual entry point.

use crate::lex::{Lexer, Token};
use crate::{Error, Map, ParseOptions, Position, Result, Value};
use serde::de::IntoDeserializer;
use serde::{de, forward_to_deserialize_any};

/// Parses a complete document.
///
/// The length guard runs before any lexing. Empty or whitespace-only input
/// yields [`Value::Empty`].
pub(crate) fn parse(input: &str, options: &ParseOptions) -> Result<Value> {
    log::trace!("parsing {} bytes", input.len());

    if let Some(max) = options.max_length {
        if input.len() > max {
            log::debug!("rejecting input of {} bytes (max_length {})", input.len(), max);
            return Err(Error::input_too_large(input.len(), max));
        }
    }

    Parser::new(input, options).parse_document()
}

/// Recursive descent parser over the token stream.
struct Parser<'t> {
    lexer: Lexer<'t>,
    max_depth: Option<usize>,
    depth: usize,
}

impl<'t> Parser<'t> {
    fn new(input: &'t str, options: &ParseOptions) -> Self {
        Parser {
            lexer: Lexer::new(input),
            max_depth: options.max_depth,
            depth: 0,
        }
    }

    fn parse_document(mut self) -> Result<Value> {
        let value = match self.lexer.next_token()? {
            None => return Ok(Value::Empty),
            Some((token, pos)) => self.parse_value(token, pos)?,
        };

        match self.lexer.next_token()? {
            None => Ok(value),
            Some((token, pos)) => Err(Error::unexpected_token(
                pos,
                "end of input",
                &token.describe(),
            )),
        }
    }

    fn parse_value(&mut self, token: Token<'t>, pos: Position) -> Result<Value> {
        match token {
            Token::BeginMap => self.parse_map(pos),
            Token::BeginList => self.parse_list(pos),
            Token::Quoted(text) => Ok(Value::Str(text.into_owned())),
            Token::Bare(word) => Ok(parse_word(word)),
            other => Err(Error::unexpected_token(pos, "value", &other.describe())),
        }
    }

    /// Next token inside a structure opened at `open`; end of input there is
    /// an unterminated structure.
    fn next_inside(&mut self, open: Position, closing: char) -> Result<(Token<'t>, Position)> {
        match self.lexer.next_token()? {
            Some(next) => Ok(next),
            None => Err(Error::unterminated_structure(open, closing)),
        }
    }

    fn enter(&mut self, open: Position) -> Result<()> {
        self.depth += 1;
        if let Some(limit) = self.max_depth {
            if self.depth > limit {
                log::debug!("nesting limit {} exceeded at {}", limit, open);
                return Err(Error::recursion_limit(open, limit));
            }
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_map(&mut self, open: Position) -> Result<Value> {
        self.enter(open)?;
        let mut map = Map::new();

        let (mut token, mut pos) = self.next_inside(open, '}')?;
        if !matches!(token, Token::EndMap) {
            loop {
                let key = match token {
                    Token::Quoted(text) => text.into_owned(),
                    Token::Bare(word) => word.to_string(),
                    other => return Err(Error::unexpected_token(pos, "key", &other.describe())),
                };

                let (colon, colon_pos) = self.next_inside(open, '}')?;
                if !matches!(colon, Token::Colon) {
                    return Err(Error::unexpected_token(colon_pos, "':'", &colon.describe()));
                }

                let (value_token, value_pos) = self.next_inside(open, '}')?;
                let value = self.parse_value(value_token, value_pos)?;
                map.insert(key, value);

                let (separator, separator_pos) = self.next_inside(open, '}')?;
                match separator {
                    Token::Comma => (token, pos) = self.next_inside(open, '}')?,
                    Token::EndMap => break,
                    other => {
                        return Err(Error::unexpected_token(
                            separator_pos,
                            "',' or '}'",
                            &other.describe(),
                        ))
                    }
                }
            }
        }

        self.leave();
        Ok(Value::Map(map))
    }

    fn parse_list(&mut self, open: Position) -> Result<Value> {
        self.enter(open)?;
        let mut list = Vec::new();

        let (mut token, mut pos) = self.next_inside(open, ']')?;
        if !matches!(token, Token::EndList) {
            loop {
                list.push(self.parse_value(token, pos)?);

                let (separator, separator_pos) = self.next_inside(open, ']')?;
                match separator {
                    Token::Comma => (token, pos) = self.next_inside(open, ']')?,
                    Token::EndList => break,
                    other => {
                        return Err(Error::unexpected_token(
                            separator_pos,
                            "',' or ']'",
                            &other.describe(),
                        ))
                    }
                }
            }
        }

        self.leave();
        Ok(Value::List(list))
    }
}

/// Classifies a bare word: keyword, number, or plain string.
///
/// A float literal outside the `f64` range stays a string, so the tree never
/// holds an infinity that compact output could not write back as a number.
fn parse_word(word: &str) -> Value {
    match word {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Empty,
        _ => match number_shape(word) {
            Some(NumberShape::Int) => Value::Int(parse_wrapping_int(word)),
            Some(NumberShape::Float) => match word.parse::<f64>() {
                Ok(number) if number.is_finite() => Value::Float(number),
                _ => Value::Str(word.to_string()),
            },
            None => Value::Str(word.to_string()),
        },
    }
}

#[derive(Debug, PartialEq)]
enum NumberShape {
    Int,
    Float,
}

/// Matches `-?digits(.digits?)?` or `-?.digits`, followed by an optional
/// `[eE][+-]?digits` exponent.
fn number_shape(word: &str) -> Option<NumberShape> {
    let bytes = word.as_bytes();
    let mut i = 0;

    if bytes.first() == Some(&b'-') {
        i += 1;
    }

    let mut digits = 0;
    let mut fraction = false;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' if !fraction => fraction = true,
            _ => break,
        }
        i += 1;
    }
    if digits == 0 {
        return None;
    }

    let mut exponent = false;
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let start = i;
        while bytes.get(i).map_or(false, u8::is_ascii_digit) {
            i += 1;
        }
        if i == start {
            return None;
        }
        exponent = true;
    }

    if i != bytes.len() {
        return None;
    }

    if fraction || exponent {
        Some(NumberShape::Float)
    } else {
        Some(NumberShape::Int)
    }
}

/// Accumulates decimal digits in 64 bits; out-of-range input wraps around.
fn parse_wrapping_int(word: &str) -> i64 {
    let (negative, digits) = match word.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, word),
    };
    let magnitude = digits.bytes().fold(0i64, |acc, b| {
        acc.wrapping_mul(10).wrapping_add(i64::from(b - b'0'))
    });
    if negative {
        magnitude.wrapping_neg()
    } else {
        magnitude
    }
}

/// A serde `Deserializer` that consumes a [`Value`].
///
/// # Examples
///
/// ```rust
/// use jsontree::{from_str, ValueDeserializer};
/// use serde::Deserialize;
///
/// let value = from_str("[1, 2, 3]").unwrap();
/// let numbers = Vec::<u8>::deserialize(ValueDeserializer::new(value)).unwrap();
/// assert_eq!(numbers, vec![1, 2, 3]);
/// ```
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Empty => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Int(i) => visitor.visit_i64(i),
            Value::Float(f) => visitor.visit_f64(f),
            Value::Str(s) => visitor.visit_string(s),
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list)),
            Value::Map(map) => visitor.visit_map(MapDeserializer::new(map)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Empty => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Str(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Map(map) => {
                let mut entries = map.into_iter();
                match (entries.next(), entries.next()) {
                    (Some((variant, value)), None) => {
                        visitor.visit_enum(EnumDeserializer::new(variant, value))
                    }
                    _ => Err(Error::custom("Expected a map with a single variant key")),
                }
            }
            other => Err(Error::custom(format!(
                "Expected enum, found {}",
                other.kind()
            ))),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::Str(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl EnumDeserializer {
    fn new(variant: String, value: Value) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::Str(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Value,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Value::Empty => Ok(()),
            _ => Err(Error::custom("Expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        seed.deserialize(ValueDeserializer::new(self.value))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::List(list) => visitor.visit_seq(SeqDeserializer::new(list)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Map(map) => visitor.visit_map(MapDeserializer::new(map)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}

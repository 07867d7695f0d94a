//! Configuration for parsing and serialization.
//!
//! - [`ParseOptions`]: depth and length guards for the parser
//! - [`FormatOptions`]: flat set of formatting toggles for the serializer
//!
//! Both are plain structs with public fields. Nothing is read from the
//! environment and nothing is global: the same tree serialized with the same
//! options always produces the same text.
//!
//! ## Examples
//!
//! ```rust
//! use jsontree::{from_str_with_options, to_string_with_options, FormatOptions, ParseOptions};
//!
//! let options = ParseOptions::new().with_max_depth(8).with_max_length(4096);
//! let value = from_str_with_options("{ a: ['x', 'y'] }", &options).unwrap();
//!
//! let text = to_string_with_options(&value, &FormatOptions::compact().with_string_quote("'"));
//! assert_eq!(text, r#"{"a":['x','y']}"#);
//! ```

/// Guards applied by the parser.
///
/// Unset limits mean "unbounded". The depth counter is explicit, so a limit
/// behaves the same on every platform regardless of stack size.
///
/// Without `max_depth` the parser recurses once per nesting level, and
/// hostile input hundreds of thousands of levels deep exhausts the thread's
/// stack. Set a depth limit when parsing untrusted text.
///
/// # Examples
///
/// ```rust
/// use jsontree::ParseOptions;
///
/// let options = ParseOptions::new().with_max_depth(110);
/// assert_eq!(options.max_depth, Some(110));
/// assert_eq!(options.max_length, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting of objects and arrays. A scalar document has depth 0,
    /// `[]` has depth 1.
    pub max_depth: Option<usize>,
    /// Maximum input length in bytes, checked before parsing begins.
    pub max_length: Option<usize>,
}

impl ParseOptions {
    /// Creates options with no limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    #[must_use]
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Formatting toggles for the serializer.
///
/// Every field is independent. The "brace" and "bracket" spacing fields are
/// named from the point of view of the body: `space_after_map_brace` is the
/// space after the opening `{`, `space_before_map_brace` the space before the
/// closing `}`. Spacing inside brackets is skipped for empty containers.
///
/// Four presets cover the common cases:
///
/// | preset                | spacing | newlines/indent | keys  | strings |
/// |-----------------------|---------|-----------------|-------|---------|
/// | [`compact`]           | none    | no              | `"`   | `"`     |
/// | [`formatted`]         | yes     | no              | `"`   | `"`     |
/// | [`formatted_wrapped`] | yes     | yes             | `"`   | `"`     |
/// | [`readable`]          | yes     | no              | none  | `'`     |
///
/// [`compact`]: FormatOptions::compact
/// [`formatted`]: FormatOptions::formatted
/// [`formatted_wrapped`]: FormatOptions::formatted_wrapped
/// [`readable`]: FormatOptions::readable
///
/// # Examples
///
/// ```rust
/// use jsontree::{from_str, to_string_with_options, FormatOptions};
///
/// let value = from_str("{ a: 1, b: [true] }").unwrap();
///
/// let mut options = FormatOptions::compact();
/// options.space_after_map_colon = true;
/// options.key_quote = String::new();
/// assert_eq!(to_string_with_options(&value, &options), "{a: 1,b: [true]}");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub space_before_map_colon: bool,
    pub space_after_map_colon: bool,
    /// Space before the closing `}` of a non-empty map.
    pub space_before_map_brace: bool,
    /// Space after the opening `{` of a non-empty map.
    pub space_after_map_brace: bool,
    pub space_before_list_comma: bool,
    pub space_after_list_comma: bool,
    /// Space before the closing `]` of a non-empty list.
    pub space_before_list_bracket: bool,
    /// Space after the opening `[` of a non-empty list.
    pub space_after_list_bracket: bool,
    pub space_before_map_comma: bool,
    pub space_after_map_comma: bool,
    pub newline_after_map_entry: bool,
    pub newline_after_list_element: bool,
    pub indent_map_body: bool,
    pub indent_list_body: bool,
    /// Repeated once per nesting level when a body is indented.
    pub indent_unit: String,
    /// Written around map keys. May be empty for unquoted keys.
    pub key_quote: String,
    /// Written around string values.
    pub string_quote: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            space_before_map_colon: false,
            space_after_map_colon: false,
            space_before_map_brace: false,
            space_after_map_brace: false,
            space_before_list_comma: false,
            space_after_list_comma: false,
            space_before_list_bracket: false,
            space_after_list_bracket: false,
            space_before_map_comma: false,
            space_after_map_comma: false,
            newline_after_map_entry: false,
            newline_after_list_element: false,
            indent_map_body: false,
            indent_list_body: false,
            indent_unit: String::new(),
            key_quote: "\"".to_string(),
            string_quote: "\"".to_string(),
        }
    }
}

impl FormatOptions {
    /// Same as [`FormatOptions::compact`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimal JSON: no inserted whitespace, double-quoted keys and strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::FormatOptions;
    ///
    /// let options = FormatOptions::compact();
    /// assert!(!options.space_after_map_colon);
    /// assert_eq!(options.key_quote, "\"");
    /// ```
    #[must_use]
    pub fn compact() -> Self {
        Self::default()
    }

    /// Single-line output with a space after every colon and comma and
    /// inside non-empty brackets.
    #[must_use]
    pub fn formatted() -> Self {
        FormatOptions {
            space_after_map_colon: true,
            space_after_list_comma: true,
            space_after_map_comma: true,
            space_before_list_bracket: true,
            space_after_list_bracket: true,
            space_before_map_brace: true,
            space_after_map_brace: true,
            ..Default::default()
        }
    }

    /// [`FormatOptions::formatted`] spread over multiple lines, one entry per
    /// line, bodies indented by two spaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::FormatOptions;
    ///
    /// let options = FormatOptions::formatted_wrapped();
    /// assert!(options.indent_map_body && options.newline_after_list_element);
    /// assert_eq!(options.indent_unit, "  ");
    /// ```
    #[must_use]
    pub fn formatted_wrapped() -> Self {
        FormatOptions {
            newline_after_map_entry: true,
            newline_after_list_element: true,
            indent_map_body: true,
            indent_list_body: true,
            indent_unit: "  ".to_string(),
            ..Self::formatted()
        }
    }

    /// JavaScript-style notation for humans: formatted spacing, bare keys,
    /// single-quoted strings. This is what `Display` for `Value` uses.
    #[must_use]
    pub fn readable() -> Self {
        FormatOptions {
            key_quote: String::new(),
            string_quote: "'".to_string(),
            ..Self::formatted()
        }
    }

    /// Sets the string repeated per indentation level.
    #[must_use]
    pub fn with_indent_unit(mut self, unit: &str) -> Self {
        self.indent_unit = unit.to_string();
        self
    }

    /// Sets the quote written around keys; `""` leaves keys bare.
    #[must_use]
    pub fn with_key_quote(mut self, quote: &str) -> Self {
        self.key_quote = quote.to_string();
        self
    }

    /// Sets the quote written around string values.
    #[must_use]
    pub fn with_string_quote(mut self, quote: &str) -> Self {
        self.string_quote = quote.to_string();
        self
    }
}

//! Error types for parsing, coercion and output.
//!
//! Parsing is the only operation that fails on well-formed input. Every
//! parse failure carries a [`Position`] pointing at the offending token (or
//! at the opening delimiter of an unterminated string or structure), so a
//! caller can report `line, column` without re-scanning the input.
//!
//! ## Error Categories
//!
//! - **Parse errors**: unexpected tokens, unterminated strings/structures,
//!   depth and length guard violations
//! - **Type mismatches**: only produced by [`Coercion::Strict`](crate::Coercion::Strict)
//! - **I/O errors**: writing serialized text to an `io::Write`
//!
//! ## Examples
//!
//! ```rust
//! use jsontree::{from_str, Error};
//!
//! let result = from_str("{ a: [1, 2 }");
//! assert!(matches!(result, Err(Error::UnexpectedToken { .. })));
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// A location in the parsed text.
///
/// `offset` is a byte offset; `line` and `column` are 1-based, with columns
/// counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// The position of the first character of the input.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A token that the grammar does not allow at this point.
    #[error("Unexpected token at {pos}: expected {expected}, found {found}")]
    UnexpectedToken {
        pos: Position,
        expected: String,
        found: String,
    },

    /// Input ended before the closing quote of a string.
    #[error("Unterminated string starting at {pos}")]
    UnterminatedString { pos: Position },

    /// Input ended inside an object or array.
    #[error("Unterminated structure starting at {pos}: missing '{closing}'")]
    UnterminatedStructure { pos: Position, closing: char },

    /// Nesting went deeper than the configured `max_depth`.
    #[error("Recursion limit of {limit} exceeded at {pos}")]
    RecursionLimitExceeded { pos: Position, limit: usize },

    /// Input is longer than the configured `max_length`.
    #[error("Input of {len} bytes exceeds the maximum length of {max} bytes")]
    InputTooLarge { len: usize, max: usize },

    /// Strict coercion was asked to read a kind it cannot convert.
    #[error("Type mismatch: trying to read {expected} from {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// IO error while writing serialized output
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error, raised through serde
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected-token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::{Error, Position};
    ///
    /// let err = Error::unexpected_token(Position::START, "value", "'}'");
    /// assert!(err.to_string().contains("expected value"));
    /// ```
    pub fn unexpected_token(pos: Position, expected: &str, found: &str) -> Self {
        Error::UnexpectedToken {
            pos,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    pub fn unterminated_string(pos: Position) -> Self {
        Error::UnterminatedString { pos }
    }

    pub fn unterminated_structure(pos: Position, closing: char) -> Self {
        Error::UnterminatedStructure { pos, closing }
    }

    pub fn recursion_limit(pos: Position, limit: usize) -> Self {
        Error::RecursionLimitExceeded { pos, limit }
    }

    pub fn input_too_large(len: usize, max: usize) -> Self {
        Error::InputTooLarge { len, max }
    }

    /// Creates a type mismatch error for strict coercion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsontree::{Error, Kind};
    ///
    /// let err = Error::type_mismatch(Kind::Int, Kind::Map);
    /// assert_eq!(err.to_string(), "Type mismatch: trying to read Int from Map");
    /// ```
    pub fn type_mismatch(expected: Kind, found: Kind) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns `true` for the errors [`from_str`](crate::from_str) can return.
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedToken { .. }
                | Error::UnterminatedString { .. }
                | Error::UnterminatedStructure { .. }
                | Error::RecursionLimitExceeded { .. }
                | Error::InputTooLarge { .. }
        )
    }

    /// The position the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Error::UnexpectedToken { pos, .. }
            | Error::UnterminatedString { pos }
            | Error::UnterminatedStructure { pos, .. }
            | Error::RecursionLimitExceeded { pos, .. } => Some(*pos),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

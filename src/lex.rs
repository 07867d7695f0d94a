//! Tokenizer for the relaxed notation.
//!
//! The lexer turns the input into structural tokens, quoted strings and bare
//! words. It knows nothing about nesting; that is the parser's job.

use crate::{Error, Position, Result};
use std::borrow::Cow;

/// The type of token yielded by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'t> {
    /// `{`
    BeginMap,
    /// `}`
    EndMap,
    /// `[`
    BeginList,
    /// `]`
    EndList,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// A single- or double-quoted string with escaped quotes decoded.
    Quoted(Cow<'t, str>),
    /// A run of characters that are neither whitespace nor punctuation, e.g.
    /// `true`, `-1.5e3`, or an unquoted key.
    Bare(&'t str),
}

impl Token<'_> {
    /// Describes the token for error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::BeginMap => "'{'".to_string(),
            Self::EndMap => "'}'".to_string(),
            Self::BeginList => "'['".to_string(),
            Self::EndList => "']'".to_string(),
            Self::Colon => "':'".to_string(),
            Self::Comma => "','".to_string(),
            Self::Quoted(_) => "string".to_string(),
            Self::Bare(word) => format!("'{}'", word),
        }
    }
}

/// Characters that end a bare word.
fn is_delimiter(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '{' | '}' | '[' | ']' | ':' | ',' | '"' | '\'')
}

pub(crate) struct Lexer<'t> {
    source: &'t str,
    cursor: usize,
    line: usize,
    column: usize,
}

impl<'t> Lexer<'t> {
    pub fn new(source: &'t str) -> Self {
        Lexer {
            source,
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    /// The position of the next unread character.
    pub fn position(&self) -> Position {
        Position {
            offset: self.cursor,
            line: self.line,
            column: self.column,
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.cursor..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.cursor += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if !ch.is_whitespace() {
                break;
            }
            self.next_char();
        }
    }

    /// Returns the next token and where it starts, or `None` at the end of
    /// the input.
    pub fn next_token(&mut self) -> Result<Option<(Token<'t>, Position)>> {
        self.skip_whitespace();
        let pos = self.position();

        let token = match self.peek_char() {
            None => return Ok(None),
            Some(quote @ ('"' | '\'')) => {
                self.next_char();
                self.lex_quoted(quote, pos)?
            }
            Some(ch) => {
                let punct = match ch {
                    '{' => Some(Token::BeginMap),
                    '}' => Some(Token::EndMap),
                    '[' => Some(Token::BeginList),
                    ']' => Some(Token::EndList),
                    ':' => Some(Token::Colon),
                    ',' => Some(Token::Comma),
                    _ => None,
                };
                match punct {
                    Some(token) => {
                        self.next_char();
                        token
                    }
                    None => self.lex_bare(),
                }
            }
        };

        Ok(Some((token, pos)))
    }

    /// Reads a string body after its opening quote.
    ///
    /// A backslash before the opening quote character decodes to that quote.
    /// Any other backslash is kept as-is and the character after it is read
    /// normally, so `\'` inside `"..."` stays two characters.
    fn lex_quoted(&mut self, quote: char, start: Position) -> Result<Token<'t>> {
        let source = self.source;
        let body_start = self.cursor;
        let mut decoded: Option<String> = None;

        loop {
            let at = self.cursor;
            match self.next_char() {
                None => return Err(Error::unterminated_string(start)),
                Some(ch) if ch == quote => {
                    let text = match decoded {
                        Some(text) => Cow::Owned(text),
                        None => Cow::Borrowed(&source[body_start..at]),
                    };
                    return Ok(Token::Quoted(text));
                }
                Some('\\') if self.peek_char() == Some(quote) => {
                    let text = decoded.get_or_insert_with(|| source[body_start..at].to_string());
                    if let Some(escaped) = self.next_char() {
                        text.push(escaped);
                    }
                }
                Some(ch) => {
                    if let Some(text) = decoded.as_mut() {
                        text.push(ch);
                    }
                }
            }
        }
    }

    fn lex_bare(&mut self) -> Token<'t> {
        let start = self.cursor;
        while let Some(ch) = self.peek_char() {
            if is_delimiter(ch) {
                break;
            }
            self.next_char();
        }
        Token::Bare(&self.source[start..self.cursor])
    }
}

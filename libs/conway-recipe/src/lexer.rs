//! # Recipe Lexer
//!
//! Tokenizes recipe text into letters and numbers.
//!
//! ## Example
//!
//! ```rust
//! use conway_recipe::lexer::Lexer;
//! use conway_recipe::token::TokenKind;
//!
//! let tokens = Lexer::new("dk3C").tokenize().unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Letter);
//! assert_eq!(tokens[2].kind, TokenKind::Number);
//! ```

use crate::error::ParseError;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Recipe lexer.
///
/// Converts recipe text into a stream of tokens. Whitespace is skipped;
/// anything that is not an ASCII letter or digit is an error.
pub struct Lexer<'a> {
    /// Source text being lexed.
    source: &'a str,
    /// Collected tokens.
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for recipe text.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source.
    ///
    /// ## Returns
    ///
    /// Vector of tokens including a trailing EOF token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        let mut chars = self.source.char_indices().peekable();

        while let Some(&(offset, ch)) = chars.peek() {
            if ch.is_whitespace() {
                chars.next();
                continue;
            }

            if ch.is_ascii_alphabetic() {
                chars.next();
                self.tokens.push(Token::new(
                    TokenKind::Letter,
                    Span::at(offset),
                    ch.to_string(),
                ));
                continue;
            }

            if ch.is_ascii_digit() {
                let start = offset;
                let mut end = offset;
                let mut text = String::new();
                while let Some(&(digit_offset, digit)) = chars.peek() {
                    if !digit.is_ascii_digit() {
                        break;
                    }
                    text.push(digit);
                    end = digit_offset + digit.len_utf8();
                    chars.next();
                }
                self.tokens.push(Token::new(
                    TokenKind::Number,
                    Span::new(start, end),
                    text,
                ));
                continue;
            }

            return Err(ParseError::unexpected_char(ch, Span::at(offset)));
        }

        let eof = self.source.len();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            Span::new(eof, eof),
            String::new(),
        ));

        Ok(self.tokens)
    }
}

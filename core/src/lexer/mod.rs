//! Tokenizer for arithmetic expressions.
//!
//! The lexer produces tokens on demand: the parser pulls one token at a time
//! with [`Lexer::next_token`]. Once the input is exhausted every further call
//! yields an `Eof` token, so a caller never has to special-case the end.
//!
//! ```
//! use abacus_core::lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("12 + (3)");
//! let kinds: Vec<_> = lexer.by_ref().map(|t| t.unwrap().kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Number,
//!         TokenKind::Plus,
//!         TokenKind::LParen,
//!         TokenKind::Number,
//!         TokenKind::RParen,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

mod token;


pub use token::{Token, TokenKind};

use logos::Logos;
use thiserror::Error;
use tracing::trace;

use crate::syntax::Span;
use token::RawToken;

/// A character that cannot start any token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized character {character:?} at position {}", .span.start())]
pub struct LexError {
    pub character: char,
    /// Covers exactly the offending character.
    pub span: Span,
}

impl LexError {
    /// Byte offset of the offending character.
    pub fn position(&self) -> usize {
        self.span.start()
    }
}

/// Single-pass lexer over one line of input.
///
/// There is no reset: lexing another line means constructing a new `Lexer`.
pub struct Lexer<'src> {
    source: &'src str,
    scanner: logos::Lexer<'src, RawToken>,
    exhausted: bool,
    failed: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            scanner: RawToken::lexer(source),
            exhausted: false,
            failed: false,
        }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the next token, or `Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        if self.exhausted {
            return Ok(Token::eof(self.source.len()));
        }

        let token = match self.scanner.next() {
            Some(Ok(raw)) => Token::new(
                raw.into(),
                self.scanner.slice(),
                self.scanner.span().into(),
            ),
            Some(Err(())) => {
                let start = self.scanner.span().start;
                let character = self.source[start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                let error = LexError {
                    character,
                    span: Span::new(start, start + character.len_utf8()),
                };
                trace!(%error, "lex error");
                return Err(error);
            }
            None => {
                self.exhausted = true;
                Token::eof(self.source.len())
            }
        };

        trace!(kind = ?token.kind, span = %token.span, "token");
        Ok(token)
    }
}

/// Iterates tokens up to and including the first `Eof`, or up to the first
/// error.
impl<'src> Iterator for Lexer<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if self.exhausted {
            // Eof has already been handed out once.
            return None;
        }
        let item = self.next_token();
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }
}

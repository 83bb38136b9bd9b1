use thiserror::Error;

use crate::lexer::{LexError, TokenKind};
use crate::syntax::Span;

/// Syntax errors. Every variant carries the span of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A factor was required but `found` cannot start one.
    #[error("expected a number or '(', found {found}")]
    UnexpectedToken { found: TokenKind, span: Span },

    /// A parenthesized expression was not closed. `span` is where the `)`
    /// was expected; `open` is the unmatched `(`.
    #[error("expected ')' to close '(' at position {}, found {found}", .open.start())]
    MissingCloseParen {
        open: Span,
        found: TokenKind,
        span: Span,
    },

    /// The expression ended but the input did not.
    #[error("unexpected {found} after the end of the expression")]
    TrailingInput { found: TokenKind, span: Span },

    /// A literal does not fit a 64-bit signed integer.
    #[error("number {literal} is out of range")]
    NumberOutOfRange { literal: String, span: Span },

    /// Parentheses are nested deeper than the configured limit.
    #[error("expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize, span: Span },
}

impl ParseError {
    pub fn span(&self) -> &Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::MissingCloseParen { span, .. }
            | ParseError::TrailingInput { span, .. }
            | ParseError::NumberOutOfRange { span, .. }
            | ParseError::MaxDepthExceeded { span, .. } => span,
        }
    }

    /// Byte offset of the offending token.
    pub fn position(&self) -> usize {
        self.span().start()
    }
}

/// Anything that stops `compile` from producing a program.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CompileError {
    pub fn span(&self) -> &Span {
        match self {
            CompileError::Lex(err) => &err.span,
            CompileError::Parse(err) => err.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let cases = [
            (
                ParseError::UnexpectedToken {
                    found: TokenKind::Eof,
                    span: Span::at(0),
                },
                "expected a number or '(', found end of input",
            ),
            (
                ParseError::MissingCloseParen {
                    open: Span::new(2, 3),
                    found: TokenKind::Eof,
                    span: Span::at(4),
                },
                "expected ')' to close '(' at position 2, found end of input",
            ),
            (
                ParseError::TrailingInput {
                    found: TokenKind::Number,
                    span: Span::new(2, 3),
                },
                "unexpected number after the end of the expression",
            ),
            (
                ParseError::NumberOutOfRange {
                    literal: "99999999999999999999".to_string(),
                    span: Span::new(0, 20),
                },
                "number 99999999999999999999 is out of range",
            ),
            (
                ParseError::MaxDepthExceeded {
                    max_depth: 3,
                    span: Span::new(3, 4),
                },
                "expression nesting depth exceeds maximum of 3 levels",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn test_position() {
        let err = ParseError::TrailingInput {
            found: TokenKind::RParen,
            span: Span::new(5, 6),
        };
        assert_eq!(err.position(), 5);
        assert_eq!(CompileError::from(err).span(), &Span::new(5, 6));
    }
}

//! Public error types for the abacus API.
//!
//! Stage errors (lexing, parsing, execution) are converted to [`Error`] at the
//! API boundary. [`Error::to_diagnostic`] flattens any of them into a
//! [`Diagnostic`] for display.

use core::fmt;

use thiserror::Error as ThisError;

use crate::{
    lexer::LexError,
    parser::{CompileError, ParseError},
    syntax::Span,
    vm::{ArithmeticError, ExecutionError, VmError},
};

/// Public error type for all abacus operations.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Unrecognized character in the input.
    #[error("lex error: {0}")]
    Lex(LexError),

    /// Malformed expression.
    #[error("parse error: {0}")]
    Parse(ParseError),

    /// Well-formed expression with an undefined result.
    #[error("arithmetic error: {0}")]
    Arithmetic(ArithmeticError),

    /// Internal inconsistency in the program being executed.
    #[error("vm error: {0}")]
    Vm(VmError),
}

/// The pipeline stage that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Lex,
    Parse,
    Execute,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lex => write!(f, "lexing"),
            Stage::Parse => write!(f, "parsing"),
            Stage::Execute => write!(f, "execution"),
        }
    }
}

impl Error {
    pub fn stage(&self) -> Stage {
        match self {
            Error::Lex(_) => Stage::Lex,
            Error::Parse(_) => Stage::Parse,
            Error::Arithmetic(_) | Error::Vm(_) => Stage::Execute,
        }
    }

    /// Source location of the failure, when one is known.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Lex(err) => Some(err.span.clone()),
            Error::Parse(err) => Some(err.span().clone()),
            Error::Arithmetic(ArithmeticError::DivisionByZero { span }) => span.clone(),
            Error::Vm(_) => None,
        }
    }

    /// Convert to a Diagnostic for API boundary.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match self {
            Error::Lex(err) => (
                format!("Unrecognized character {:?}", err.character),
                "L001",
                Some("Only digits, whitespace, '+', '-', '*', '/', '(' and ')' are allowed"),
            ),
            Error::Parse(err) => match err {
                ParseError::UnexpectedToken { found, .. } => (
                    format!("Expected a number or '(', found {}", found),
                    "P001",
                    None,
                ),
                ParseError::MissingCloseParen { .. } => (
                    String::from("Unclosed parenthesis"),
                    "P002",
                    Some("Add the missing ')'"),
                ),
                ParseError::TrailingInput { found, .. } => (
                    format!("Unexpected {} after the end of the expression", found),
                    "P003",
                    Some("Join the expressions with an operator"),
                ),
                ParseError::NumberOutOfRange { literal, .. } => (
                    format!("Number {} does not fit in a 64-bit integer", literal),
                    "P004",
                    None,
                ),
                ParseError::MaxDepthExceeded { max_depth, .. } => (
                    format!(
                        "Expression nesting depth exceeds maximum of {} levels",
                        max_depth
                    ),
                    "P005",
                    Some("Reduce nesting or simplify the expression"),
                ),
            },
            Error::Arithmetic(ArithmeticError::DivisionByZero { .. }) => {
                (String::from("Division by zero"), "R001", None)
            }
            Error::Vm(err) => (
                err.to_string(),
                match err {
                    VmError::MalformedProgram { .. } => "V001",
                    VmError::StackUnderflow { .. } => "V002",
                },
                None,
            ),
        };

        let mut related = Vec::new();
        if let Error::Parse(ParseError::MissingCloseParen { open, .. }) = self {
            related.push(RelatedInfo {
                span: open.clone(),
                message: String::from("unmatched '(' opened here"),
            });
        }

        Diagnostic {
            stage: self.stage(),
            message,
            span: self.span(),
            related,
            help: help.map(String::from),
            code: Some(String::from(code)),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<CompileError> for Error {
    fn from(err: CompileError) -> Self {
        match err {
            CompileError::Lex(err) => Error::Lex(err),
            CompileError::Parse(err) => Error::Parse(err),
        }
    }
}

impl From<ExecutionError> for Error {
    fn from(err: ExecutionError) -> Self {
        match err {
            ExecutionError::Arithmetic(err) => Error::Arithmetic(err),
            ExecutionError::Vm(err) => Error::Vm(err),
        }
    }
}

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Stage that produced the diagnostic.
    pub stage: Stage,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue, if known.
    pub span: Option<Span>,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Error code (e.g., "P001").
    pub code: Option<String>,
}

/// Related information for a diagnostic (e.g., "opened here").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        if let Some(ref span) = self.span {
            write!(f, " at {}", span)?;
        }
        if let Some(ref help) = self.help {
            write!(f, "\nhelp: {}", help)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    #[test]
    fn test_stage() {
        let lex = Error::from(LexError {
            character: '$',
            span: Span::new(0, 1),
        });
        assert_eq!(lex.stage(), Stage::Lex);

        let parse = Error::from(ParseError::UnexpectedToken {
            found: TokenKind::Eof,
            span: Span::at(0),
        });
        assert_eq!(parse.stage(), Stage::Parse);

        let div = Error::from(ExecutionError::from(ArithmeticError::DivisionByZero {
            span: None,
        }));
        assert_eq!(div.stage(), Stage::Execute);

        let vm = Error::from(ExecutionError::from(VmError::MalformedProgram {
            final_depth: 0,
        }));
        assert_eq!(vm.stage(), Stage::Execute);
        assert_eq!(vm.span(), None);
    }

    #[test]
    fn test_diagnostic_for_missing_paren() {
        let err = Error::from(ParseError::MissingCloseParen {
            open: Span::new(2, 3),
            found: TokenKind::Eof,
            span: Span::at(4),
        });
        let diag = err.to_diagnostic();
        assert_eq!(diag.code.as_deref(), Some("P002"));
        assert_eq!(diag.stage, Stage::Parse);
        assert_eq!(diag.span, Some(Span::at(4)));
        assert_eq!(diag.related.len(), 1);
        assert_eq!(diag.related[0].span, Span::new(2, 3));
    }

    #[test]
    fn test_diagnostic_display() {
        let err = Error::from(ExecutionError::from(ArithmeticError::DivisionByZero {
            span: Some(Span::new(2, 3)),
        }));
        assert_eq!(
            err.to_diagnostic().to_string(),
            "error: Division by zero [R001] at 2..3"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::from(LexError {
            character: '?',
            span: Span::new(1, 2),
        });
        assert_eq!(
            err.to_string(),
            "lex error: unrecognized character '?' at position 1"
        );
    }
}

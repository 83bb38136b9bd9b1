//! Recursive-descent parser that emits bytecode directly.
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := NUMBER | '(' expr ')'
//! ```
//!
//! Precedence comes from the nesting of the rules alone: `term` is built from
//! `factor` and `expr` from `term`, so `*` and `/` bind tighter than `+` and
//! `-`. Repeated operators at one level are consumed left to right, which
//! makes them left-associative. Each operator is emitted right after the code
//! for its right operand, so the output is in post-order.

use tracing::debug;

use crate::{
    lexer::{Lexer, Token, TokenKind},
    syntax::{BinaryOp, Span},
    vm::{Instruction, Program},
};

use super::error::{CompileError, ParseError};

/// Default bound on parenthesis nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Compiles one line of input into a program.
///
/// A parser is single-use: it owns its lexer, its lookahead token and the
/// code emitted so far, and is consumed by [`Parser::compile`].
pub struct Parser<'src> {
    lexer: Lexer<'src>,
    /// One-token lookahead.
    current: Token<'src>,

    instructions: Vec<Instruction>,
    spans: Vec<Span>,

    /// Parenthesis nesting at the current position.
    depth: usize,
    max_depth: usize,

    /// Stack depth of the code emitted so far, and its peak.
    current_stack_depth: usize,
    max_stack_size: usize,
}

impl<'src> Parser<'src> {
    /// Creates a parser and reads the first token.
    pub fn new(source: &'src str, max_depth: usize) -> Result<Self, CompileError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            instructions: Vec::new(),
            spans: Vec::new(),
            depth: 0,
            max_depth,
            current_stack_depth: 0,
            max_stack_size: 0,
        })
    }

    /// Parses the whole input as a single expression.
    pub fn compile(mut self) -> Result<Program, CompileError> {
        debug!(source = self.lexer.source(), "compiling");

        self.expr()?;
        if !self.current.is_eof() {
            return Err(ParseError::TrailingInput {
                found: self.current.kind,
                span: self.current.span.clone(),
            }
            .into());
        }

        debug!(
            instructions = self.instructions.len(),
            max_stack_size = self.max_stack_size,
            "compiled"
        );
        Ok(Program::from_parts(
            self.instructions,
            self.spans,
            self.max_stack_size,
        ))
    }

    // === Grammar ===

    fn expr(&mut self) -> Result<(), CompileError> {
        self.term()?;
        while let Some(op @ (BinaryOp::Add | BinaryOp::Sub)) = self.current.kind.binary_op() {
            let operator = self.advance()?;
            self.term()?;
            self.emit(Instruction::binary(op), operator.span);
        }
        Ok(())
    }

    fn term(&mut self) -> Result<(), CompileError> {
        self.factor()?;
        while let Some(op @ (BinaryOp::Mul | BinaryOp::Div)) = self.current.kind.binary_op() {
            let operator = self.advance()?;
            self.factor()?;
            self.emit(Instruction::binary(op), operator.span);
        }
        Ok(())
    }

    fn factor(&mut self) -> Result<(), CompileError> {
        match self.current.kind {
            TokenKind::Number => {
                let token = self.advance()?;
                let value = token.text.parse::<i64>().map_err(|_| {
                    ParseError::NumberOutOfRange {
                        literal: token.text.to_string(),
                        span: token.span.clone(),
                    }
                })?;
                self.emit(Instruction::Push(value), token.span);
                Ok(())
            }
            TokenKind::LParen => {
                if self.depth >= self.max_depth {
                    return Err(ParseError::MaxDepthExceeded {
                        max_depth: self.max_depth,
                        span: self.current.span.clone(),
                    }
                    .into());
                }
                let open = self.advance()?;
                self.depth += 1;
                self.expr()?;
                self.depth -= 1;
                if self.current.kind != TokenKind::RParen {
                    return Err(ParseError::MissingCloseParen {
                        open: open.span,
                        found: self.current.kind,
                        span: self.current.span.clone(),
                    }
                    .into());
                }
                self.advance()?;
                Ok(())
            }
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::RParen
            | TokenKind::Eof => Err(ParseError::UnexpectedToken {
                found: self.current.kind,
                span: self.current.span.clone(),
            }
            .into()),
        }
    }

    // === Helpers ===

    /// Moves to the next token and returns the one just consumed.
    fn advance(&mut self) -> Result<Token<'src>, CompileError> {
        let next = self.lexer.next_token()?;
        Ok(core::mem::replace(&mut self.current, next))
    }

    fn emit(&mut self, instruction: Instruction, span: Span) {
        self.current_stack_depth = self
            .current_stack_depth
            .saturating_add_signed(instruction.stack_effect());
        self.max_stack_size = self.max_stack_size.max(self.current_stack_depth);
        self.instructions.push(instruction);
        self.spans.push(span);
    }
}

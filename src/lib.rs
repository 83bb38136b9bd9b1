//! Abacus - compile arithmetic expressions to stack bytecode and run them
//!
//! # Overview
//!
//! An input line such as `(3 + 4) * 2` goes through three stages:
//!
//! 1. the lexer turns it into tokens,
//! 2. the recursive-descent compiler turns tokens into a straight-line
//!    [`Program`] of [`Instruction`]s,
//! 3. the [`vm`] executes the program and yields one `i64`.
//!
//! Each stage fails fast with a typed error; [`Error`] unifies them and
//! [`render_error`] prints them with the offending source highlighted.
//!
//! # Quick Start
//!
//! ```
//! use abacus::{Engine, EngineOptions, Instruction};
//!
//! let engine = Engine::new(EngineOptions::default());
//! let evaluation = engine.evaluate("3 + 4 * 2").unwrap();
//!
//! assert_eq!(evaluation.value, 11);
//! assert_eq!(
//!     evaluation.program.instructions(),
//!     &[
//!         Instruction::Push(3),
//!         Instruction::Push(4),
//!         Instruction::Push(2),
//!         Instruction::Mul,
//!         Instruction::Add,
//!     ]
//! );
//! ```

mod error_renderer;

// Re-export public API from abacus_core
pub use abacus_core::api::{
    CompilationOptions, Diagnostic, Engine, EngineOptions, Error, Evaluation, RelatedInfo, Stage,
    evaluate,
};

// Re-export the pipeline stages
pub use abacus_core::lexer::{self, Lexer, Token, TokenKind};
pub use abacus_core::parser::{self, compile};
pub use abacus_core::syntax::{BinaryOp, Span};
pub use abacus_core::vm::{self, Instruction, Program, execute};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

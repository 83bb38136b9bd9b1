mod compiler;
mod error;

#[cfg(test)]
mod compiler_test;


pub use compiler::{DEFAULT_MAX_DEPTH, Parser};
pub use error::{CompileError, ParseError};

use crate::vm::Program;

/// Compiles `source` with the default nesting limit.
pub fn compile(source: &str) -> Result<Program, CompileError> {
    compile_with_max_depth(source, DEFAULT_MAX_DEPTH)
}

/// Compiles `source`, failing with [`ParseError::MaxDepthExceeded`] when
/// parentheses nest deeper than `max_depth`.
pub fn compile_with_max_depth(source: &str, max_depth: usize) -> Result<Program, CompileError> {
    Parser::new(source, max_depth)?.compile()
}

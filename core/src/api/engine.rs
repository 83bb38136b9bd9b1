//! The abacus compilation and execution engine.

use tracing::debug;

use super::{EngineOptions, Error};
use crate::{
    parser,
    vm::{self, Program},
};

/// A compiled program together with the value it evaluated to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub program: Program,
    pub value: i64,
}

/// Compiles and runs arithmetic expressions.
///
/// The engine holds configuration only. Every call builds its own lexer,
/// parser and VM, so one engine can be shared freely across threads.
///
/// # Example
///
/// ```
/// use abacus_core::api::{Engine, EngineOptions};
///
/// let engine = Engine::new(EngineOptions::default());
/// let evaluation = engine.evaluate("(3 + 4) * 2").unwrap();
/// assert_eq!(evaluation.value, 14);
/// assert_eq!(evaluation.program.to_string(), "PUSH 3\nPUSH 4\nADD\nPUSH 2\nMUL");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Engine {
    options: EngineOptions,
}

impl Engine {
    pub fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Compile `source` into a program.
    pub fn compile(&self, source: &str) -> Result<Program, Error> {
        let program =
            parser::compile_with_max_depth(source, self.options.compilation.max_depth)?;
        Ok(program)
    }

    /// Execute a program produced by [`Engine::compile`] or decoded from bytes.
    pub fn run(&self, program: &Program) -> Result<i64, Error> {
        Ok(vm::execute(program)?)
    }

    /// Compile and run `source`, returning both the program and its value.
    pub fn evaluate(&self, source: &str) -> Result<Evaluation, Error> {
        let program = self.compile(source)?;
        let value = self.run(&program)?;
        debug!(value, "evaluated");
        Ok(Evaluation { program, value })
    }
}

/// Compile and run `source` with default options.
pub fn evaluate(source: &str) -> Result<Evaluation, Error> {
    Engine::default().evaluate(source)
}

//! Runtime errors raised while executing a program.
//!
//! # Error Categories
//!
//! - **Arithmetic errors**: a well-formed program computed something
//!   undefined (division by zero). These are user-input errors.
//!
//! - **VM errors**: the program itself is inconsistent. A program produced by
//!   the compiler never triggers these; programs built by hand or decoded from
//!   bytes might.

use thiserror::Error;

use crate::syntax::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    Vm(#[from] VmError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Right operand of `/` was zero. `span` points at the operator when the
    /// program carries source spans.
    #[error("division by zero{}", at(.span))]
    DivisionByZero { span: Option<Span> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VmError {
    /// Execution finished with a stack depth other than one.
    #[error("malformed program: final stack depth is {final_depth}, expected 1")]
    MalformedProgram { final_depth: usize },

    /// A binary instruction found fewer than two operands.
    #[error("malformed program: stack underflow at instruction {index}")]
    StackUnderflow { index: usize },
}

fn at(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" at {}", span),
        None => String::new(),
    }
}

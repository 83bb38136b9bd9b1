//! Stack-based virtual machine.
//!
//! A [`Program`] is a flat list of [`Instruction`]s. [`execute`] runs it in a
//! single linear pass against a fresh evaluation stack and returns the one
//! value left on the stack.

mod code;
mod error;
mod instruction_set;
mod operators;
mod runtime;
mod stack;

pub use code::{DecodeError, Program};
pub use error::{ArithmeticError, ExecutionError, VmError};
pub use instruction_set::Instruction;
pub use runtime::{VM, execute};


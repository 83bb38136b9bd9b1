//! Core of abacus: a lexer, a recursive-descent compiler that emits stack
//! bytecode, and the virtual machine that runs it.
//!
//! ```
//! use abacus_core::{parser, vm};
//!
//! let program = parser::compile("(3 + 4) * 2").unwrap();
//! assert_eq!(vm::execute(&program).unwrap(), 14);
//! ```

pub mod api;
pub mod lexer;
pub mod parser;
pub mod syntax;
pub mod vm;

//! Instruction set of the stack machine.
//!
//! Programs are straight-line: there are no jumps, so every instruction runs
//! exactly once, in order.
//!
//! # Stack Discipline
//!
//! Stack effect notation: `[..., left, right] -> [..., result]`

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::syntax::BinaryOp;

/// A single VM instruction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Push an integer literal.
    /// Stack: [...] -> [..., value]
    Push(i64),

    /// Stack: [..., a, b] -> [..., a + b]
    Add,

    /// Stack: [..., a, b] -> [..., a - b]
    Sub,

    /// Stack: [..., a, b] -> [..., a * b]
    Mul,

    /// Integer division, truncating toward zero. Errors when `b == 0`.
    /// Stack: [..., a, b] -> [..., a / b]
    Div,
}

impl Instruction {
    pub const fn binary(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Instruction::Add,
            BinaryOp::Sub => Instruction::Sub,
            BinaryOp::Mul => Instruction::Mul,
            BinaryOp::Div => Instruction::Div,
        }
    }

    pub const fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Instruction::Push(_) => None,
            Instruction::Add => Some(BinaryOp::Add),
            Instruction::Sub => Some(BinaryOp::Sub),
            Instruction::Mul => Some(BinaryOp::Mul),
            Instruction::Div => Some(BinaryOp::Div),
        }
    }

    pub const fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::Push(_) => "PUSH",
            Instruction::Add => "ADD",
            Instruction::Sub => "SUB",
            Instruction::Mul => "MUL",
            Instruction::Div => "DIV",
        }
    }

    /// Net change in stack depth after this instruction runs.
    pub const fn stack_effect(&self) -> isize {
        match self {
            Instruction::Push(_) => 1,
            Instruction::Add | Instruction::Sub | Instruction::Mul | Instruction::Div => -1,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Push(value) => write!(f, "{} {}", self.mnemonic(), value),
            _ => f.write_str(self.mnemonic()),
        }
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

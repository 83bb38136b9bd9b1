use tracing::{debug, trace};

use crate::syntax::BinaryOp;

use super::{
    code::Program,
    error::{ExecutionError, VmError},
    instruction_set::Instruction,
    operators::eval_binary_int,
    stack::Stack,
};

/// Executes one program against a fresh evaluation stack.
///
/// The VM is consumed by [`VM::run`]: a run either completes with a value or
/// fails, and the stack is dropped either way.
pub struct VM<'p> {
    program: &'p Program,
    stack: Stack<i64>,
}

impl<'p> VM<'p> {
    pub fn new(program: &'p Program) -> Self {
        VM {
            program,
            stack: Stack::new(program.max_stack_size()),
        }
    }

    pub fn run(mut self) -> Result<i64, ExecutionError> {
        debug!(
            instructions = self.program.len(),
            max_stack_size = self.program.max_stack_size(),
            "running program"
        );

        for (index, instruction) in self.program.iter().enumerate() {
            if let Some(op) = instruction.binary_op() {
                self.binary(index, op)?;
            } else if let Instruction::Push(value) = *instruction {
                self.stack.push(value);
            }
            trace!(index, %instruction, top = ?self.stack.peek(), "step");
        }

        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(value), true) => Ok(value),
            (None, _) => Err(VmError::MalformedProgram { final_depth: 0 }.into()),
            (Some(_), false) => Err(VmError::MalformedProgram {
                final_depth: self.stack.len() + 1,
            }
            .into()),
        }
    }
}

impl VM<'_> {
    /// Pops the right then the left operand and pushes `left op right`.
    fn binary(&mut self, index: usize, op: BinaryOp) -> Result<(), ExecutionError> {
        let (left, right) = self
            .stack
            .pop_pair()
            .ok_or(VmError::StackUnderflow { index })?;
        let result = eval_binary_int(op, left, right, self.program.span_of(index))?;
        self.stack.push(result);
        Ok(())
    }
}

/// Executes `program` and returns the single value it leaves on the stack.
pub fn execute(program: &Program) -> Result<i64, ExecutionError> {
    VM::new(program).run()
}

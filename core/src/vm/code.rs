use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{syntax::Span, vm::Instruction};

/// A compiled, straight-line bytecode program.
///
/// Programs are immutable once built. The compiler attaches the source span of
/// every instruction so runtime errors can point back at the operator that
/// failed; programs built by hand carry no spans.
#[derive(Clone, PartialEq, Eq)]
pub struct Program {
    instructions: Vec<Instruction>,
    /// Either empty or one span per instruction.
    spans: Vec<Span>,
    max_stack_size: usize,
}

/// Failure to decode a program from its binary form.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid program encoding: {0}")]
    Encoding(#[from] postcard::Error),

    #[error("program has {spans} spans for {instructions} instructions")]
    SpanMismatch { instructions: usize, spans: usize },
}

/// Wire form of a program. The stack bound is recomputed on decode rather
/// than trusted.
#[derive(Serialize)]
struct EncodedRef<'a> {
    instructions: &'a [Instruction],
    spans: &'a [Span],
}

#[derive(Deserialize)]
struct Encoded {
    instructions: Vec<Instruction>,
    spans: Vec<Span>,
}

impl Program {
    /// Builds a program without source spans.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        let max_stack_size = peak_depth(&instructions);
        Self {
            instructions,
            spans: Vec::new(),
            max_stack_size,
        }
    }

    /// Builds a program with one source span per instruction.
    pub fn with_spans(
        instructions: Vec<Instruction>,
        spans: Vec<Span>,
    ) -> Result<Self, DecodeError> {
        if !spans.is_empty() && spans.len() != instructions.len() {
            return Err(DecodeError::SpanMismatch {
                instructions: instructions.len(),
                spans: spans.len(),
            });
        }
        let max_stack_size = peak_depth(&instructions);
        Ok(Self {
            instructions,
            spans,
            max_stack_size,
        })
    }

    /// Used by the compiler, which tracks the stack bound while emitting.
    pub(crate) fn from_parts(
        instructions: Vec<Instruction>,
        spans: Vec<Span>,
        max_stack_size: usize,
    ) -> Self {
        debug_assert_eq!(instructions.len(), spans.len());
        debug_assert_eq!(max_stack_size, peak_depth(&instructions));
        Self {
            instructions,
            spans,
            max_stack_size,
        }
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Source span of the instruction at `index`, if the program has spans.
    pub fn span_of(&self, index: usize) -> Option<&Span> {
        self.spans.get(index)
    }

    /// The deepest the evaluation stack gets while running this program.
    pub fn max_stack_size(&self) -> usize {
        self.max_stack_size
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }

    /// Encodes the program with postcard.
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(&EncodedRef {
            instructions: &self.instructions,
            spans: &self.spans,
        })
    }

    /// Decodes a program produced by [`Program::to_bytes`].
    ///
    /// The result is not assumed to be well-formed: the VM still checks stack
    /// depth while running it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let encoded: Encoded = postcard::from_bytes(bytes)?;
        Self::with_spans(encoded.instructions, encoded.spans)
    }
}

/// Simulates the stack depth of `instructions`, clamping at zero on
/// underflow, and returns the peak.
fn peak_depth(instructions: &[Instruction]) -> usize {
    let mut depth: usize = 0;
    let mut peak: usize = 0;
    for instr in instructions {
        depth = depth.saturating_add_signed(instr.stack_effect());
        peak = peak.max(depth);
    }
    peak
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Instruction;
    type IntoIter = core::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

/// One instruction per line, e.g. `PUSH 3`.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instr) in self.instructions.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", instr)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program {{")?;
        writeln!(f, "  max_stack_size: {}", self.max_stack_size)?;
        writeln!(f, "  instructions:")?;
        for (addr, instr) in self.instructions.iter().enumerate() {
            match self.spans.get(addr) {
                Some(span) => writeln!(f, "    {:4}  {:<12} ; {}", addr, instr.to_string(), span)?,
                None => writeln!(f, "    {:4}  {}", addr, instr)?,
            }
        }
        write!(f, "}}")
    }
}

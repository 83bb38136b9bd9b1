use core::fmt;

/// Evaluation stack for one VM run.
///
/// The maximum size comes from [`Program::max_stack_size`] and is only
/// enforced in debug builds, where exceeding it means the compiler's depth
/// accounting is wrong.
///
/// [`Program::max_stack_size`]: crate::vm::Program::max_stack_size
pub(crate) struct Stack<T> {
    items: Vec<T>,
    max_size: usize,
}

impl<T> Stack<T> {
    /// Creates an empty stack that will hold at most `max_size` values.
    ///
    /// Pre-allocates up to 256 slots so deep programs don't reserve
    /// everything upfront.
    pub fn new(max_size: usize) -> Self {
        Self {
            items: Vec::with_capacity(max_size.min(256)),
            max_size,
        }
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        debug_assert!(
            self.items.len() < self.max_size,
            "Stack overflow: attempted to push beyond maximum size of {}",
            self.max_size
        );
        self.items.push(value);
    }

    /// Removes the top value, or `None` on underflow.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Pops `(left, right)` operands of a binary operation.
    ///
    /// The right operand is on top. On underflow nothing is removed.
    #[inline]
    pub fn pop_pair(&mut self) -> Option<(T, T)> {
        if self.items.len() < 2 {
            return None;
        }
        let right = self.items.pop()?;
        let left = self.items.pop()?;
        Some((left, right))
    }

    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

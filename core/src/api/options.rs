//! Configuration options for the abacus engine.

use crate::parser::DEFAULT_MAX_DEPTH;

/// Configuration options for compilation.
///
/// # Example
///
/// ```
/// use abacus_core::api::CompilationOptions;
///
/// let options = CompilationOptions { max_depth: 64 };
/// assert_eq!(CompilationOptions::default().max_depth, 256);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationOptions {
    /// Maximum parenthesis nesting depth (for recursion protection).
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Configuration options for the engine.
///
/// These set the defaults used by [`Engine::compile`] and
/// [`Engine::evaluate`].
///
/// [`Engine::compile`]: crate::api::Engine::compile
/// [`Engine::evaluate`]: crate::api::Engine::evaluate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub compilation: CompilationOptions,
}

//! Public API for abacus.
//!
//! # Example
//!
//! ```
//! use abacus_core::api::{Engine, EngineOptions, Error, Stage};
//!
//! let engine = Engine::new(EngineOptions::default());
//!
//! let program = engine.compile("1 + 2 * 3").unwrap();
//! assert_eq!(engine.run(&program).unwrap(), 7);
//!
//! let err = engine.evaluate("10 / (5 - 5)").unwrap_err();
//! assert_eq!(err.stage(), Stage::Execute);
//! assert!(matches!(err, Error::Arithmetic(_)));
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::{Engine, Evaluation, evaluate};
pub use error::{Diagnostic, Error, RelatedInfo, Stage};
pub use options::{CompilationOptions, EngineOptions};

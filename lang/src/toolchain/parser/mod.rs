//! Grammar validation for minipas.
//!
//! The validator is a recursive descent walk over a [TokenizedBuffer], with one handler per
//! grammar rule. Handlers share a context holding a [TokenCursor], and report problems without
//! stopping: a token of the wrong kind is reported and left in place for whatever comes next to
//! look at. No tree is built, the walk only answers whether the program is well formed.
//!
//! [TokenizedBuffer]: crate::toolchain::lexer::TokenizedBuffer

pub mod token_cursor;
pub mod validator;

mod context;

pub use token_cursor::TokenCursor;
pub use validator::{ValidationResult, Validator, ValidatorLimits};

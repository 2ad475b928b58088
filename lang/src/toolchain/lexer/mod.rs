//! A minipas lexer, which splits the input program text into tokens for validation.
//!
//! Tokens are recognized with an ordered [RuleTable]: at each position the first rule that
//! matches wins. Blank space between tokens is skipped, and characters that start no token are
//! reported to the [DiagnosticConsumer](crate::toolchain::diagnostics::DiagnosticConsumer) and
//! skipped too, so lexing always runs to the end of the input.
//!
//! The resulting [TokenizedBuffer] owns the tokens in source order and remembers the text of
//! every source line, so later stages can translate a token index into a full diagnostic
//! location.

pub mod rules;
pub mod token;
pub mod tokenized_buffer;

mod cursor;

#[cfg(test)]
mod tokenized_buffer_unittests;

pub use rules::{MatchRule, Pattern, RuleTable};
pub use token::{Token, TokenKind};
pub use tokenized_buffer::TokenizedBuffer;

pub type TokenIndex = usize;

//! Lexer and syntax validator for minipas, a small Pascal-like teaching language.
//!
//! A minipas program is a `program` header, an optional `var` declaration list and a
//! `begin`/`end` block of assignments, `if`/`while` statements and `writeln` calls. This crate
//! splits program text into tokens and checks that the token sequence follows the grammar,
//! reporting every problem it finds instead of stopping at the first one.

#[macro_use]
extern crate static_assertions;

#[doc(hidden)]
pub use const_format;

pub mod toolchain;

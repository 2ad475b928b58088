//! The minipas toolchain: source management, diagnostics, lexing and syntax validation.
//!
//! The stages run in a fixed order. A [source::SourceBuffer] is split into tokens by
//! [lexer::TokenizedBuffer::tokenize], and the resulting buffer is walked by
//! [parser::Validator::validate]. Neither stage stops on bad input, both report problems as
//! [diagnostics::Diagnostic] values.

pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod source;

use diagnostics::CollectingDiagnosticConsumer;
use lexer::{RuleTable, TokenizedBuffer};
use parser::{ValidationResult, Validator, ValidatorLimits};

/// Lexes and validates `source` in one go.
///
/// The returned result holds the lexical diagnostics first, in source order, followed by the
/// syntax diagnostics from the grammar walk.
pub fn check<'s>(
    source: &'s source::SourceBuffer<'s>,
    rules: &RuleTable,
    limits: ValidatorLimits,
) -> ValidationResult<'s> {
    let mut lexical = CollectingDiagnosticConsumer::new();
    let tokens = TokenizedBuffer::tokenize(source, rules, &mut lexical);
    let syntax = Validator::new(limits).validate(&tokens);
    tracing::debug!(
        file = source.file_name(),
        lexical = lexical.len(),
        syntax = syntax.diagnostics().len(),
        "checked source"
    );
    ValidationResult::from_stages(lexical.into_diagnostics(), syntax)
}

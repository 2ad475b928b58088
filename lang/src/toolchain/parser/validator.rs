use super::context::Context;
use crate::toolchain::diagnostics::diagnostic_emitter::{
    CollectingDiagnosticConsumer, Diagnostic, DiagnosticConsumer,
};
use crate::toolchain::lexer::{TokenKind, TokenizedBuffer};

mod handle_declarations;
mod handle_expression;
mod handle_factor;
mod handle_program;
mod handle_simple_expression;
mod handle_statement;
mod handle_statement_list;
mod handle_term;
mod handle_variable_list;

#[cfg(test)]
mod handle_variable_list_unittests;

/// Bounds on the validator's recursion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatorLimits {
    /// How many statement lists and parenthesized expressions may be open at once. The program
    /// body counts as one, so a program needs at least 1 to validate cleanly.
    pub max_nesting_depth: usize,
}

impl ValidatorLimits {
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;
}

impl Default for ValidatorLimits {
    fn default() -> ValidatorLimits {
        ValidatorLimits { max_nesting_depth: ValidatorLimits::DEFAULT_MAX_NESTING_DEPTH }
    }
}

/// Checks a [TokenizedBuffer] against the minipas grammar.
///
/// Validation never stops early. Every mismatch becomes a diagnostic and the walk carries on from
/// the offending token, so one mistake can produce several diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct Validator {
    limits: ValidatorLimits,
}

impl Validator {
    pub fn new(limits: ValidatorLimits) -> Validator {
        Validator { limits }
    }

    pub fn validate<'s>(&self, tokens: &TokenizedBuffer<'s>) -> ValidationResult<'s> {
        let _span = tracing::debug_span!("validate", file = tokens.file_name()).entered();

        let mut diags = CollectingDiagnosticConsumer::new();
        let has_error = {
            let mut context = Context::new(tokens, &mut diags, self.limits);
            handle_program::handle_program(&mut context);
            context.has_error()
        };
        debug_assert_eq!(has_error, !diags.is_empty());

        tracing::debug!(tokens = tokens.len(), diagnostics = diags.len(), "validated tokens");
        ValidationResult::new(diags.into_diagnostics())
    }
}

/// The outcome of a validation: every diagnostic in the order found, and whether there were none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult<'s> {
    diagnostics: Vec<Diagnostic<'s>>,
    succeeded: bool,
}

impl<'s> ValidationResult<'s> {
    pub fn new(diagnostics: Vec<Diagnostic<'s>>) -> ValidationResult<'s> {
        let succeeded = diagnostics.is_empty();
        ValidationResult { diagnostics, succeeded }
    }

    /// Puts the lexical diagnostics of a source in front of the result of validating its tokens.
    pub fn from_stages(
        mut lexical: Vec<Diagnostic<'s>>,
        syntax: ValidationResult<'s>,
    ) -> ValidationResult<'s> {
        lexical.extend(syntax.diagnostics);
        ValidationResult::new(lexical)
    }

    pub fn diagnostics(&self) -> &[Diagnostic<'s>] {
        &self.diagnostics
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic<'s>> {
        self.diagnostics
    }

    /// Hands a copy of every diagnostic to `diags`, in order.
    pub fn report(&self, diags: &mut dyn DiagnosticConsumer<'s>) {
        for diag in &self.diagnostics {
            diags.handle_diagnostic(diag.clone());
        }
        diags.flush();
    }
}

// Tokens that may follow a SimpleExpression to make a comparison.
fn is_relational(kind: Option<TokenKind>) -> bool {
    matches!(kind, Some(TokenKind::Equals) | Some(TokenKind::Greater) | Some(TokenKind::Less))
}

fn is_additive(kind: Option<TokenKind>) -> bool {
    matches!(kind, Some(TokenKind::Plus) | Some(TokenKind::Minus))
}

fn is_multiplicative(kind: Option<TokenKind>) -> bool {
    matches!(kind, Some(TokenKind::Times) | Some(TokenKind::Divide))
}

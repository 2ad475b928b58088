use crate::toolchain::diagnostics::diagnostic_emitter::{
    Diagnostic, DiagnosticConsumer,
};
use crate::toolchain::diagnostics::diagnostic_kind::{DiagnosticKind, SyntaxDiagnosticKind};
use crate::toolchain::diagnostics::DiagnosticEmitter;
use crate::toolchain::lexer::{TokenIndex, TokenKind, TokenizedBuffer};

use super::token_cursor::TokenCursor;
use super::validator::ValidatorLimits;

/// State shared by the grammar handlers during one validation walk.
///
/// Handlers advance the cursor by exactly the tokens they accept. Nothing here ever skips a token
/// on the handler's behalf, which keeps every mismatch visible to the next handler.
pub struct Context<'c, 't, 's> {
    cursor: TokenCursor<'t, 's>,
    emitter: DiagnosticEmitter<'c, 't, 's, TokenIndex>,
    limits: ValidatorLimits,
    depth: usize,
    has_error: bool,
}

impl<'c, 't, 's> Context<'c, 't, 's> {
    pub fn new(
        tokens: &'t TokenizedBuffer<'s>,
        diags: &'c mut dyn DiagnosticConsumer<'s>,
        limits: ValidatorLimits,
    ) -> Context<'c, 't, 's> {
        let emitter = DiagnosticEmitter::new(diags, tokens);
        Context { cursor: TokenCursor::new(tokens), emitter, limits, depth: 0, has_error: false }
    }

    pub fn token_kind(&self) -> Option<TokenKind> {
        self.cursor.kind()
    }

    pub fn token_index(&self) -> TokenIndex {
        self.cursor.index()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    pub fn at(&self, kind: TokenKind) -> bool {
        self.token_kind() == Some(kind)
    }

    // Returns the current token index before advancing to the next token.
    pub fn consume(&mut self) -> TokenIndex {
        let index = self.cursor.index();
        self.cursor.advance();
        index
    }

    /// Consumes the current token if it is of the `expected` kind. A token of any other kind is
    /// reported and left in place. Running out of tokens is not reported here.
    pub fn expect(&mut self, expected: TokenKind) -> bool {
        match self.token_kind() {
            Some(kind) if kind == expected => {
                self.consume();
                true
            }
            Some(found) => {
                self.unexpected_token(expected, found, None);
                false
            }
            None => false,
        }
    }

    /// Same as [Context::expect], for a token closing a pair. A mismatch carries a note pointing
    /// back at the token that opened the pair.
    pub fn expect_closing(
        &mut self,
        expected: TokenKind,
        opened_at: TokenIndex,
        note: &str,
    ) -> bool {
        match self.token_kind() {
            Some(kind) if kind == expected => {
                self.consume();
                true
            }
            Some(found) => {
                self.unexpected_token(expected, found, Some((opened_at, note)));
                false
            }
            None => false,
        }
    }

    /// Reports a token that can't start a factor, or the lack of any token at all.
    pub fn invalid_factor(&mut self) {
        let body = match self.token_kind() {
            Some(found) => format!("invalid factor: {}", found),
            None => "invalid factor: end of input".to_string(),
        };
        let diag = self
            .emitter
            .build(
                DiagnosticKind::SyntaxError { kind: SyntaxDiagnosticKind::InvalidFactor },
                self.cursor.index(),
                body,
            )
            .emit();
        self.emit(diag);
    }

    /// Enters one level of statement list or parenthesized expression nesting. Returns false,
    /// after reporting it, when that would pass the configured ceiling. The caller must then
    /// return without consuming anything.
    pub fn enter_nested(&mut self) -> bool {
        if self.depth >= self.limits.max_nesting_depth {
            let body = format!("nesting deeper than {} levels", self.limits.max_nesting_depth);
            let diag = self
                .emitter
                .build(
                    DiagnosticKind::SyntaxError { kind: SyntaxDiagnosticKind::NestingTooDeep },
                    self.cursor.index(),
                    body,
                )
                .emit();
            self.emit(diag);
            return false;
        }
        self.depth += 1;
        true
    }

    pub fn leave_nested(&mut self) {
        debug_assert!(self.depth > 0);
        self.depth -= 1;
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    fn unexpected_token(
        &mut self,
        expected: TokenKind,
        found: TokenKind,
        opened_at: Option<(TokenIndex, &str)>,
    ) {
        let mut builder = self.emitter.build(
            DiagnosticKind::SyntaxError { kind: SyntaxDiagnosticKind::UnexpectedToken },
            self.cursor.index(),
            format!("expected {}, found {}", expected, found),
        );
        if let Some((index, note)) = opened_at {
            builder = builder.note(index, note.to_string());
        }
        let diag = builder.emit();
        self.emit(diag);
    }

    fn emit(&mut self, diag: Diagnostic<'s>) {
        tracing::trace!(diagnostic = %diag, "syntax diagnostic");
        self.has_error = true;
        self.emitter.emit(diag);
    }
}

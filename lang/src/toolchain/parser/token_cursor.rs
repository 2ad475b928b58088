use crate::toolchain::lexer::{Token, TokenIndex, TokenKind, TokenizedBuffer};

/// A read position over a [TokenizedBuffer].
///
/// The position runs from zero up to and including the buffer length, where the length means
/// every token has been consumed. Reading there gives `None` rather than an error.
#[derive(Clone, Copy)]
pub struct TokenCursor<'t, 's> {
    tokens: &'t TokenizedBuffer<'s>,
    index: TokenIndex,
}

impl<'t, 's> TokenCursor<'t, 's> {
    pub fn new(tokens: &'t TokenizedBuffer<'s>) -> TokenCursor<'t, 's> {
        TokenCursor { tokens, index: 0 }
    }

    pub fn current(&self) -> Option<&'t Token<'s>> {
        self.tokens.token_at(self.index)
    }

    pub fn kind(&self) -> Option<TokenKind> {
        Some(self.current()?.kind)
    }

    pub fn index(&self) -> TokenIndex {
        self.index
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    // Stops at the end, so advancing an exhausted cursor is harmless.
    pub fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }
}

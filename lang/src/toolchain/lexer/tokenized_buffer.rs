use bstr::BStr;

use super::cursor::Cursor;
use super::rules::RuleTable;
use super::{Token, TokenIndex};
use crate::toolchain::diagnostics::diagnostic_emitter::DiagnosticConsumer;
use crate::toolchain::diagnostics::{DiagnosticLocation, DiagnosticLocationTranslator};
use crate::toolchain::source;

/// The ordered tokens of one source buffer, produced by a single lexing pass and never modified
/// afterwards.
pub struct TokenizedBuffer<'s> {
    tokens: Vec<Token<'s>>,
    lines: Vec<&'s BStr>,
    source: &'s source::SourceBuffer<'s>,
}

impl<'s> TokenizedBuffer<'s> {
    pub fn tokenize(
        source: &'s source::SourceBuffer<'s>,
        rules: &RuleTable,
        diags: &mut impl DiagnosticConsumer<'s>,
    ) -> TokenizedBuffer<'s> {
        let mut lines = Vec::new();
        let cursor = Cursor::new(source, rules, &mut lines, diags);
        let tokens: Vec<Token<'s>> = cursor.collect();
        tracing::debug!(
            file = source.file_name(),
            tokens = tokens.len(),
            lines = lines.len(),
            "tokenized source"
        );
        TokenizedBuffer { tokens, lines, source }
    }

    pub fn token_at(&self, i: TokenIndex) -> Option<&Token<'s>> {
        self.tokens.get(i)
    }

    pub fn print_tokens(&self) {
        for token in self.tokens.iter() {
            println!("{}", &token);
        }
    }

    pub fn tokens(&self) -> &Vec<Token<'s>> {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Text of every source line, without line terminators. There is always at least one line,
    /// even for empty input.
    pub fn lines(&self) -> &[&'s BStr] {
        &self.lines
    }

    pub fn file_name(&self) -> &'s str {
        self.source.file_name()
    }
}

impl<'s> DiagnosticLocationTranslator<'s, TokenIndex> for TokenizedBuffer<'s> {
    fn get_location(&self, token_index: TokenIndex) -> DiagnosticLocation<'s> {
        // Past the end of the buffer we point just after the last token.
        let (token, column_offset) = match self.tokens.get(token_index) {
            Some(token) => (token, 0),
            None => match self.tokens.last() {
                Some(last) => (last, last.string.len() as i32),
                None => {
                    return DiagnosticLocation {
                        file_name: self.source.file_name(),
                        line_number: 0,
                        column_number: 0,
                        line: BStr::new(""),
                    }
                }
            },
        };

        // Switch to zero-based line counting.
        let line_index = (token.line - 1) as usize;
        debug_assert!(line_index < self.lines.len());
        DiagnosticLocation {
            file_name: self.source.file_name(),
            line_number: token.line,
            column_number: token.column + column_offset,
            line: self.lines.get(line_index).copied().unwrap_or_else(|| BStr::new("")),
        }
    }
}

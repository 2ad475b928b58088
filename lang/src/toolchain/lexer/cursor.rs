use bstr::{BStr, ByteSlice};

use crate::toolchain::diagnostics::diagnostic_emitter::Diagnostic;
use crate::toolchain::diagnostics::diagnostic_emitter::DiagnosticConsumer;
use crate::toolchain::diagnostics::diagnostic_emitter::DiagnosticMessage;
use crate::toolchain::diagnostics::diagnostic_kind::*;
use crate::toolchain::diagnostics::DiagnosticLocation;
use crate::toolchain::source::SourceBuffer;

use super::rules::RuleTable;
use super::token::Token;

/// Token iterator over a SourceBuffer.
///
/// Also tracks input buffer position by line and column, and records the text of each line it
/// finishes so diagnostics can quote it later.
///
/// Design roughly inspired by the rustc lexer Cursor.
pub struct Cursor<'s, 'r, 'v, 'd> {
    source: &'s SourceBuffer<'s>,
    input: &'s [u8],
    rules: &'r RuleTable,
    position: usize,
    line: i32,
    column: i32,
    line_start: usize,
    lines: &'v mut Vec<&'s BStr>,
    diags: &'d mut dyn DiagnosticConsumer<'s>,
}

impl<'s, 'r, 'v, 'd> Iterator for Cursor<'s, 'r, 'v, 'd> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        while self.position < self.input.len() {
            if let Some((kind, len)) = self.rules.first_match(self.input, self.position) {
                let line = self.line;
                let column = self.column;
                let token_str = self.extract(len);
                tracing::trace!(%kind, string = token_str, line, column, "token");
                return Some(Token::new(kind, token_str, line, column));
            }

            // No rule matched, so this is either blank space or garbage. Either way it is exactly
            // one character long.
            let (c, size) = bstr::decode_utf8(&self.input[self.position..]);
            let size = size.max(1);
            match c {
                Some('\n') => {
                    self.finish_line(self.position);
                    self.position += size;
                    self.line_start = self.position;
                    self.line += 1;
                    self.column = 1;
                }
                Some(' ') | Some('\t') | Some('\r') => self.bump(size),
                _ => {
                    self.unknown_character(c.unwrap_or(Self::BAD));
                    self.bump(size);
                }
            }
        }

        // Record the final line, unless an earlier call already did.
        if self.lines.len() < self.line as usize {
            self.finish_line(self.input.len());
        }
        None
    }
}

impl<'s, 'r, 'v, 'd> Cursor<'s, 'r, 'v, 'd> {
    /// Reported in place of byte sequences that aren't valid utf-8.
    pub const BAD: char = '\u{fffd}';

    pub fn new(
        source: &'s SourceBuffer<'s>,
        rules: &'r RuleTable,
        lines: &'v mut Vec<&'s BStr>,
        diags: &'d mut dyn DiagnosticConsumer<'s>,
    ) -> Cursor<'s, 'r, 'v, 'd> {
        Cursor {
            source,
            input: source.code().as_bytes(),
            rules,
            position: 0,
            line: 1,
            column: 1,
            line_start: 0,
            lines,
            diags,
        }
    }

    // Advances past a matched token and returns its text. Rules only ever match ascii, and never
    // a newline, so the column moves by the byte length.
    fn extract(&mut self, len: usize) -> &'s str {
        let input = self.input;
        let bytes = &input[self.position..self.position + len];
        self.position += len;
        self.column += len as i32;
        // Every rule pattern matches ascii bytes only, which are always valid utf-8.
        unsafe { bytes.to_str_unchecked() }
    }

    fn bump(&mut self, size: usize) {
        self.position += size;
        self.column += 1;
    }

    fn finish_line(&mut self, end: usize) {
        let input = self.input;
        let line = &input[self.line_start..end];
        self.lines.push(BStr::new(line.strip_suffix(b"\r").unwrap_or(line)));
    }

    // The text of the line being scanned, which hasn't been recorded in |self.lines| yet.
    fn current_line(&self) -> &'s BStr {
        let input = self.input;
        let rest = &input[self.line_start..];
        let line = match rest.find_byte(b'\n') {
            Some(end) => &rest[..end],
            None => rest,
        };
        BStr::new(line.strip_suffix(b"\r").unwrap_or(line))
    }

    fn unknown_character(&mut self, c: char) {
        // We manually build error messages in the lexer, as we don't yet have the file
        // completely mapped out for location translation to be meaningful.
        let location = DiagnosticLocation {
            file_name: self.source.file_name(),
            line_number: self.line,
            column_number: self.column,
            line: self.current_line(),
        };
        let msg = DiagnosticMessage {
            kind: DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnknownCharacter },
            location,
            body: format!("invalid character '{}' at line {}", c, self.line),
        };
        tracing::debug!(%c, line = self.line, column = self.column, "invalid character");
        self.diags.handle_diagnostic(Diagnostic::new(msg, Vec::new()));
    }
}

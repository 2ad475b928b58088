#![no_main]

use libfuzzer_sys::fuzz_target;
use minipas::toolchain::diagnostics::CollectingDiagnosticConsumer;
use minipas::toolchain::lexer::{RuleTable, TokenizedBuffer};
use minipas::toolchain::source::SourceBuffer;

fuzz_target!(|data: &[u8]| {
    // Invalid utf-8 is covered by the file-backed lexer tests.
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = SourceBuffer::new_from_string(s, "fuzz_targets/lex.rs");
    let mut diags = CollectingDiagnosticConsumer::new();
    let tokens = TokenizedBuffer::tokenize(&source, RuleTable::shared(), &mut diags);
    assert!(tokens.len() + diags.len() <= s.chars().count());
});

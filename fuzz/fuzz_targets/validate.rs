#![no_main]

use libfuzzer_sys::fuzz_target;
use minipas::toolchain;
use minipas::toolchain::lexer::RuleTable;
use minipas::toolchain::parser::ValidatorLimits;
use minipas::toolchain::source::SourceBuffer;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = SourceBuffer::new_from_string(s, "fuzz_targets/validate.rs");
    let result = toolchain::check(&source, RuleTable::shared(), ValidatorLimits::default());
    assert_eq!(result.succeeded(), result.diagnostics().is_empty());
});

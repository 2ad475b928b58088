//! Tools for the production and management of diagnostic feedback from the toolchain.
//!
//! This design loosely follows the Carbon toolchain design. Toolchain code constructs a
//! [Diagnostic] by using a [DiagnosticEmitter] that translates domain-specific locations (a
//! token index, for the validator) into a [DiagnosticLocation] with the help of a
//! [DiagnosticLocationTranslator], and hands the result to a [DiagnosticConsumer], which
//! delivers it to the user or stores it for later.
//!
//! Diagnostics are never fatal. Both the lexer and the validator keep going after reporting
//! one.
//!

pub mod diagnostic_emitter;
pub mod diagnostic_kind;

#[cfg(test)]
mod diagnostic_emitter_unittests;

pub use diagnostic_emitter::CollectingDiagnosticConsumer;
pub use diagnostic_emitter::Diagnostic;
pub use diagnostic_emitter::DiagnosticConsumer;
pub use diagnostic_emitter::DiagnosticEmitter;
pub use diagnostic_emitter::DiagnosticLocation;
pub use diagnostic_emitter::DiagnosticLocationTranslator;
pub use diagnostic_emitter::DiagnosticMessage;
pub use diagnostic_emitter::NullDiagnosticConsumer;
pub use diagnostic_emitter::StreamDiagnosticConsumer;
pub use diagnostic_kind::DiagnosticKind;
pub use diagnostic_kind::LexerDiagnosticKind;
pub use diagnostic_kind::Severity;
pub use diagnostic_kind::SyntaxDiagnosticKind;

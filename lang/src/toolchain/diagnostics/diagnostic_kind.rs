/// The enumerated type of all diagnostics minipas emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    LexerError { kind: LexerDiagnosticKind },
    SyntaxError { kind: SyntaxDiagnosticKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexerDiagnosticKind {
    /// A character that starts no token and isn't blank space. Also covers byte sequences that
    /// aren't valid utf-8.
    UnknownCharacter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxDiagnosticKind {
    /// We were expecting one particular token kind and found a different one.
    UnexpectedToken,

    /// A factor position held something that can't start a factor, or nothing at all.
    InvalidFactor,

    /// Statement lists or parenthesized expressions nested past the configured ceiling.
    NestingTooDeep,
}

/// The stage that produced a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Lexical,
    Syntax,
}

impl DiagnosticKind {
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticKind::LexerError { kind: _ } => Severity::Lexical,
            DiagnosticKind::SyntaxError { kind: _ } => Severity::Syntax,
        }
    }
}

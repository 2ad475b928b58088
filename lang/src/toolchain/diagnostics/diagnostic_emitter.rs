use bstr::BStr;
use std::fmt;
use std::io::Write;

use super::{DiagnosticKind, Severity};

/// A location in code referred to by the diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticLocation<'s> {
    pub file_name: &'s str,

    // 1-based, zero when unknown.
    pub line_number: i32,
    pub column_number: i32,

    // The full text of the line, without its terminating newline. May be empty.
    pub line: &'s BStr,
}

impl<'s> fmt::Display for DiagnosticLocation<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name)?;
        if self.line_number > 0 {
            f.write_fmt(format_args!(":{}", self.line_number))?;
        }
        if self.column_number > 0 {
            f.write_fmt(format_args!(":{}", self.column_number))?;
        }
        fmt::Result::Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage<'s> {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation<'s>,
    pub body: String,
}

impl<'s> fmt::Display for DiagnosticMessage<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // This is an abuse of the "alternate" syntax in fmt::Display trait used to pass a boolean
        // argument to fmt(), in this case to tell the DiagnosticMessage to print this message
        // as an error.
        let infix = match f.alternate() {
            true => "ERROR: ",
            false => "",
        };
        f.write_fmt(format_args!("{}: {}{}", self.location, infix, self.body))
    }
}

/// A complete Diagnostic, a main message plus optional notes. Every diagnostic is an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic<'s> {
    pub message: DiagnosticMessage<'s>,
    pub notes: Vec<DiagnosticMessage<'s>>,
}

impl<'s> Diagnostic<'s> {
    /// Builds a new diagnostic. Normally called by a [DiagnosticBuilder].
    pub fn new(message: DiagnosticMessage<'s>, notes: Vec<DiagnosticMessage<'s>>) -> Diagnostic<'s> {
        Diagnostic { message, notes }
    }

    pub fn severity(&self) -> Severity {
        self.message.kind.severity()
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.message.kind
    }

    pub fn body(&self) -> &str {
        &self.message.body
    }

    pub fn location(&self) -> &DiagnosticLocation<'s> {
        &self.message.location
    }
}

impl<'s> fmt::Display for Diagnostic<'s> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{:#}", self.message))?;
        for m in &self.notes {
            f.write_fmt(format_args!("\n  {}", m))?;
        }
        fmt::Result::Ok(())
    }
}

/// An interface for an object that can receive diagnostics from the toolchain as they are emitted.
pub trait DiagnosticConsumer<'s> {
    fn handle_diagnostic(&mut self, diag: Diagnostic<'s>);
    fn flush(&mut self) {}
}

pub trait DiagnosticLocationTranslator<'s, LocationT> {
    fn get_location(&self, loc: LocationT) -> DiagnosticLocation<'s>;
}

// This is an adaptor between subsystems (like the validator) and the diagnostic consumer. It
// holds the consumer and translator and facilitates creating Diagnostics, and ultimately
// provides the completed diagnostics to the DiagnosticConsumer.
pub struct DiagnosticEmitter<'c, 't, 's, LocationT> {
    consumer: &'c mut dyn DiagnosticConsumer<'s>,
    translator: &'t dyn DiagnosticLocationTranslator<'s, LocationT>,
}

impl<'c, 't, 's, LocationT> DiagnosticEmitter<'c, 't, 's, LocationT> {
    pub fn new(
        consumer: &'c mut dyn DiagnosticConsumer<'s>,
        translator: &'t dyn DiagnosticLocationTranslator<'s, LocationT>,
    ) -> DiagnosticEmitter<'c, 't, 's, LocationT> {
        DiagnosticEmitter { consumer, translator }
    }

    pub fn build(
        &self,
        kind: DiagnosticKind,
        location: LocationT,
        body: String,
    ) -> DiagnosticBuilder<'t, 's, LocationT> {
        DiagnosticBuilder::build(kind, location, body, self.translator)
    }

    pub fn emit(&mut self, diagnostic: Diagnostic<'s>) {
        self.consumer.handle_diagnostic(diagnostic);
    }
}

/// A helper structure for building a single diagnostic with a fluid API.
pub struct DiagnosticBuilder<'t, 's, LocationT> {
    message: DiagnosticMessage<'s>,
    notes: Vec<DiagnosticMessage<'s>>,

    translator: &'t dyn DiagnosticLocationTranslator<'s, LocationT>,
}

impl<'t, 's, LocationT> DiagnosticBuilder<'t, 's, LocationT> {
    pub fn build(
        kind: DiagnosticKind,
        location: LocationT,
        body: String,
        translator: &'t dyn DiagnosticLocationTranslator<'s, LocationT>,
    ) -> DiagnosticBuilder<'t, 's, LocationT> {
        let location = translator.get_location(location);
        let message = DiagnosticMessage { kind, location, body };
        DiagnosticBuilder { message, notes: Vec::new(), translator }
    }

    pub fn note(mut self, location: LocationT, body: String) -> DiagnosticBuilder<'t, 's, LocationT> {
        let location = self.translator.get_location(location);
        self.notes.push(DiagnosticMessage { kind: self.message.kind, location, body });
        self
    }

    pub fn emit(self) -> Diagnostic<'s> {
        Diagnostic { message: self.message, notes: self.notes }
    }
}

/// Writes each diagnostic to a stream as it arrives, followed by the offending source line and a
/// caret under the reported column.
pub struct StreamDiagnosticConsumer<W: std::io::Write> {
    stream: std::io::BufWriter<W>,
    write_failed: bool,
}

impl<W: std::io::Write> StreamDiagnosticConsumer<W> {
    pub fn new(stream: W) -> StreamDiagnosticConsumer<W> {
        StreamDiagnosticConsumer { stream: std::io::BufWriter::new(stream), write_failed: false }
    }

    fn write_diagnostic(&mut self, diag: &Diagnostic) -> std::io::Result<()> {
        writeln!(self.stream, "{}", diag)?;
        let location = &diag.message.location;
        if !location.line.is_empty() {
            writeln!(self.stream, "    {}", location.line)?;
            if location.column_number > 0 {
                let pad = (location.column_number - 1) as usize;
                writeln!(self.stream, "    {:pad$}^", "", pad = pad)?;
            }
        }
        Ok(())
    }
}

impl<'s, W: std::io::Write> DiagnosticConsumer<'s> for StreamDiagnosticConsumer<W> {
    fn handle_diagnostic(&mut self, diag: Diagnostic<'s>) {
        if let Err(e) = self.write_diagnostic(&diag) {
            if !self.write_failed {
                tracing::warn!(error = %e, "failed to write diagnostic");
                self.write_failed = true;
            }
        }
    }

    fn flush(&mut self) {
        if let Err(e) = self.stream.flush() {
            tracing::warn!(error = %e, "failed to flush diagnostics");
        }
    }
}

pub fn console_diagnostic_consumer() -> StreamDiagnosticConsumer<std::io::Stderr> {
    StreamDiagnosticConsumer::new(std::io::stderr())
}

/// Drops everything it is handed.
pub struct NullDiagnosticConsumer {}

impl<'s> DiagnosticConsumer<'s> for NullDiagnosticConsumer {
    fn handle_diagnostic(&mut self, _diag: Diagnostic<'s>) {}
}

/// Keeps every diagnostic, in the order emitted.
#[derive(Debug, Default)]
pub struct CollectingDiagnosticConsumer<'s> {
    diagnostics: Vec<Diagnostic<'s>>,
}

impl<'s> CollectingDiagnosticConsumer<'s> {
    pub fn new() -> CollectingDiagnosticConsumer<'s> {
        CollectingDiagnosticConsumer { diagnostics: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic<'s>] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic<'s>> {
        self.diagnostics
    }
}

impl<'s> DiagnosticConsumer<'s> for CollectingDiagnosticConsumer<'s> {
    fn handle_diagnostic(&mut self, diag: Diagnostic<'s>) {
        tracing::trace!(diagnostic = %diag, "collected diagnostic");
        self.diagnostics.push(diag);
    }
}

#[cfg(test)]
mod tests {
    use bstr::BStr;

    use crate::toolchain::diagnostics::diagnostic_emitter::*;
    use crate::toolchain::diagnostics::diagnostic_kind::*;

    // Maps a line number directly to a location on that line of a fixed two-line text.
    struct LineTranslator {}

    impl LineTranslator {
        const LINES: [&'static str; 2] = ["begin x := 1", "end"];
    }

    impl DiagnosticLocationTranslator<'static, i32> for LineTranslator {
        fn get_location(&self, loc: i32) -> DiagnosticLocation<'static> {
            DiagnosticLocation {
                file_name: "test.pas",
                line_number: loc,
                column_number: 3,
                line: BStr::new(Self::LINES[(loc - 1) as usize]),
            }
        }
    }

    const UNEXPECTED: DiagnosticKind =
        DiagnosticKind::SyntaxError { kind: SyntaxDiagnosticKind::UnexpectedToken };

    #[test]
    fn location_display_skips_unknown_fields() {
        let mut location = DiagnosticLocation {
            file_name: "a.pas",
            line_number: 4,
            column_number: 7,
            line: BStr::new(""),
        };
        assert_eq!(location.to_string(), "a.pas:4:7");
        location.column_number = 0;
        assert_eq!(location.to_string(), "a.pas:4");
        location.line_number = 0;
        assert_eq!(location.to_string(), "a.pas");
    }

    #[test]
    fn emitter_builds_and_forwards() {
        let translator = LineTranslator {};
        let mut collector = CollectingDiagnosticConsumer::new();
        {
            let mut emitter = DiagnosticEmitter::new(&mut collector, &translator);
            let diag = emitter
                .build(UNEXPECTED, 2, "expected END, found BEGIN".to_string())
                .note(1, "block opened here".to_string())
                .emit();
            emitter.emit(diag);
        }
        assert_eq!(collector.len(), 1);
        let diag = &collector.diagnostics()[0];
        assert_eq!(diag.severity(), Severity::Syntax);
        assert_eq!(diag.body(), "expected END, found BEGIN");
        assert_eq!(diag.location().line_number, 2);
        assert_eq!(diag.notes.len(), 1);
        assert_eq!(diag.notes[0].location.line, "begin x := 1");
        assert_eq!(
            diag.to_string(),
            "test.pas:2:3: ERROR: expected END, found BEGIN\n  test.pas:1:3: block opened here"
        );
    }

    #[test]
    fn stream_consumer_underlines_column() {
        let translator = LineTranslator {};
        let mut out = Vec::new();
        {
            let mut stream = StreamDiagnosticConsumer::new(&mut out);
            {
                let mut emitter = DiagnosticEmitter::new(&mut stream, &translator);
                let diag = emitter.build(UNEXPECTED, 1, "odd".to_string()).emit();
                emitter.emit(diag);
            }
            stream.flush();
        }
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "test.pas:1:3: ERROR: odd\n    begin x := 1\n      ^\n");
    }

    #[test]
    fn null_consumer_drops_everything() {
        let translator = LineTranslator {};
        let mut null = NullDiagnosticConsumer {};
        let mut emitter = DiagnosticEmitter::new(&mut null, &translator);
        let diag = emitter.build(UNEXPECTED, 1, "gone".to_string()).emit();
        emitter.emit(diag);
    }

    #[test]
    fn severity_follows_kind() {
        let lexical = DiagnosticKind::LexerError { kind: LexerDiagnosticKind::UnknownCharacter };
        assert_eq!(lexical.severity(), Severity::Lexical);
        assert_eq!(UNEXPECTED.severity(), Severity::Syntax);
    }
}

#[cfg(test)]
mod tests {
    use crate::minipas;
    use crate::toolchain::diagnostics::diagnostic_emitter::{
        CollectingDiagnosticConsumer, NullDiagnosticConsumer,
    };
    use crate::toolchain::diagnostics::{DiagnosticLocationTranslator, Severity};
    use crate::toolchain::source;

    use crate::toolchain::lexer::token::Token;
    use crate::toolchain::lexer::token::TokenKind::*;

    use crate::toolchain::lexer::{RuleTable, TokenizedBuffer};

    // Lexing helper function to compare expected lexing to a provided list of tokens.
    fn check_lexing(source: &source::SourceBuffer, expect: Vec<Token>) {
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        assert_eq!(buffer.tokens(), &expect);
    }

    #[test]
    fn empty_string() {
        let source = minipas!("");
        let mut diags = CollectingDiagnosticConsumer::new();
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        assert!(buffer.is_empty());
        assert!(diags.is_empty());
        assert_eq!(buffer.lines().len(), 1);
    }

    #[test]
    fn blank_space_only() {
        check_lexing(minipas!("   \t\n\r\n  "), vec![]);
    }

    #[test]
    fn smoke_test() {
        check_lexing(
            minipas!("program P; var x; begin x := 1 end"),
            vec![
                Token { kind: Program, string: "program", line: 1, column: 1 },
                Token { kind: Identifier, string: "P", line: 1, column: 9 },
                Token { kind: Semicolon, string: ";", line: 1, column: 10 },
                Token { kind: Var, string: "var", line: 1, column: 12 },
                Token { kind: Identifier, string: "x", line: 1, column: 16 },
                Token { kind: Semicolon, string: ";", line: 1, column: 17 },
                Token { kind: Begin, string: "begin", line: 1, column: 19 },
                Token { kind: Identifier, string: "x", line: 1, column: 25 },
                Token { kind: Assign, string: ":=", line: 1, column: 27 },
                Token { kind: Number, string: "1", line: 1, column: 30 },
                Token { kind: End, string: "end", line: 1, column: 32 },
            ],
        );
    }

    #[test]
    fn line_tracking() {
        check_lexing(
            minipas!("x\ny"),
            vec![
                Token { kind: Identifier, string: "x", line: 1, column: 1 },
                Token { kind: Identifier, string: "y", line: 2, column: 1 },
            ],
        );
        check_lexing(
            minipas!("\n\n  if\r\n\tthen"),
            vec![
                Token { kind: If, string: "if", line: 3, column: 3 },
                Token { kind: Then, string: "then", line: 4, column: 2 },
            ],
        );
    }

    #[test]
    fn keyword_prefix_is_identifier() {
        check_lexing(
            minipas!("whiletrue"),
            vec![Token { kind: Identifier, string: "whiletrue", line: 1, column: 1 }],
        );
        check_lexing(
            minipas!("ifx endx do_ writelnx"),
            vec![
                Token { kind: Identifier, string: "ifx", line: 1, column: 1 },
                Token { kind: Identifier, string: "endx", line: 1, column: 5 },
                Token { kind: Identifier, string: "do_", line: 1, column: 10 },
                Token { kind: Identifier, string: "writelnx", line: 1, column: 14 },
            ],
        );
    }

    #[test]
    fn keyword_suffix_is_identifier() {
        check_lexing(
            minipas!("xif 5if"),
            vec![
                Token { kind: Identifier, string: "xif", line: 1, column: 1 },
                Token { kind: Number, string: "5", line: 1, column: 5 },
                Token { kind: Identifier, string: "if", line: 1, column: 6 },
            ],
        );
    }

    #[test]
    fn keywords_next_to_punctuation() {
        check_lexing(
            minipas!("writeln(x);end."),
            vec![
                Token { kind: Writeln, string: "writeln", line: 1, column: 1 },
                Token { kind: LParen, string: "(", line: 1, column: 8 },
                Token { kind: Identifier, string: "x", line: 1, column: 9 },
                Token { kind: RParen, string: ")", line: 1, column: 10 },
                Token { kind: Semicolon, string: ";", line: 1, column: 11 },
                Token { kind: End, string: "end", line: 1, column: 12 },
            ],
        );
    }

    #[test]
    fn keywords_are_case_sensitive() {
        check_lexing(
            minipas!("BEGIN Begin"),
            vec![
                Token { kind: Identifier, string: "BEGIN", line: 1, column: 1 },
                Token { kind: Identifier, string: "Begin", line: 1, column: 7 },
            ],
        );
    }

    #[test]
    fn all_reserved_words() {
        let source = minipas!("program var begin end if then else while do div mod writeln");
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        let kinds: Vec<_> = buffer.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![Program, Var, Begin, End, If, Then, Else, While, Do, Div, Mod, Writeln]
        );
    }

    #[test]
    fn operators() {
        let source = minipas!(":= + - * / ( ) = ; , : > < :=:");
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        let kinds: Vec<_> = buffer.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Assign, Plus, Minus, Times, Divide, LParen, RParen, Equals, Semicolon, Comma,
                Colon, Greater, Less, Assign, Colon
            ]
        );
    }

    #[test]
    fn colon_then_equals_with_space() {
        check_lexing(
            minipas!(": ="),
            vec![
                Token { kind: Colon, string: ":", line: 1, column: 1 },
                Token { kind: Equals, string: "=", line: 1, column: 3 },
            ],
        );
    }

    #[test]
    fn numbers_and_identifiers() {
        check_lexing(
            minipas!("123abc _x1 007"),
            vec![
                Token { kind: Number, string: "123", line: 1, column: 1 },
                Token { kind: Identifier, string: "abc", line: 1, column: 4 },
                Token { kind: Identifier, string: "_x1", line: 1, column: 8 },
                Token { kind: Number, string: "007", line: 1, column: 12 },
            ],
        );
    }

    #[test]
    fn invalid_character_keeps_lexing() {
        let source = minipas!("x := 5 @ 2;");
        let mut diags = CollectingDiagnosticConsumer::new();
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        let kinds: Vec<_> = buffer.tokens().iter().map(|t| t.kind).collect();
        assert_eq!(kinds, vec![Identifier, Assign, Number, Number, Semicolon]);

        assert_eq!(diags.len(), 1);
        let diag = &diags.diagnostics()[0];
        assert_eq!(diag.severity(), Severity::Lexical);
        assert_eq!(diag.body(), "invalid character '@' at line 1");
        assert_eq!(diag.location().line_number, 1);
        assert_eq!(diag.location().column_number, 8);
        assert_eq!(diag.location().line, "x := 5 @ 2;");
    }

    #[test]
    fn invalid_characters_each_reported() {
        let source = minipas!("begin\n  x := {1} . é\nend");
        let mut diags = CollectingDiagnosticConsumer::new();
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        assert_eq!(buffer.len(), 5);
        let bodies: Vec<_> = diags.diagnostics().iter().map(|d| d.body().to_string()).collect();
        assert_eq!(
            bodies,
            vec![
                "invalid character '{' at line 2",
                "invalid character '}' at line 2",
                "invalid character '.' at line 2",
                "invalid character 'é' at line 2",
            ]
        );
        assert_eq!(diags.diagnostics()[3].location().column_number, 14);
        assert_eq!(diags.diagnostics()[3].location().line, "  x := {1} . é");
        // Token positions after a multi-byte character are still counted in characters.
        assert_eq!(buffer.token_at(4).unwrap().line, 3);
    }

    #[test]
    fn invalid_utf8_keeps_lexing() {
        let path = std::env::temp_dir()
            .join(format!("minipas-invalid-utf8-{}.pas", std::process::id()));
        std::fs::write(&path, b"x \xff\xfe y").unwrap();
        let source = source::SourceBuffer::new_from_file(&path).unwrap();
        let mut diags = CollectingDiagnosticConsumer::new();
        let buffer = TokenizedBuffer::tokenize(&source, RuleTable::shared(), &mut diags);
        let strings: Vec<_> = buffer.tokens().iter().map(|t| t.string).collect();
        assert_eq!(strings, vec!["x", "y"]);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.diagnostics()[0].body(), "invalid character '\u{fffd}' at line 1");
        drop(buffer);
        drop(diags);
        drop(source);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn lines_are_recorded() {
        let source = minipas!("program P;\r\nbegin\n\nend\n");
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        let lines: Vec<String> = buffer.lines().iter().map(|l| l.to_string()).collect();
        assert_eq!(lines, vec!["program P;", "begin", "", "end", ""]);
    }

    #[test]
    fn location_translation() {
        let source = source::SourceBuffer::new_from_string("begin\n  x := 1", "t.pas");
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(&source, RuleTable::shared(), &mut diags);

        let location = buffer.get_location(2);
        assert_eq!(location.file_name, "t.pas");
        assert_eq!(location.line_number, 2);
        assert_eq!(location.column_number, 5);
        assert_eq!(location.line, "  x := 1");

        // Past the end points just after the last token.
        let location = buffer.get_location(4);
        assert_eq!(location.line_number, 2);
        assert_eq!(location.column_number, 9);
    }

    #[test]
    fn location_translation_empty() {
        let source = minipas!("");
        let mut diags = NullDiagnosticConsumer {};
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        let location = buffer.get_location(0);
        assert_eq!(location.line_number, 0);
        assert_eq!(location.column_number, 0);
        assert!(location.line.is_empty());
    }

    #[test]
    fn token_display() {
        let token = Token { kind: Identifier, string: "x", line: 3, column: 1 };
        assert_eq!(token.to_string(), "(IDENTIFIER, 'x', 3)");
    }

    #[test]
    fn keyword_next_to_non_ascii_letter_is_identifier() {
        let source = minipas!("éif x ifé");
        let mut diags = CollectingDiagnosticConsumer::new();
        let buffer = TokenizedBuffer::tokenize(source, RuleTable::shared(), &mut diags);
        assert_eq!(
            buffer.tokens(),
            &vec![
                Token { kind: Identifier, string: "if", line: 1, column: 2 },
                Token { kind: Identifier, string: "x", line: 1, column: 5 },
                Token { kind: Identifier, string: "if", line: 1, column: 7 },
            ]
        );
        assert_eq!(diags.len(), 2);
    }
}

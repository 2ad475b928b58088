use std::fmt::Display;

/// Represents a single lexical token of minipas.
///
/// Blank space is never tokenized, so the tokens of a buffer cover only the meaningful parts of
/// the input. Unrecognized characters are reported as diagnostics and produce no token either.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of Token.
    pub kind: TokenKind,

    // The substring representing the Token.
    pub string: &'a str,

    // The 1-based line position in the input string.
    pub line: i32,

    // The 1-based character column on the line.
    pub column: i32,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, string: &'a str, line: i32, column: i32) -> Token<'a> {
        Token { kind, string, line, column }
    }
}

/// An enumeration of all possible Token types in minipas.
///
/// The declaration order here is also the order the standard rule table tries them in, see
/// [super::RuleTable::standard].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `program` reserved word.
    Program,

    /// `var` reserved word.
    Var,

    /// `begin` reserved word.
    Begin,

    /// `end` reserved word.
    End,

    /// `if` reserved word.
    If,

    /// `then` reserved word.
    Then,

    /// `else` reserved word.
    Else,

    /// `while` reserved word.
    While,

    /// `do` reserved word.
    Do,

    /// `div` reserved word. Lexed but not used by the grammar.
    Div,

    /// `mod` reserved word. Lexed but not used by the grammar.
    Mod,

    /// `writeln`, the only I/O primitive.
    Writeln,

    /// A letter or underscore followed by 0 or more letters, digits or underscores.
    Identifier,

    /// One or more decimal digits.
    Number,

    /// The `:=` operator.
    Assign,

    /// The `+` operator.
    Plus,

    /// The `-` operator.
    Minus,

    /// The `*` operator.
    Times,

    /// The `/` operator.
    Divide,

    /// `(` single-character delimiter.
    LParen,

    /// `)` single-character delimiter.
    RParen,

    /// The `=` comparison.
    Equals,

    /// `;` single-character delimiter.
    Semicolon,

    /// `,` single-character delimiter.
    Comma,

    /// `:` single-character delimiter.
    Colon,

    /// The `>` comparison.
    Greater,

    /// The `<` comparison.
    Less,
}

assert_eq_size!(TokenKind, u8);

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 27] = [
        TokenKind::Program,
        TokenKind::Var,
        TokenKind::Begin,
        TokenKind::End,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Div,
        TokenKind::Mod,
        TokenKind::Writeln,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Assign,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Divide,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Equals,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Colon,
        TokenKind::Greater,
        TokenKind::Less,
    ];

    pub fn is_reserved_word(&self) -> bool {
        matches!(
            self,
            TokenKind::Program
                | TokenKind::Var
                | TokenKind::Begin
                | TokenKind::End
                | TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Div
                | TokenKind::Mod
                | TokenKind::Writeln
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            TokenKind::Program => "PROGRAM",
            TokenKind::Var => "VAR",
            TokenKind::Begin => "BEGIN",
            TokenKind::End => "END",
            TokenKind::If => "IF",
            TokenKind::Then => "THEN",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::Do => "DO",
            TokenKind::Div => "DIV",
            TokenKind::Mod => "MOD",
            TokenKind::Writeln => "WRITELN",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::Equals => "EQUALS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Colon => "COLON",
            TokenKind::Greater => "GREATER",
            TokenKind::Less => "LESS",
        };
        f.write_str(s)
    }
}

// One token per line listing: kind, lexeme and line.
impl<'s> Display for Token<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!("({}, '{}', {})", self.kind, self.string, self.line))
    }
}

use std::sync::OnceLock;

use super::token::TokenKind;

/// What a [MatchRule] recognizes at a given input position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// Exactly this text.
    Literal(&'static str),

    /// Exactly this text, standing as a whole word: neither the character before nor the
    /// character after the match may be a word character. Letters outside ascii count as word
    /// characters here even though no token contains them.
    Word(&'static str),

    /// A letter or underscore followed by any number of letters, digits and underscores.
    Identifier,

    /// One or more ascii digits.
    Number,
}

impl Pattern {
    /// Returns the length in bytes of the match starting exactly at `position` in `input`, or
    /// `None` if the pattern doesn't match there. Matches are never empty, so a `Literal` or
    /// `Word` of empty text never matches.
    pub fn match_at(&self, input: &[u8], position: usize) -> Option<usize> {
        let rest = input.get(position..)?;
        match self {
            Pattern::Literal(text) => {
                (!text.is_empty() && rest.starts_with(text.as_bytes())).then_some(text.len())
            }

            Pattern::Word(text) => {
                if text.is_empty() || !rest.starts_with(text.as_bytes()) {
                    return None;
                }
                let (before, _) = bstr::decode_last_utf8(&input[..position]);
                let (after, _) = bstr::decode_utf8(&rest[text.len()..]);
                let bounded = !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char);
                bounded.then_some(text.len())
            }

            Pattern::Identifier => match rest.first() {
                Some(&b) if b.is_ascii_alphabetic() || b == b'_' => {
                    Some(1 + rest[1..].iter().take_while(|&&b| is_identifier(b)).count())
                }
                _ => None,
            },

            Pattern::Number => {
                let len = rest.iter().take_while(|b| b.is_ascii_digit()).count();
                (len > 0).then_some(len)
            }
        }
    }
}

fn is_identifier(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// Undecodable bytes come through as `None` and never count.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A single entry of the rule table, pairing a pattern with the kind of token it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRule {
    pub pattern: Pattern,
    pub kind: TokenKind,
}

impl MatchRule {
    pub const fn new(pattern: Pattern, kind: TokenKind) -> MatchRule {
        MatchRule { pattern, kind }
    }
}

/// An ordered list of [MatchRule]s, tried top to bottom. The first rule that matches wins, even
/// if a later rule would match more text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<MatchRule>,
}

// Order matters:
//  * reserved words must come before the identifier rule, or `begin` lexes as an identifier.
//    Their word boundaries keep `ifx` and `whiletrue` whole identifiers.
//  * `:=` must come before `:`, or assignment lexes as a colon followed by an equals sign.
const STANDARD_RULES: [MatchRule; 27] = [
    MatchRule::new(Pattern::Word("program"), TokenKind::Program),
    MatchRule::new(Pattern::Word("var"), TokenKind::Var),
    MatchRule::new(Pattern::Word("begin"), TokenKind::Begin),
    MatchRule::new(Pattern::Word("end"), TokenKind::End),
    MatchRule::new(Pattern::Word("if"), TokenKind::If),
    MatchRule::new(Pattern::Word("then"), TokenKind::Then),
    MatchRule::new(Pattern::Word("else"), TokenKind::Else),
    MatchRule::new(Pattern::Word("while"), TokenKind::While),
    MatchRule::new(Pattern::Word("do"), TokenKind::Do),
    MatchRule::new(Pattern::Word("div"), TokenKind::Div),
    MatchRule::new(Pattern::Word("mod"), TokenKind::Mod),
    MatchRule::new(Pattern::Word("writeln"), TokenKind::Writeln),
    MatchRule::new(Pattern::Identifier, TokenKind::Identifier),
    MatchRule::new(Pattern::Number, TokenKind::Number),
    MatchRule::new(Pattern::Literal(":="), TokenKind::Assign),
    MatchRule::new(Pattern::Literal("+"), TokenKind::Plus),
    MatchRule::new(Pattern::Literal("-"), TokenKind::Minus),
    MatchRule::new(Pattern::Literal("*"), TokenKind::Times),
    MatchRule::new(Pattern::Literal("/"), TokenKind::Divide),
    MatchRule::new(Pattern::Literal("("), TokenKind::LParen),
    MatchRule::new(Pattern::Literal(")"), TokenKind::RParen),
    MatchRule::new(Pattern::Literal("="), TokenKind::Equals),
    MatchRule::new(Pattern::Literal(";"), TokenKind::Semicolon),
    MatchRule::new(Pattern::Literal(","), TokenKind::Comma),
    MatchRule::new(Pattern::Literal(":"), TokenKind::Colon),
    MatchRule::new(Pattern::Literal(">"), TokenKind::Greater),
    MatchRule::new(Pattern::Literal("<"), TokenKind::Less),
];

impl RuleTable {
    /// Builds a table from rules in the order given.
    pub fn new(rules: Vec<MatchRule>) -> RuleTable {
        RuleTable { rules }
    }

    /// The minipas rule table.
    pub fn standard() -> RuleTable {
        RuleTable::new(STANDARD_RULES.to_vec())
    }

    /// A process-wide copy of [RuleTable::standard], built on first use.
    pub fn shared() -> &'static RuleTable {
        static SHARED: OnceLock<RuleTable> = OnceLock::new();
        SHARED.get_or_init(RuleTable::standard)
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// Finds the first rule matching at `position`, returning its token kind and match length.
    pub fn first_match(&self, input: &[u8], position: usize) -> Option<(TokenKind, usize)> {
        self.rules
            .iter()
            .find_map(|rule| rule.pattern.match_at(input, position).map(|len| (rule.kind, len)))
    }
}

impl Default for RuleTable {
    fn default() -> RuleTable {
        RuleTable::standard()
    }
}

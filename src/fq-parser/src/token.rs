//! Token definitions shared by the lexer and the parser

use std::fmt;

/// Kinds of tokens produced by the lexer.
///
/// Whitespace is skipped by the lexer and has no kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `.` between the segments of a property path
    Dot,
    /// `eq`
    Eq,
    /// `eqP`
    EqP,
    /// `ge`
    Ge,
    /// `geP`
    GeP,
    /// `gt`
    Gt,
    /// `gtP`
    GtP,
    /// `like`
    Like,
    /// `ilike`
    ILike,
    /// `le`
    Le,
    /// `leP`
    LeP,
    /// `lt`
    Lt,
    /// `ltP`
    LtP,
    /// `ne`
    Ne,
    /// `neP`
    NeP,
    /// `sizeEq`
    SizeEq,
    /// `sizeGe`
    SizeGe,
    /// `sizeGt`
    SizeGt,
    /// `sizeLe`
    SizeLe,
    /// `sizeLt`
    SizeLt,
    /// `sizeNe`
    SizeNe,
    /// `isEmpty`
    IsEmpty,
    /// `isNotEmpty`
    IsNotEmpty,
    /// `isNotNull`
    IsNotNull,
    /// `isNull`
    IsNull,
    /// `and`
    And,
    /// `or`
    Or,
    /// `not`
    Not,
    /// `true`
    True,
    /// `false`
    False,
    /// Property name segment
    Identifier,
    /// `'YYYYMMDD'`
    DateLiteral,
    /// `12.5`
    FloatingPointLiteral,
    /// `42`
    DecimalLiteral,
    /// `'text'`
    StringLiteral,
}

/// Reserved words; a word matching one of these never lexes as an identifier
pub(crate) const KEYWORDS: &[(&str, TokenKind)] = &[
    ("eq", TokenKind::Eq),
    ("eqP", TokenKind::EqP),
    ("ge", TokenKind::Ge),
    ("geP", TokenKind::GeP),
    ("gt", TokenKind::Gt),
    ("gtP", TokenKind::GtP),
    ("like", TokenKind::Like),
    ("ilike", TokenKind::ILike),
    ("le", TokenKind::Le),
    ("leP", TokenKind::LeP),
    ("lt", TokenKind::Lt),
    ("ltP", TokenKind::LtP),
    ("ne", TokenKind::Ne),
    ("neP", TokenKind::NeP),
    ("sizeEq", TokenKind::SizeEq),
    ("sizeGe", TokenKind::SizeGe),
    ("sizeGt", TokenKind::SizeGt),
    ("sizeLe", TokenKind::SizeLe),
    ("sizeLt", TokenKind::SizeLt),
    ("sizeNe", TokenKind::SizeNe),
    ("isEmpty", TokenKind::IsEmpty),
    ("isNotEmpty", TokenKind::IsNotEmpty),
    ("isNotNull", TokenKind::IsNotNull),
    ("isNull", TokenKind::IsNull),
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("not", TokenKind::Not),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
];

impl TokenKind {
    /// Look up the keyword kind for a whole word
    pub fn keyword(word: &str) -> Option<TokenKind> {
        KEYWORDS
            .iter()
            .find(|(text, _)| *text == word)
            .map(|(_, kind)| *kind)
    }

    /// Whether this kind is a reserved word
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| *kind == self)
    }

    /// Whether this kind is one of the literal kinds
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::True
                | TokenKind::False
                | TokenKind::DateLiteral
                | TokenKind::FloatingPointLiteral
                | TokenKind::DecimalLiteral
                | TokenKind::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = KEYWORDS.iter().find(|(_, kind)| kind == self);
        if let Some((text, _)) = keyword {
            return write!(f, "'{}'", text);
        }
        let name = match self {
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::Dot => "'.'",
            TokenKind::Identifier => "identifier",
            TokenKind::DateLiteral => "date literal",
            TokenKind::FloatingPointLiteral => "floating point literal",
            TokenKind::DecimalLiteral => "decimal literal",
            TokenKind::StringLiteral => "string literal",
            _ => "keyword",
        };
        f.write_str(name)
    }
}

/// A single lexed token
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Token {
    /// What kind of token this is
    pub kind: TokenKind,
    /// The exact source text, quotes included for quoted literals
    pub text: String,
    /// Byte offset of the first character in the canonical input
    pub position: usize,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.text)
    }
}

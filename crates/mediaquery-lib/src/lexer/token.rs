//! Component tokens produced by the lexer.

use serde::Serialize;

/// Inclusive codepoint span `[start, end]`.
///
/// The EOF token is the one empty span: `start == end == input length`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span covering both `self` and `other`.
    pub fn cover(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Whether a numeric repr had a fraction or exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberFlag {
    Integer,
    Number,
}

impl NumberFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Number => "number",
        }
    }
}

/// Whether a hash would also be a valid identifier (`#id`) or not (`#123`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HashFlag {
    Id,
    Unrestricted,
}

impl HashFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Unrestricted => "unrestricted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Whitespace,
    String(String),
    Hash { value: String, flag: HashFlag },
    Delim(char),
    Comma,
    ParenOpen,
    ParenClose,
    Dimension {
        value: f64,
        unit: String,
        flag: NumberFlag,
    },
    Number { value: f64, flag: NumberFlag },
    Percentage { value: f64, flag: NumberFlag },
    Ident(String),
    Function(String),
    Url(String),
    Cdc,
    Colon,
    Semicolon,
    Cdo,
    AtKeyword(String),
    BracketOpen,
    BracketClose,
    BraceOpen,
    BraceClose,
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Whitespace => "Whitespace",
            Self::String(_) => "String",
            Self::Hash { .. } => "Hash",
            Self::Delim(_) => "Delim",
            Self::Comma => "Comma",
            Self::ParenOpen => "ParenOpen",
            Self::ParenClose => "ParenClose",
            Self::Dimension { .. } => "Dimension",
            Self::Number { .. } => "Number",
            Self::Percentage { .. } => "Percentage",
            Self::Ident(_) => "Ident",
            Self::Function(_) => "Function",
            Self::Url(_) => "Url",
            Self::Cdc => "Cdc",
            Self::Colon => "Colon",
            Self::Semicolon => "Semicolon",
            Self::Cdo => "Cdo",
            Self::AtKeyword(_) => "AtKeyword",
            Self::BracketOpen => "BracketOpen",
            Self::BracketClose => "BracketClose",
            Self::BraceOpen => "BraceOpen",
            Self::BraceClose => "BraceClose",
            Self::Eof => "Eof",
        }
    }

    #[inline]
    pub fn is_ident(&self, name: &str) -> bool {
        matches!(self, Self::Ident(value) if value == name)
    }

    #[inline]
    pub fn is_delim(&self, c: char) -> bool {
        matches!(self, Self::Delim(d) if *d == c)
    }

    /// Tokens whose matching `)` closes them.
    #[inline]
    pub fn opens_paren(&self) -> bool {
        matches!(self, Self::ParenOpen | Self::Function(_))
    }
}

/// Writes the kind followed by its payload, e.g. `Dimension 768px number`.
impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())?;
        match self {
            Self::String(value) | Self::Url(value) => write!(f, " {:?}", value),
            Self::Ident(value) | Self::Function(value) | Self::AtKeyword(value) => {
                write!(f, " {}", value)
            }
            Self::Hash { value, flag } => write!(f, " {} {}", value, flag.as_str()),
            Self::Delim(c) => write!(f, " {:?}", c),
            Self::Number { value, flag } | Self::Percentage { value, flag } => {
                write!(f, " {} {}", format_number(*value), flag.as_str())
            }
            Self::Dimension { value, unit, flag } => {
                write!(
                    f,
                    " {}{} {}",
                    format_number(*value),
                    unit,
                    flag.as_str()
                )
            }
            _ => Ok(()),
        }
    }
}

/// Shortest decimal repr that reads back to the same value (`768`, `0.5`).
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Keeps a fractional part on whole `number` values so they lex back with
/// the same flag (`1.0` stays `1.0`, `2e3` becomes `2000.0`).
pub fn format_flagged_number(value: f64, flag: NumberFlag) -> String {
    match flag {
        NumberFlag::Number if value.fract() == 0.0 => format!("{:?}", value),
        _ => format_number(value),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

//! Structured parse errors.
//!
//! Errors form a chain from the outermost grammar rule to the innermost one.
//! Each rule that fails because a nested rule failed wraps the nested error as
//! its `child`, so the full context survives to the caller.

use serde::Serialize;

use crate::lexer::Span;

/// Closed set of failure kinds.
///
/// Lex-level kinds (`InvalidString`, `NoLcurly`, `NoSemicolon`) are fatal for
/// the whole input; everything else is a grammar failure local to one
/// production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseErrorKind {
    ExpectLparenOrType,
    ExpectType,
    ExpectCondition,
    ExpectAnd,
    ExpectLparenOrTypeOrModifier,
    ExpectLparen,
    ExpectFeatureOrCondition,
    ExpectAndOrOr,
    ExpectRparen,
    ExpectValue,
    ExpectRange,
    MixAndWithOr,
    MismatchParens,
    EmptyQuery,
    EmptyCondition,
    EmptyFeature,
    NoLcurly,
    NoSemicolon,
    InvalidFeature,
    InvalidRange,
    InvalidString,
    InvalidQuery,
    RecursionLimitExceeded,
}

impl ParseErrorKind {
    /// Stable identifier, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExpectLparenOrType => "EXPECT_LPAREN_OR_TYPE",
            Self::ExpectType => "EXPECT_TYPE",
            Self::ExpectCondition => "EXPECT_CONDITION",
            Self::ExpectAnd => "EXPECT_AND",
            Self::ExpectLparenOrTypeOrModifier => "EXPECT_LPAREN_OR_TYPE_OR_MODIFIER",
            Self::ExpectLparen => "EXPECT_LPAREN",
            Self::ExpectFeatureOrCondition => "EXPECT_FEATURE_OR_CONDITION",
            Self::ExpectAndOrOr => "EXPECT_AND_OR_OR",
            Self::ExpectRparen => "EXPECT_RPAREN",
            Self::ExpectValue => "EXPECT_VALUE",
            Self::ExpectRange => "EXPECT_RANGE",
            Self::MixAndWithOr => "MIX_AND_WITH_OR",
            Self::MismatchParens => "MISMATCH_PARENS",
            Self::EmptyQuery => "EMPTY_QUERY",
            Self::EmptyCondition => "EMPTY_CONDITION",
            Self::EmptyFeature => "EMPTY_FEATURE",
            Self::NoLcurly => "NO_LCURLY",
            Self::NoSemicolon => "NO_SEMICOLON",
            Self::InvalidFeature => "INVALID_FEATURE",
            Self::InvalidRange => "INVALID_RANGE",
            Self::InvalidString => "INVALID_STRING",
            Self::InvalidQuery => "INVALID_QUERY",
            Self::RecursionLimitExceeded => "RECURSION_LIMIT_EXCEEDED",
        }
    }

    /// Human-readable message used by `Display` and the diagnostics printer.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::ExpectLparenOrType => "expected `(` or a media type",
            Self::ExpectType => "expected a media type",
            Self::ExpectCondition => "expected a media condition",
            Self::ExpectAnd => "expected `and`",
            Self::ExpectLparenOrTypeOrModifier => {
                "expected `(`, a media type, or `not`/`only`"
            }
            Self::ExpectLparen => "expected `(`",
            Self::ExpectFeatureOrCondition => "expected a media feature or condition",
            Self::ExpectAndOrOr => "expected `and` or `or`",
            Self::ExpectRparen => "expected `)`",
            Self::ExpectValue => "expected a number, dimension, ratio or identifier",
            Self::ExpectRange => "expected a comparison operator",
            Self::MixAndWithOr => "cannot mix `and` and `or` without parentheses",
            Self::MismatchParens => "mismatched parentheses",
            Self::EmptyQuery => "empty media query",
            Self::EmptyCondition => "empty media condition",
            Self::EmptyFeature => "empty media feature",
            Self::NoLcurly => "`{` is not allowed in a media query",
            Self::NoSemicolon => "`;` is not allowed in a media query",
            Self::InvalidFeature => "invalid media feature",
            Self::InvalidRange => "invalid range",
            Self::InvalidString => "unterminated string",
            Self::InvalidQuery => "unexpected input after media query",
            Self::RecursionLimitExceeded => "parentheses nested too deeply",
        }
    }

    /// Lex-level kinds abort the whole input, list members included.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidString | Self::NoLcurly | Self::NoSemicolon)
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed parse, with the inclusive codepoint span it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{} at {}..{}", .kind.fallback_message(), .start, .end)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub start: usize,
    pub end: usize,
    #[source]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub child: Option<Box<ParseError>>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            start,
            end,
            child: None,
        }
    }

    pub(crate) fn at(kind: ParseErrorKind, span: Span) -> Self {
        Self::new(kind, span.start, span.end)
    }

    /// Wraps `self` as the child of a new outer error.
    pub(crate) fn wrap(self, kind: ParseErrorKind, span: Span) -> Self {
        Self {
            kind,
            start: span.start,
            end: span.end,
            child: Some(Box::new(self)),
        }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    /// Walks the chain from outermost to innermost.
    pub fn chain(&self) -> impl Iterator<Item = &ParseError> {
        std::iter::successors(Some(self), |e| e.child.as_deref())
    }

    pub fn innermost(&self) -> &ParseError {
        self.chain().last().unwrap_or(self)
    }

    pub fn kinds(&self) -> Vec<ParseErrorKind> {
        self.chain().map(|e| e.kind).collect()
    }

    pub fn is_fatal(&self) -> bool {
        self.chain().any(|e| e.kind.is_fatal())
    }
}

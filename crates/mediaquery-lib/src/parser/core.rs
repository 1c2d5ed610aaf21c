//! Grammar state and token-slice helpers shared by the productions.
//!
//! Productions work on slices of parser tokens: each one receives exactly the
//! tokens it must match and either matches deterministically from its first
//! token or fails immediately. There is no backtracking across alternatives.

use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{ParserToken, Span, TokenKind};

/// Recursive-descent state: the nesting guard and the EOF position used for
/// spans of empty slices.
pub(crate) struct Grammar {
    recursion_limit: Option<u32>,
    depth: u32,
    eof: usize,
}

impl Grammar {
    pub(crate) fn new(eof: usize) -> Self {
        Self {
            recursion_limit: None,
            depth: 0,
            eof,
        }
    }

    pub(crate) fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Span of a token slice, or an empty span at EOF for an empty slice.
    pub(super) fn span(&self, tokens: &[ParserToken]) -> Span {
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => first.span.cover(last.span),
            _ => Span::new(self.eof, self.eof),
        }
    }

    pub(super) fn error(&self, kind: ParseErrorKind, tokens: &[ParserToken]) -> ParseError {
        ParseError::at(kind, self.span(tokens))
    }

    pub(super) fn enter_recursion(&mut self, tokens: &[ParserToken]) -> Result<(), ParseError> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            return Err(self.error(ParseErrorKind::RecursionLimitExceeded, tokens));
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

/// Wraps a nested failure, except a recursion failure which surfaces as is.
pub(super) fn wrap_nested(err: ParseError, kind: ParseErrorKind, span: Span) -> ParseError {
    if err.kind == ParseErrorKind::RecursionLimitExceeded {
        err
    } else {
        err.wrap(kind, span)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Closer {
    Paren,
    Bracket,
    Brace,
}

/// Positions of commas that are not inside `(...)`, `[...]` or `{...}`.
///
/// A closing bracket that does not match the innermost open one is ignored;
/// the segment holding it fails its own parse later.
fn top_level_commas(tokens: &[ParserToken]) -> Vec<usize> {
    let mut commas = Vec::new();
    let mut stack: Vec<Closer> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        match &token.kind {
            TokenKind::ParenOpen | TokenKind::Function(_) => stack.push(Closer::Paren),
            TokenKind::BracketOpen => stack.push(Closer::Bracket),
            TokenKind::BraceOpen => stack.push(Closer::Brace),
            TokenKind::ParenClose => pop_matching(&mut stack, Closer::Paren),
            TokenKind::BracketClose => pop_matching(&mut stack, Closer::Bracket),
            TokenKind::BraceClose => pop_matching(&mut stack, Closer::Brace),
            TokenKind::Comma if stack.is_empty() => commas.push(i),
            _ => {}
        }
    }

    commas
}

/// Splits a query list on top-level commas, dropping empty segments.
pub(crate) fn split_query_list(tokens: &[ParserToken]) -> Vec<&[ParserToken]> {
    let mut segments = Vec::new();
    let mut start = 0;

    for comma in top_level_commas(tokens) {
        segments.push(&tokens[start..comma]);
        start = comma + 1;
    }
    segments.push(&tokens[start..]);

    segments.retain(|segment| !segment.is_empty());
    segments
}

pub(crate) fn first_top_level_comma(tokens: &[ParserToken]) -> Option<usize> {
    top_level_commas(tokens).first().copied()
}

fn pop_matching(stack: &mut Vec<Closer>, closer: Closer) {
    if stack.last() == Some(&closer) {
        stack.pop();
    }
}

/// Finds the `)` matching the `(` at index 0 and the maximum paren depth
/// reached inside the group (1 means no nested parens).
pub(super) fn matching_paren(tokens: &[ParserToken]) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut max_depth = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        if token.kind.opens_paren() {
            depth += 1;
            max_depth = max_depth.max(depth);
        } else if token.kind == TokenKind::ParenClose {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some((i, max_depth));
            }
        }
    }

    None
}

pub(super) fn ident_value(token: &ParserToken) -> Option<&str> {
    match &token.kind {
        TokenKind::Ident(value) => Some(value),
        _ => None,
    }
}

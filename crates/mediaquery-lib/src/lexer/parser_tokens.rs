//! Conversion from the raw token stream to the stream the grammar consumes.
//!
//! - `Eof` is dropped
//! - `{` and `;` are rejected outright: a standalone media query never
//!   contains a block or a declaration
//! - whitespace runs collapse into `is_after_space` on the following token;
//!   trailing whitespace is carried by nothing

use super::{Span, Token, TokenKind};
use crate::error::{ParseError, ParseErrorKind};

#[derive(Debug, Clone, PartialEq)]
pub struct ParserToken {
    pub kind: TokenKind,
    pub span: Span,
    pub is_after_space: bool,
}

impl ParserToken {
    pub fn new(kind: TokenKind, span: Span, is_after_space: bool) -> Self {
        Self {
            kind,
            span,
            is_after_space,
        }
    }
}

pub fn to_parser_tokens(tokens: Vec<Token>) -> Result<Vec<ParserToken>, ParseError> {
    let mut out = Vec::with_capacity(tokens.len());
    let mut after_space = false;

    for token in tokens {
        match token.kind {
            TokenKind::Whitespace => after_space = true,
            TokenKind::Eof => {}
            TokenKind::BraceOpen => {
                return Err(ParseError::at(ParseErrorKind::NoLcurly, token.span));
            }
            TokenKind::Semicolon => {
                return Err(ParseError::at(ParseErrorKind::NoSemicolon, token.span));
            }
            kind => {
                out.push(ParserToken::new(kind, token.span, after_space));
                after_space = false;
            }
        }
    }

    Ok(out)
}

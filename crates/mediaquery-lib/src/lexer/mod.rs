//! Lexer for media query text.
//!
//! Implements the subset of CSS tokenization reachable from media query
//! syntax, still honouring the general rules for strings, comments, escapes
//! and numeric forms. Works on preprocessed codepoints (see [`crate::reader`])
//! so every span is a codepoint offset.
//!
//! ## Error handling
//!
//! A newline inside a string or an unterminated string is fatal: the whole
//! lex fails with `InvalidString` and no partial token list is returned.
//! Everything else that CSS would call a parse error degrades to a `Delim`.

mod cursor;
mod parser_tokens;
mod token;

pub use parser_tokens::{ParserToken, to_parser_tokens};
pub use token::{
    HashFlag, NumberFlag, Span, Token, TokenKind, format_flagged_number, format_number,
};

pub(crate) use cursor::is_ident_char;

use cursor::{Cursor, is_hex_digit, is_non_printable, is_whitespace};

use crate::error::{ParseError, ParseErrorKind};

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;
const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Tokenizes codepoints, always ending with an `Eof` token.
pub fn tokenize(codepoints: &[char]) -> Result<Vec<Token>, ParseError> {
    Lexer::new(codepoints).run()
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(codepoints: &'a [char]) -> Self {
        Self {
            cursor: Cursor::new(codepoints),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, ParseError> {
        loop {
            self.skip_comments();
            let start = self.cursor.pos();
            if self.cursor.is_eof() {
                let end = self.cursor.len();
                self.tokens
                    .push(Token::new(TokenKind::Eof, Span::new(end, end)));
                return Ok(self.tokens);
            }

            let kind = self.next_kind()?;
            let end = self.cursor.pos().saturating_sub(1).max(start);
            self.tokens.push(Token::new(kind, Span::new(start, end)));
        }
    }

    /// Unterminated comments silently run to EOF.
    fn skip_comments(&mut self) {
        while self.cursor.starts_with("/*") {
            self.cursor.advance(2);
            loop {
                if self.cursor.is_eof() {
                    return;
                }
                if self.cursor.starts_with("*/") {
                    self.cursor.advance(2);
                    break;
                }
                self.cursor.advance(1);
            }
        }
    }

    fn next_kind(&mut self) -> Result<TokenKind, ParseError> {
        let Some(c) = self.cursor.peek(0) else {
            return Ok(TokenKind::Eof);
        };

        let kind = match c {
            c if is_whitespace(c) => {
                self.cursor.eat_while(is_whitespace);
                TokenKind::Whitespace
            }
            '"' | '\'' => self.consume_string(c)?,
            '#' => self.consume_hash(),
            '(' => self.single(TokenKind::ParenOpen),
            ')' => self.single(TokenKind::ParenClose),
            '[' => self.single(TokenKind::BracketOpen),
            ']' => self.single(TokenKind::BracketClose),
            '{' => self.single(TokenKind::BraceOpen),
            '}' => self.single(TokenKind::BraceClose),
            ',' => self.single(TokenKind::Comma),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            '+' | '.' if self.cursor.starts_number() => self.consume_numeric(),
            '-' if self.cursor.starts_number() => self.consume_numeric(),
            '-' if self.cursor.starts_with("-->") => {
                self.cursor.advance(3);
                TokenKind::Cdc
            }
            '-' if self.cursor.starts_ident_at(0) => self.consume_ident_like(),
            '<' if self.cursor.starts_with("<!--") => {
                self.cursor.advance(4);
                TokenKind::Cdo
            }
            '@' if self.cursor.starts_ident_at(1) => {
                self.cursor.advance(1);
                TokenKind::AtKeyword(self.consume_ident_sequence().to_ascii_lowercase())
            }
            '\\' if self.cursor.starts_escape_at(0) => self.consume_ident_like(),
            c if c.is_ascii_digit() => self.consume_numeric(),
            c if cursor::is_ident_start(c) => self.consume_ident_like(),
            c => self.single(TokenKind::Delim(c)),
        };

        Ok(kind)
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance(1);
        kind
    }

    fn consume_string(&mut self, quote: char) -> Result<TokenKind, ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance(1);
        let mut value = String::new();

        loop {
            match self.cursor.bump() {
                Some(c) if c == quote => return Ok(TokenKind::String(value)),
                None | Some('\n') => {
                    let end = self.cursor.pos().saturating_sub(1).max(start);
                    return Err(ParseError::new(ParseErrorKind::InvalidString, start, end));
                }
                Some('\\') => match self.cursor.peek(0) {
                    // A trailing `\` is dropped; the next iteration sees EOF.
                    None => {}
                    Some('\n') => self.cursor.advance(1),
                    Some(_) => value.push(self.consume_escape()),
                },
                Some(c) => value.push(c),
            }
        }
    }

    fn consume_hash(&mut self) -> TokenKind {
        let is_hash =
            self.cursor.peek(1).is_some_and(is_ident_char) || self.cursor.starts_escape_at(1);
        if !is_hash {
            return self.single(TokenKind::Delim('#'));
        }

        let flag = if self.cursor.starts_ident_at(1) {
            HashFlag::Id
        } else {
            HashFlag::Unrestricted
        };
        self.cursor.advance(1);
        TokenKind::Hash {
            value: self.consume_ident_sequence(),
            flag,
        }
    }

    /// Assumes the leading `\` has already been consumed.
    fn consume_escape(&mut self) -> char {
        let Some(c) = self.cursor.bump() else {
            return REPLACEMENT;
        };
        if !is_hex_digit(c) {
            return c;
        }

        let mut hex = String::from(c);
        while hex.len() < 6 {
            match self.cursor.peek(0) {
                Some(h) if is_hex_digit(h) => {
                    hex.push(h);
                    self.cursor.advance(1);
                }
                _ => break,
            }
        }
        if self.cursor.peek(0).is_some_and(is_whitespace) {
            self.cursor.advance(1);
        }

        match u32::from_str_radix(&hex, 16) {
            Ok(0) => REPLACEMENT,
            Ok(v) if v > MAX_CODEPOINT => REPLACEMENT,
            Ok(v) => char::from_u32(v).unwrap_or(REPLACEMENT),
            Err(_) => REPLACEMENT,
        }
    }

    fn consume_ident_sequence(&mut self) -> String {
        let mut out = String::new();
        loop {
            match self.cursor.peek(0) {
                Some(c) if is_ident_char(c) => {
                    out.push(c);
                    self.cursor.advance(1);
                }
                _ if self.cursor.starts_escape_at(0) => {
                    self.cursor.advance(1);
                    out.push(self.consume_escape());
                }
                _ => return out,
            }
        }
    }

    fn consume_ident_like(&mut self) -> TokenKind {
        let name = self.consume_ident_sequence().to_ascii_lowercase();
        if self.cursor.peek(0) != Some('(') {
            return TokenKind::Ident(name);
        }
        self.cursor.advance(1);

        if name == "url" {
            return self.consume_url_or_function();
        }
        TokenKind::Function(name)
    }

    /// Called right after `url(`. Quoted bodies and malformed bare bodies
    /// both back off to a `url` function token.
    fn consume_url_or_function(&mut self) -> TokenKind {
        let body_start = self.cursor.pos();
        let quote_ahead = |c: Option<char>| matches!(c, Some('"' | '\''));

        let mut offset = 0;
        while self.cursor.peek(offset).is_some_and(is_whitespace) {
            offset += 1;
        }
        if quote_ahead(self.cursor.peek(offset)) {
            return TokenKind::Function("url".to_string());
        }

        match self.consume_url_body() {
            Some(url) => TokenKind::Url(url),
            None => {
                self.cursor.reset(body_start);
                TokenKind::Function("url".to_string())
            }
        }
    }

    fn consume_url_body(&mut self) -> Option<String> {
        let mut value = String::new();
        self.cursor.eat_while(is_whitespace);

        loop {
            match self.cursor.bump() {
                None | Some(')') => return Some(value),
                Some(c) if is_whitespace(c) => {
                    self.cursor.eat_while(is_whitespace);
                    return match self.cursor.bump() {
                        None | Some(')') => Some(value),
                        Some(_) => None,
                    };
                }
                Some('"' | '\'' | '(') => return None,
                Some(c) if is_non_printable(c) => return None,
                Some('\\') => {
                    if self.cursor.peek(0) == Some('\n') {
                        return None;
                    }
                    value.push(self.consume_escape());
                }
                Some(c) => value.push(c),
            }
        }
    }

    fn consume_numeric(&mut self) -> TokenKind {
        let (value, flag) = self.consume_number();

        if self.cursor.starts_ident_at(0) {
            let unit = self.consume_ident_sequence().to_ascii_lowercase();
            return TokenKind::Dimension {
                value,
                unit,
                flag: NumberFlag::Number,
            };
        }
        if self.cursor.peek(0) == Some('%') {
            self.cursor.advance(1);
            return TokenKind::Percentage { value, flag };
        }
        TokenKind::Number { value, flag }
    }

    fn consume_number(&mut self) -> (f64, NumberFlag) {
        let digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
        let mut repr = String::new();
        let mut flag = NumberFlag::Integer;

        if let Some(sign @ ('+' | '-')) = self.cursor.peek(0) {
            repr.push(sign);
            self.cursor.advance(1);
        }
        self.push_digits(&mut repr);

        if self.cursor.peek(0) == Some('.') && digit(self.cursor.peek(1)) {
            repr.push('.');
            self.cursor.advance(1);
            self.push_digits(&mut repr);
            flag = NumberFlag::Number;
        }

        if let Some(e @ ('e' | 'E')) = self.cursor.peek(0) {
            let signed =
                matches!(self.cursor.peek(1), Some('+' | '-')) && digit(self.cursor.peek(2));
            if digit(self.cursor.peek(1)) || signed {
                repr.push(e);
                self.cursor.advance(1);
                if signed && let Some(sign) = self.cursor.bump() {
                    repr.push(sign);
                }
                self.push_digits(&mut repr);
                flag = NumberFlag::Number;
            }
        }

        // Out-of-range exponents clamp to the largest finite value.
        let mut value = repr
            .parse::<f64>()
            .map(|v| v.clamp(f64::MIN, f64::MAX))
            .unwrap_or(0.0);
        if value == 0.0 {
            // Normalizes -0 to 0.
            value = 0.0;
        }
        (value, flag)
    }

    fn push_digits(&mut self, repr: &mut String) {
        while let Some(d) = self.cursor.peek(0).filter(|c| c.is_ascii_digit()) {
            repr.push(d);
            self.cursor.advance(1);
        }
    }
}

#[cfg(test)]
mod lexer_tests;

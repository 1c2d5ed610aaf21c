//! Codepoint cursor and the character classes of CSS tokenization.

pub(super) struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    #[inline]
    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(super) fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub(super) fn reset(&mut self, pos: usize) {
        self.pos = pos;
    }

    #[inline]
    pub(super) fn is_eof(&self) -> bool {
        self.pos >= self.chars.len()
    }

    #[inline]
    pub(super) fn peek(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    #[inline]
    pub(super) fn bump(&mut self) -> Option<char> {
        let c = self.peek(0)?;
        self.pos += 1;
        Some(c)
    }

    #[inline]
    pub(super) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.chars.len());
    }

    pub(super) fn starts_with(&self, s: &str) -> bool {
        s.chars().enumerate().all(|(i, c)| self.peek(i) == Some(c))
    }

    pub(super) fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek(0).is_some_and(&pred) {
            self.pos += 1;
        }
    }

    /// Checks the three codepoints at `offset` against `would_start_ident`.
    pub(super) fn starts_ident_at(&self, offset: usize) -> bool {
        would_start_ident(
            self.peek(offset),
            self.peek(offset + 1),
            self.peek(offset + 2),
        )
    }

    pub(super) fn starts_number(&self) -> bool {
        would_start_number(self.peek(0), self.peek(1), self.peek(2))
    }

    pub(super) fn starts_escape_at(&self, offset: usize) -> bool {
        is_valid_escape(self.peek(offset), self.peek(offset + 1))
    }
}

#[inline]
pub(super) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

#[inline]
pub(super) fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

#[inline]
pub(super) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c as u32 >= 0x80
}

#[inline]
pub(crate) fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit() || c == '-'
}

#[inline]
pub(super) fn is_non_printable(c: char) -> bool {
    matches!(c as u32, 0x00..=0x08 | 0x0B | 0x0E..=0x1F | 0x7F)
}

/// `\` not followed by a newline. A `\` at EOF still counts.
#[inline]
pub(super) fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && second != Some('\n')
}

pub(super) fn would_start_ident(a: Option<char>, b: Option<char>, c: Option<char>) -> bool {
    match a {
        Some('-') => {
            b.is_some_and(|b| is_ident_start(b) || b == '-') || is_valid_escape(b, c)
        }
        Some('\\') => is_valid_escape(a, b),
        Some(a) => is_ident_start(a),
        None => false,
    }
}

pub(super) fn would_start_number(a: Option<char>, b: Option<char>, c: Option<char>) -> bool {
    let digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
    match a {
        Some('+' | '-') => digit(b) || (b == Some('.') && digit(c)),
        Some('.') => digit(b),
        a => digit(a),
    }
}

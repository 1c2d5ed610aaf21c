//! Codepoint reader.
//!
//! Turns input text into the codepoint sequence the lexer walks, applying CSS
//! input preprocessing on the way:
//!
//! 1. `\r\n`, `\r` and `\x0C` (form feed) become a single `\n`
//! 2. NUL and lone surrogates become U+FFFD
//!
//! Reading never fails.

const REPLACEMENT: char = char::REPLACEMENT_CHARACTER;

/// Reads a UTF-8 string into preprocessed codepoints.
///
/// Rust strings cannot hold lone surrogates, so only NUL needs replacing here.
pub fn read(text: &str) -> Vec<char> {
    normalize(text.chars())
}

/// Reads UTF-16 code units, pairing surrogates and replacing lone ones.
pub fn read_utf16(units: &[u16]) -> Vec<char> {
    normalize(char::decode_utf16(units.iter().copied()).map(|r| r.unwrap_or(REPLACEMENT)))
}

fn normalize(chars: impl Iterator<Item = char>) -> Vec<char> {
    let mut out = Vec::new();
    let mut chars = chars.peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                out.push('\n');
            }
            '\x0C' => out.push('\n'),
            '\0' => out.push(REPLACEMENT),
            _ => out.push(c),
        }
    }

    out
}

/// Collects codepoints back into a string (used when rendering against spans).
pub fn to_text(codepoints: &[char]) -> String {
    codepoints.iter().collect()
}

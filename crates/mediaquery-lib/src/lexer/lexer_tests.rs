use super::{ParserToken, TokenKind, to_parser_tokens, tokenize};
use crate::error::ParseErrorKind;
use crate::reader::read;

/// Format tokens without whitespace and EOF (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false, false)
}

/// Format tokens with whitespace and EOF included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true, false)
}

fn snapshot_spans(input: &str) -> String {
    format_tokens(input, false, true)
}

fn format_tokens(input: &str, include_trivia: bool, spans: bool) -> String {
    let tokens = tokenize(&read(input)).unwrap();
    let mut out = String::new();
    for token in tokens {
        let trivia = matches!(token.kind, TokenKind::Whitespace | TokenKind::Eof);
        if include_trivia || !trivia {
            if spans {
                out.push_str(&format!("{} [{}]\n", token.kind, token.span));
            } else {
                out.push_str(&format!("{}\n", token.kind));
            }
        }
    }
    out
}

fn parser_tokens(input: &str) -> Vec<ParserToken> {
    to_parser_tokens(tokenize(&read(input)).unwrap()).unwrap()
}

#[test]
fn feature_with_dimension() {
    insta::assert_snapshot!(snapshot("(min-width: 768px)"), @r"
    ParenOpen
    Ident min-width
    Colon
    Dimension 768px number
    ParenClose
    ");
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("( ) [ ] } , : < > = / ."), @r"
    ParenOpen
    ParenClose
    BracketOpen
    BracketClose
    BraceClose
    Comma
    Colon
    Delim '<'
    Delim '>'
    Delim '='
    Delim '/'
    Delim '.'
    ");
}

#[test]
fn numbers() {
    insta::assert_snapshot!(snapshot("1 +2 -3 .5 1.5 1e3 1E-2 -0 5%"), @r"
    Number 1 integer
    Number 2 integer
    Number -3 integer
    Number 0.5 number
    Number 1.5 number
    Number 1000 number
    Number 0.01 number
    Number 0 integer
    Percentage 5 integer
    ");
}

#[test]
fn overflowing_exponent_is_clamped() {
    let tokens = tokenize(&read("1e400 -1e400 1e400px")).unwrap();
    let values: Vec<f64> = tokens
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::Number { value, .. } | TokenKind::Dimension { value, .. } => Some(value),
            _ => None,
        })
        .collect();

    assert_eq!(values, [f64::MAX, f64::MIN, f64::MAX]);
}

#[test]
fn dimensions_take_lowercased_units() {
    insta::assert_snapshot!(snapshot("1em 2E3PX 3e 4dpi"), @r"
    Dimension 1em number
    Dimension 2000px number
    Dimension 3e number
    Dimension 4dpi number
    ");
}

#[test]
fn sign_without_digits_is_delim() {
    insta::assert_snapshot!(snapshot("+ - +a"), @r"
    Delim '+'
    Delim '-'
    Delim '+'
    Ident a
    ");
}

#[test]
fn idents_are_lowercased() {
    insta::assert_snapshot!(snapshot("SCREEN And -webkit-min-device-pixel-ratio --custom"), @r"
    Ident screen
    Ident and
    Ident -webkit-min-device-pixel-ratio
    Ident --custom
    ");
}

#[test]
fn ident_escapes() {
    insta::assert_snapshot!(snapshot(r"\66 oo \31 23 a\:b"), @r"
    Ident foo
    Ident 123
    Ident a:b
    ");
}

#[test]
fn strings_with_escapes() {
    insta::assert_snapshot!(snapshot(r#"'a\62 c' "x\"y" 'A'"#), @r#"
    String "abc"
    String "x\"y"
    String "A"
    "#);
}

#[test]
fn string_line_continuation() {
    insta::assert_snapshot!(snapshot("'a\\\nb'"), @r#"String "ab""#);
}

#[test]
fn unterminated_string_is_fatal() {
    let err = tokenize(&read("(a) \"abc")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidString);
    assert_eq!((err.start, err.end), (4, 7));
}

#[test]
fn newline_in_string_is_fatal() {
    let err = tokenize(&read("\"\n\"")).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidString);
    assert_eq!((err.start, err.end), (0, 1));
}

#[test]
fn comments_are_skipped() {
    insta::assert_snapshot!(snapshot_raw("a/* x */b /* unterminated"), @r"
    Ident a
    Ident b
    Whitespace
    Eof
    ");
}

#[test]
fn whitespace_runs_collapse() {
    insta::assert_snapshot!(snapshot_raw("a \t\n b"), @r"
    Ident a
    Whitespace
    Ident b
    Eof
    ");
}

#[test]
fn hashes() {
    insta::assert_snapshot!(snapshot("#abc #123 #-x # "), @r"
    Hash abc id
    Hash 123 unrestricted
    Hash -x id
    Delim '#'
    ");
}

#[test]
fn cdo_cdc_and_at_keywords() {
    insta::assert_snapshot!(snapshot("<!-- --> @Media @ "), @r"
    Cdo
    Cdc
    AtKeyword media
    Delim '@'
    ");
}

#[test]
fn functions_and_urls() {
    insta::assert_snapshot!(snapshot("url(foo.png) url( 'x' ) URL(a b) calc(1px)"), @r#"
    Url "foo.png"
    Function url
    String "x"
    ParenClose
    Function url
    Ident a
    Ident b
    ParenClose
    Function calc
    Dimension 1px number
    ParenClose
    "#);
}

#[test]
fn spans_are_inclusive_codepoint_offsets() {
    insta::assert_snapshot!(snapshot_spans("(width >= 10px)"), @r"
    ParenOpen [0..0]
    Ident width [1..5]
    Delim '>' [7..7]
    Delim '=' [8..8]
    Dimension 10px number [10..13]
    ParenClose [14..14]
    ");
}

#[test]
fn spans_count_codepoints_not_bytes() {
    insta::assert_snapshot!(snapshot_spans("(é) (x)"), @r"
    ParenOpen [0..0]
    Ident é [1..1]
    ParenClose [2..2]
    ParenOpen [4..4]
    Ident x [5..5]
    ParenClose [6..6]
    ");
}

#[test]
fn eof_has_empty_span_at_end() {
    let tokens = tokenize(&read("ab")).unwrap();
    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!((eof.span.start, eof.span.end), (2, 2));
}

#[test]
fn parser_tokens_carry_adjacency() {
    let flags: Vec<bool> = parser_tokens("(width >= 10px)")
        .iter()
        .map(|t| t.is_after_space)
        .collect();
    assert_eq!(flags, vec![false, false, true, false, true, false]);
}

#[test]
fn comments_alone_do_not_set_adjacency() {
    let tokens = parser_tokens("<\t=</**/=");
    let flags: Vec<bool> = tokens.iter().map(|t| t.is_after_space).collect();
    assert_eq!(flags, vec![false, true, false, false]);
}

#[test]
fn parser_tokens_drop_trailing_whitespace_and_eof() {
    let tokens = parser_tokens("  screen   ");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_after_space);
    assert!(tokens[0].kind.is_ident("screen"));
}

#[test]
fn lcurly_is_rejected() {
    let err = to_parser_tokens(tokenize(&read("screen {")).unwrap()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NoLcurly);
    assert_eq!((err.start, err.end), (7, 7));
}

#[test]
fn semicolon_is_rejected() {
    let err = to_parser_tokens(tokenize(&read("a;b")).unwrap()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NoSemicolon);
    assert_eq!((err.start, err.end), (1, 1));
}

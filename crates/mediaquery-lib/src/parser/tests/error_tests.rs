use crate::error::ParseErrorKind;
use crate::test_utils::shot_error;
use crate::{parse_media_condition, parse_media_query, parse_media_query_list};

#[test]
fn or_after_type_needs_parens() {
    shot_error!("screen and (a) or (b)", @r"
    EXPECT_CONDITION 11..20
    MIX_AND_WITH_OR 15..16
    ");
}

#[test]
fn or_after_type_in_parens_is_fine() {
    assert!(parse_media_query("screen and ((a) or (b))").is_ok());
}

#[test]
fn empty_query() {
    shot_error!("", @"EMPTY_QUERY 0..0");
}

#[test]
fn trailing_comma() {
    shot_error!("screen,", @"INVALID_QUERY 6..6");
}

#[test]
fn second_query() {
    shot_error!("screen, print", @"INVALID_QUERY 6..12");
}

#[test]
fn first_query_error_wins_over_trailing_input() {
    shot_error!("foo, print", @"EXPECT_TYPE 0..2");
}

#[test]
fn unknown_type() {
    shot_error!("foo", @"EXPECT_TYPE 0..2");
}

#[test]
fn lone_not() {
    shot_error!("not", @"EXPECT_LPAREN_OR_TYPE 0..2");
}

#[test]
fn lone_only() {
    shot_error!("only", @"EXPECT_TYPE 0..3");
}

#[test]
fn only_before_condition() {
    shot_error!("only (color)", @"EXPECT_TYPE 5..5");
}

#[test]
fn not_before_number() {
    shot_error!("not 5", @"EXPECT_LPAREN_OR_TYPE 4..4");
}

#[test]
fn missing_and() {
    shot_error!("screen (color)", @"EXPECT_AND 7..7");
}

#[test]
fn missing_condition_after_and() {
    shot_error!("screen and", @"EXPECT_CONDITION 7..9");
}

#[test]
fn missing_condition_after_and_not() {
    shot_error!("screen and not", @r"
    EXPECT_CONDITION 11..13
    EMPTY_CONDITION 14..14
    ");
}

#[test]
fn unexpected_first_token() {
    shot_error!("5px", @"EXPECT_LPAREN_OR_TYPE_OR_MODIFIER 0..2");
}

#[test]
fn juxtaposed_groups() {
    shot_error!("screen and (a) (b)", @r"
    EXPECT_CONDITION 11..17
    EXPECT_AND_OR_OR 15..15
    ");
}

#[test]
fn bare_condition_mixing_operators() {
    shot_error!("(a) and (b) or (c)", @r"
    EXPECT_CONDITION 0..17
    MIX_AND_WITH_OR 12..13
    ");
}

#[test]
fn negated_condition_with_second_operand() {
    shot_error!("not (a) and (b)", @r"
    EXPECT_CONDITION 0..14
    MIX_AND_WITH_OR 8..10
    ");
}

#[test]
fn empty_group_in_query() {
    shot_error!("()", @r"
    EXPECT_CONDITION 0..1
    EXPECT_FEATURE_OR_CONDITION 0..1
    EMPTY_FEATURE 0..1
    ");
}

#[test]
fn opposite_range_in_query() {
    shot_error!("(100px < width > 100px)", @r"
    EXPECT_CONDITION 0..22
    EXPECT_FEATURE_OR_CONDITION 0..22
    INVALID_RANGE 0..22
    ");
}

#[test]
fn newline_in_string_fails_everything() {
    let err = parse_media_query_list("\"\n\"").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidString);
    assert!(err.is_fatal());
}

#[test]
fn string_error_is_not_contained_by_list_member() {
    let err = parse_media_query_list("screen, (width: \"x").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::InvalidString);
}

#[test]
fn curly_brace_is_rejected() {
    let err = parse_media_query_list("screen { color: red }").unwrap_err();
    insta::assert_snapshot!(format!("{} {}", err.kind, err.span()), @"NO_LCURLY 7..7");
}

#[test]
fn semicolon_is_rejected() {
    let err = parse_media_condition("(a);").unwrap_err();
    insta::assert_snapshot!(format!("{} {}", err.kind, err.span()), @"NO_SEMICOLON 3..3");
}

#[test]
fn error_display() {
    let err = parse_media_query("screen and").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"expected a media condition at 7..9");
}

#[test]
fn error_json() {
    let err = parse_media_query("screen and (a) or (b)").unwrap_err();
    let json = serde_json::to_string_pretty(&err).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "kind": "EXPECT_CONDITION",
      "start": 11,
      "end": 20,
      "child": {
        "kind": "MIX_AND_WITH_OR",
        "start": 15,
        "end": 16
      }
    }
    "#);
}

use crate::ast::{NumberFlag, Value};
use crate::test_utils::raw_parser;
use crate::{parse_media_query_list, stringify};

fn roundtrip(input: &str) -> String {
    stringify(&parse_media_query_list(input).unwrap())
}

#[test]
fn type_and_feature() {
    insta::assert_snapshot!(roundtrip("screen and (min-width: 768px)"), @"screen and (min-width: 768px)");
}

#[test]
fn canonical_spacing_and_case() {
    insta::assert_snapshot!(
        roundtrip("SCREEN   AND  (MIN-WIDTH:10PX)"),
        @"screen and (min-width: 10px)"
    );
}

#[test]
fn empty_list_is_all() {
    insta::assert_snapshot!(roundtrip(""), @"all");
}

#[test]
fn never_matching_types() {
    insta::assert_snapshot!(roundtrip("tty, not tty, only tty"), @"not all, all, not all");
}

#[test]
fn invalid_member_prints_not_all() {
    insta::assert_snapshot!(roundtrip("screen, foo"), @"screen, not all");
}

#[test]
fn bare_conditions() {
    insta::assert_snapshot!(roundtrip("(color), not (color)"), @"(color), not (color)");
}

#[test]
fn or_after_type_keeps_parens() {
    insta::assert_snapshot!(roundtrip("screen and ((a) or (b))"), @"screen and ((a) or (b))");
}

#[test]
fn and_after_type_is_flattened() {
    insta::assert_snapshot!(roundtrip("screen and ((a) and (b))"), @"screen and (a) and (b)");
}

#[test]
fn type_and_not() {
    insta::assert_snapshot!(roundtrip("print and not (color)"), @"print and not (color)");
}

#[test]
fn double_negation_is_dropped() {
    insta::assert_snapshot!(roundtrip("(not (not (color)))"), @"(color)");
}

#[test]
fn negated_chain() {
    insta::assert_snapshot!(roundtrip("not ((a) and (b))"), @"not ((a) and (b))");
}

#[test]
fn range() {
    insta::assert_snapshot!(roundtrip("(100px<=width<200px)"), @"(100px <= width < 200px)");
}

#[test]
fn ratio() {
    insta::assert_snapshot!(roundtrip("(aspect-ratio:16/9)"), @"(aspect-ratio: 16/9)");
}

#[test]
fn numbers_are_normalized() {
    insta::assert_snapshot!(
        roundtrip("(width: 1.50em), (resolution: 2e3dpi), (grid: +1)"),
        @"(width: 1.5em), (resolution: 2000dpi), (grid: 1)"
    );
}

#[test]
fn whole_fractional_numbers_keep_their_fraction() {
    insta::assert_snapshot!(
        roundtrip("(grid: 1.0), (resolution: 2e3), (100.0 < width)"),
        @"(grid: 1.0), (resolution: 2000.0), (100.0 < width)"
    );
}

#[test]
fn overflowing_numbers_stay_numeric() {
    let list = parse_media_query_list("(width: 1e400px), (width < 1e400)").unwrap();
    let printed = stringify(&list);

    assert!(!printed.contains("inf"), "{printed}");
    assert_eq!(parse_media_query_list(&printed).unwrap(), list);
}

#[test]
fn exponent_like_unit_is_escaped() {
    insta::assert_snapshot!(
        roundtrip(r"(width: 1\65 3), (width: 1\65-3)"),
        @r"(width: 1\65 3), (width: 1\65 -3)"
    );
}

#[test]
fn escaped_ident_stays_an_ident() {
    insta::assert_snapshot!(roundtrip(r"(\31 0px)"), @r"(\31 0px)");
}

#[test]
fn value_node() {
    let value = Value::Dimension {
        value: 768.0,
        unit: "px".to_string(),
        flag: NumberFlag::Number,
    };
    assert_eq!(stringify(&value), "768px");
    assert_eq!(value.to_string(), "768px");
}

#[test]
fn output_reparses_to_same_tree() {
    let inputs = [
        "screen and (min-width: 768px), print and (orientation: landscape)",
        "not screen and (color), only print",
        "(a) or ((b) and (c))",
        "screen and ((a) or (b)) and (c)",
        "not ((a) or (b))",
        "(infinite < width < infinite)",
        "(16/9 <= aspect-ratio < 21/9)",
        "(width > 0.5em)",
        r"(\31 0px), (-\31 x)",
        "tty, braille and (color)",
        "(grid: 1.0)",
        "(resolution: 2e3)",
        "(100.0 < width)",
        "(width: 1e400px)",
        "(width < 1e400)",
    ];

    for input in inputs {
        let parsed = parse_media_query_list(input).unwrap();
        let printed = stringify(&parsed);
        let reparsed = parse_media_query_list(&printed).unwrap();
        assert_eq!(parsed, reparsed, "{input} -> {printed}");
    }
}

#[test]
fn unsimplified_trees_print_too() {
    let list = raw_parser().parse_query_list("(((a)))").unwrap();
    insta::assert_snapshot!(stringify(&list), @"(((a)))");
}

use crate::ast::{Feature, FeaturePrefix, NumberFlag, Value};
use crate::parse_media_feature;
use crate::test_utils::{dump, dump_error};

fn feature(input: &str) -> String {
    dump(&parse_media_feature(input).unwrap())
}

fn feature_error(input: &str) -> String {
    dump_error(&parse_media_feature(input).unwrap_err())
}

#[test]
fn boolean() {
    insta::assert_snapshot!(feature("(color)"), @"Boolean color");
}

#[test]
fn value_with_min_prefix() {
    let parsed = parse_media_feature("(min-width: 768px)").unwrap();

    assert_eq!(
        parsed,
        Feature::Value {
            feature: "width".to_string(),
            prefix: Some(FeaturePrefix::Min),
            value: Value::Dimension {
                value: 768.0,
                unit: "px".to_string(),
                flag: NumberFlag::Number,
            },
        }
    );
}

#[test]
fn value_with_max_prefix() {
    insta::assert_snapshot!(feature("(max-resolution: 2dppx)"), @"Value resolution max 2dppx");
}

#[test]
fn bare_prefix_keeps_name() {
    insta::assert_snapshot!(feature("(min-: 1)"), @"Value min- 1");
}

#[test]
fn ratio_value() {
    let parsed = parse_media_feature("(aspect-ratio:16/9)").unwrap();

    assert_eq!(
        parsed,
        Feature::Value {
            feature: "aspect-ratio".to_string(),
            prefix: None,
            value: Value::Ratio {
                numerator: 16.0,
                denominator: 9.0,
            },
        }
    );
}

#[test]
fn ratio_allows_spaces() {
    insta::assert_snapshot!(feature("(min-aspect-ratio: 16 / 10)"), @"Value aspect-ratio min 16/10");
}

#[test]
fn ident_value() {
    insta::assert_snapshot!(feature("(orientation: landscape)"), @"Value orientation landscape");
}

#[test]
fn number_value() {
    insta::assert_snapshot!(feature("(monochrome: 0)"), @"Value monochrome 0");
}

#[test]
fn integer_and_number_flags() {
    let Feature::Value { value, .. } = parse_media_feature("(grid: 1)").unwrap() else {
        panic!("expected a value feature");
    };
    assert_eq!(
        value,
        Value::Number {
            value: 1.0,
            flag: NumberFlag::Integer,
        }
    );

    let Feature::Value { value, .. } = parse_media_feature("(resolution: 1.5)").unwrap() else {
        panic!("expected a value feature");
    };
    assert_eq!(
        value,
        Value::Number {
            value: 1.5,
            flag: NumberFlag::Number,
        }
    );
}

#[test]
fn empty() {
    insta::assert_snapshot!(feature_error("()"), @"EMPTY_FEATURE 0..1");
}

#[test]
fn empty_input() {
    insta::assert_snapshot!(feature_error(""), @"EMPTY_FEATURE 0..0");
}

#[test]
fn missing_open_paren() {
    insta::assert_snapshot!(feature_error("color"), @"EXPECT_LPAREN 0..4");
}

#[test]
fn missing_close_paren() {
    insta::assert_snapshot!(feature_error("(color"), @"EXPECT_RPAREN 0..5");
}

#[test]
fn nested_parens() {
    insta::assert_snapshot!(feature_error("((color))"), @"INVALID_FEATURE 0..8");
}

#[test]
fn brackets() {
    insta::assert_snapshot!(feature_error("(width: [1])"), @"INVALID_FEATURE 0..11");
}

#[test]
fn string_value() {
    insta::assert_snapshot!(feature_error("(width: 'x')"), @"EXPECT_VALUE 8..10");
}

#[test]
fn percentage_value() {
    insta::assert_snapshot!(feature_error("(width: 50%)"), @"EXPECT_VALUE 8..10");
}

#[test]
fn two_tokens() {
    insta::assert_snapshot!(feature_error("(width 100px)"), @"INVALID_FEATURE 0..12");
}

#[test]
fn non_ident_name() {
    insta::assert_snapshot!(feature_error("(10px: 5)"), @"INVALID_FEATURE 0..8");
}

#[test]
fn lone_number() {
    insta::assert_snapshot!(feature_error("(5)"), @"INVALID_FEATURE 0..2");
}

#[test]
fn zero_ratio_term_is_not_a_ratio() {
    insta::assert_snapshot!(feature_error("(aspect-ratio: 0/1)"), @"EXPECT_RANGE 13..13");
}

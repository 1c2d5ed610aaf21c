use crate::simplify::{simplify, simplify_condition};
use crate::test_utils::{dump, raw_parser};
use crate::{parse_media_condition, parse_media_query, parse_media_query_list};

fn simplified(input: &str) -> String {
    dump(&parse_media_condition(input).unwrap())
}

#[test]
fn double_negation_matches_plain_feature() {
    assert_eq!(
        parse_media_query("not (not (color))").unwrap(),
        parse_media_query("(color)").unwrap()
    );
    assert_eq!(
        parse_media_condition("not (not (color))").unwrap(),
        parse_media_condition("(color)").unwrap()
    );
}

#[test]
fn nested_double_negation_collapses() {
    insta::assert_snapshot!(simplified("(not (not (a))) and (b)"), @r"
    Condition and
      Boolean a
      Boolean b
    ");
}

#[test]
fn double_negation_of_chain_hoists_chain() {
    insta::assert_snapshot!(simplified("not (not ((a) and (b)))"), @r"
    Condition and
      Boolean a
      Boolean b
    ");
}

#[test]
fn same_operator_is_flattened() {
    insta::assert_snapshot!(simplified("((a) and (b)) and (c)"), @r"
    Condition and
      Boolean a
      Boolean b
      Boolean c
    ");
}

#[test]
fn deep_or_is_flattened() {
    insta::assert_snapshot!(simplified("(a) or ((b) or ((c) or (d)))"), @r"
    Condition or
      Boolean a
      Boolean b
      Boolean c
      Boolean d
    ");
}

#[test]
fn different_operators_are_kept() {
    insta::assert_snapshot!(simplified("((a) or (b)) and (c)"), @r"
    Condition and
      Condition or
        Boolean a
        Boolean b
      Boolean c
    ");
}

#[test]
fn single_negation_is_kept() {
    insta::assert_snapshot!(simplified("not ((a) and (b))"), @r"
    Condition not
      Condition and
        Boolean a
        Boolean b
    ");
}

#[test]
fn redundant_groups_are_unwrapped() {
    insta::assert_snapshot!(simplified("(((a)))"), @r"
    Condition
      Boolean a
    ");
}

#[test]
fn root_group_around_condition_is_hoisted() {
    let query = parse_media_query("screen and ((a) and (b))").unwrap();
    insta::assert_snapshot!(dump(&query), @r"
    Query screen
      Condition and
        Boolean a
        Boolean b
    ");
}

#[test]
fn invalid_members_survive() {
    let list = parse_media_query_list("foo, (not (not (a)))").unwrap();
    insta::assert_snapshot!(dump(&list), @r"
    QueryList
      Invalid
      Query all
        Condition
          Boolean a
    ");
}

#[test]
fn simplification_is_idempotent() {
    let inputs = [
        "(a)",
        "not (a)",
        "not (not (a))",
        "((a) and (b)) and (c)",
        "(a) and ((b) and ((c) or (d)))",
        "not (not ((a) or (b)))",
        "((((a) or (b))))",
        "(not (not (not (a)))) and (b)",
    ];

    for input in inputs {
        let raw = raw_parser().parse_condition(input).unwrap();
        let once = simplify_condition(raw);
        let twice = simplify_condition(once.clone());
        assert_eq!(once, twice, "{input}");
    }
}

#[test]
fn list_simplification_is_idempotent() {
    let raw = raw_parser()
        .parse_query_list("screen and ((a) and (b)), not (not (c)), tty")
        .unwrap();
    let once = simplify(raw);
    assert_eq!(simplify(once.clone()), once);
}

//! Serialization of AST nodes back to canonical media query text.
//!
//! Output re-parses to an equivalent tree: `screen and (min-width: 768px)`
//! comes back as itself, invalid list members print as `not all`, and
//! identifiers are escaped where the raw text would lex differently.

use std::fmt::{self, Write};

use crate::ast::{
    Condition, ConditionChild, Feature, MediaType, Operator, Query, QueryList, Range, Value,
};
use crate::lexer::{format_flagged_number, format_number, is_ident_char};

/// Any node the generator can print.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    QueryList(&'a QueryList),
    Query(&'a Query),
    Condition(&'a Condition),
    Feature(&'a Feature),
    Value(&'a Value),
}

impl<'a> From<&'a QueryList> for Node<'a> {
    fn from(node: &'a QueryList) -> Self {
        Self::QueryList(node)
    }
}

impl<'a> From<&'a Query> for Node<'a> {
    fn from(node: &'a Query) -> Self {
        Self::Query(node)
    }
}

impl<'a> From<&'a Condition> for Node<'a> {
    fn from(node: &'a Condition) -> Self {
        Self::Condition(node)
    }
}

impl<'a> From<&'a Feature> for Node<'a> {
    fn from(node: &'a Feature) -> Self {
        Self::Feature(node)
    }
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(node: &'a Value) -> Self {
        Self::Value(node)
    }
}

impl<'a> From<&'a ConditionChild> for Node<'a> {
    fn from(node: &'a ConditionChild) -> Self {
        match node {
            ConditionChild::Condition(c) => Self::Condition(c),
            ConditionChild::Feature(f) => Self::Feature(f),
        }
    }
}

pub fn stringify<'a>(node: impl Into<Node<'a>>) -> String {
    node.into().to_string()
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QueryList(list) => write_query_list(f, list),
            Self::Query(query) => write_query(f, query),
            Self::Condition(condition) => write_condition(f, condition),
            Self::Feature(feature) => write_feature(f, feature),
            Self::Value(value) => write_value(f, value),
        }
    }
}

macro_rules! display_via_node {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&Node::from(self), f)
                }
            }
        )*
    };
}

display_via_node!(QueryList, Query, Condition, Feature, Value);

fn write_query_list(w: &mut impl Write, list: &QueryList) -> fmt::Result {
    for (i, query) in list.queries.iter().enumerate() {
        if i > 0 {
            w.write_str(", ")?;
        }
        match query {
            Some(query) => write_query(w, query)?,
            None => w.write_str("not all")?,
        }
    }
    Ok(())
}

fn write_query(w: &mut impl Write, query: &Query) -> fmt::Result {
    let show_type =
        query.prefix.is_some() || query.media_type != MediaType::All || query.condition.is_none();

    if let Some(prefix) = query.prefix {
        write!(w, "{} ", prefix.as_str())?;
    }
    if show_type {
        w.write_str(query.media_type.as_str())?;
    }

    let Some(condition) = &query.condition else {
        return Ok(());
    };
    if !show_type {
        return write_condition(w, condition);
    }

    w.write_str(" and ")?;
    // `or` is not allowed directly after a media type.
    if condition.operator == Some(Operator::Or) {
        w.write_char('(')?;
        write_condition(w, condition)?;
        w.write_char(')')
    } else {
        write_condition(w, condition)
    }
}

fn write_condition(w: &mut impl Write, condition: &Condition) -> fmt::Result {
    let separator = match condition.operator {
        Some(Operator::Not) => {
            w.write_str("not ")?;
            " "
        }
        Some(Operator::And) => " and ",
        Some(Operator::Or) => " or ",
        None => " ",
    };

    for (i, child) in condition.children.iter().enumerate() {
        if i > 0 {
            w.write_str(separator)?;
        }
        write_in_parens(w, child)?;
    }
    Ok(())
}

fn write_in_parens(w: &mut impl Write, child: &ConditionChild) -> fmt::Result {
    match child {
        ConditionChild::Feature(feature) => write_feature(w, feature),
        ConditionChild::Condition(condition) => {
            w.write_char('(')?;
            write_condition(w, condition)?;
            w.write_char(')')
        }
    }
}

fn write_feature(w: &mut impl Write, feature: &Feature) -> fmt::Result {
    w.write_char('(')?;
    match feature {
        Feature::Boolean { feature } => write_ident(w, feature)?,
        Feature::Value {
            feature,
            prefix,
            value,
        } => {
            if let Some(prefix) = prefix {
                write!(w, "{}-", prefix.as_str())?;
            }
            write_ident(w, feature)?;
            w.write_str(": ")?;
            write_value(w, value)?;
        }
        Feature::Range { feature, range } => write_range(w, feature, range)?,
    }
    w.write_char(')')
}

fn write_range(w: &mut impl Write, feature: &str, range: &Range) -> fmt::Result {
    if let Some(left) = &range.left {
        write_value(w, &left.value)?;
        write!(w, " {} ", left.op.as_str())?;
    }
    write_ident(w, feature)?;
    if let Some(right) = &range.right {
        write!(w, " {} ", right.op.as_str())?;
        write_value(w, &right.value)?;
    }
    Ok(())
}

fn write_value(w: &mut impl Write, value: &Value) -> fmt::Result {
    match value {
        Value::Number { value, flag } => w.write_str(&format_flagged_number(*value, *flag)),
        Value::Dimension { value, unit, .. } => {
            w.write_str(&format_number(*value))?;
            write_unit(w, unit)
        }
        Value::Ratio {
            numerator,
            denominator,
        } => write!(
            w,
            "{}/{}",
            format_number(*numerator),
            format_number(*denominator)
        ),
        Value::Ident { value } => write_ident(w, value),
    }
}

/// A unit reading as an exponent (`e3`, `e-3`) gets its `e` escaped.
fn write_unit(w: &mut impl Write, unit: &str) -> fmt::Result {
    let mut chars = unit.chars();
    let reads_as_exponent = match (chars.next(), chars.next(), chars.next()) {
        (Some('e' | 'E'), Some(d), _) if d.is_ascii_digit() => true,
        (Some('e' | 'E'), Some('+' | '-'), Some(d)) => d.is_ascii_digit(),
        _ => false,
    };

    let mut chars = unit.chars();
    if reads_as_exponent && let Some(e) = chars.next() {
        write_code_escape(w, e)?;
        return write_ident_chars(w, chars.as_str());
    }
    write_ident(w, unit)
}

/// Serializes an identifier so it lexes back to the same ident.
fn write_ident(w: &mut impl Write, name: &str) -> fmt::Result {
    if name == "-" {
        return w.write_str("\\-");
    }

    let digit_at = if name.starts_with('-') { 1 } else { 0 };
    match name.chars().nth(digit_at) {
        Some(c) if c.is_ascii_digit() => {
            let (head, tail) = name.split_at(digit_at);
            w.write_str(head)?;
            write_code_escape(w, c)?;
            write_ident_chars(w, &tail[c.len_utf8()..])
        }
        _ => write_ident_chars(w, name),
    }
}

fn write_ident_chars(w: &mut impl Write, text: &str) -> fmt::Result {
    for c in text.chars() {
        if c.is_control() {
            write_code_escape(w, c)?;
        } else if is_ident_char(c) {
            w.write_char(c)?;
        } else {
            w.write_char('\\')?;
            w.write_char(c)?;
        }
    }
    Ok(())
}

fn write_code_escape(w: &mut impl Write, c: char) -> fmt::Result {
    write!(w, "\\{:x} ", c as u32)
}

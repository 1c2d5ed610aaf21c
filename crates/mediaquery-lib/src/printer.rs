//! Indented tree dumps of parsed nodes and token streams.

use std::fmt::Write;

use crate::ast::{Condition, ConditionChild, Feature, Query, QueryList, Value};
use crate::generator::Node;
use crate::lexer::{Token, TokenKind, format_number};

pub struct AstPrinter<'a> {
    node: Node<'a>,
    flags: bool,
}

impl<'a> AstPrinter<'a> {
    pub fn new(node: impl Into<Node<'a>>) -> Self {
        Self {
            node: node.into(),
            flags: false,
        }
    }

    /// Appends the integer/number flag to numeric values.
    pub fn with_flags(mut self, value: bool) -> Self {
        self.flags = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.node {
            Node::QueryList(list) => self.format_query_list(list, w),
            Node::Query(query) => self.format_query(query, 0, w),
            Node::Condition(condition) => self.format_condition(condition, 0, w),
            Node::Feature(feature) => self.format_feature(feature, 0, w),
            Node::Value(value) => writeln!(w, "{}", self.value(value)),
        }
    }

    fn format_query_list(&self, list: &QueryList, w: &mut impl Write) -> std::fmt::Result {
        writeln!(w, "QueryList")?;
        for query in &list.queries {
            match query {
                Some(query) => self.format_query(query, 1, w)?,
                None => writeln!(w, "  Invalid")?,
            }
        }
        Ok(())
    }

    fn format_query(&self, query: &Query, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}Query", prefix)?;
        if let Some(modifier) = query.prefix {
            write!(w, " {}", modifier.as_str())?;
        }
        writeln!(w, " {}", query.media_type.as_str())?;

        if let Some(condition) = &query.condition {
            self.format_condition(condition, indent + 1, w)?;
        }
        Ok(())
    }

    fn format_condition(
        &self,
        condition: &Condition,
        indent: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match condition.operator {
            Some(op) => writeln!(w, "{}Condition {}", prefix, op.as_str())?,
            None => writeln!(w, "{}Condition", prefix)?,
        }

        for child in &condition.children {
            match child {
                ConditionChild::Condition(c) => self.format_condition(c, indent + 1, w)?,
                ConditionChild::Feature(f) => self.format_feature(f, indent + 1, w)?,
            }
        }
        Ok(())
    }

    fn format_feature(&self, feature: &Feature, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match feature {
            Feature::Boolean { feature } => writeln!(w, "{}Boolean {}", prefix, feature),
            Feature::Value {
                feature,
                prefix: modifier,
                value,
            } => {
                write!(w, "{}Value {}", prefix, feature)?;
                if let Some(modifier) = modifier {
                    write!(w, " {}", modifier.as_str())?;
                }
                writeln!(w, " {}", self.value(value))
            }
            Feature::Range { feature, range } => {
                write!(w, "{}Range", prefix)?;
                if let Some(left) = &range.left {
                    write!(w, " {} {}", self.value(&left.value), left.op.as_str())?;
                }
                write!(w, " {}", feature)?;
                if let Some(right) = &range.right {
                    write!(w, " {} {}", right.op.as_str(), self.value(&right.value))?;
                }
                writeln!(w)
            }
        }
    }

    fn value(&self, value: &Value) -> String {
        let (text, flag) = match value {
            Value::Number { value, flag } => (format_number(*value), Some(*flag)),
            Value::Dimension { value, unit, flag } => {
                (format!("{}{}", format_number(*value), unit), Some(*flag))
            }
            Value::Ratio {
                numerator,
                denominator,
            } => (
                format!("{}/{}", format_number(*numerator), format_number(*denominator)),
                None,
            ),
            Value::Ident { value } => (value.clone(), None),
        };

        match flag {
            Some(flag) if self.flags => format!("{}:{}", text, flag.as_str()),
            _ => text,
        }
    }
}

/// One token per line, as `Kind payload`.
pub struct TokenPrinter<'t> {
    tokens: &'t [Token],
    raw: bool,
    spans: bool,
}

impl<'t> TokenPrinter<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            raw: false,
            spans: false,
        }
    }

    /// Keeps whitespace and the trailing `Eof`.
    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        for token in self.tokens {
            if !self.raw && matches!(token.kind, TokenKind::Whitespace | TokenKind::Eof) {
                continue;
            }
            if self.spans {
                writeln!(w, "{} @ {}", token.kind, token.span)?;
            } else {
                writeln!(w, "{}", token.kind)?;
            }
        }
        Ok(())
    }
}

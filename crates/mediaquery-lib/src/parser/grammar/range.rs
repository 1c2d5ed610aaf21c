use super::feature::Item;
use crate::ast::{Feature, Range, RangeBound, RangeOp, Value};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::Span;
use crate::parser::core::Grammar;

impl Grammar {
    /// `value op name [op value]` or `name op value`.
    ///
    /// The feature name is the only bare ident among the operands, except
    /// for `infinite` which is a value. Both operators of a two-sided range
    /// must point the same way, and `=` only appears one-sided.
    pub(super) fn read_range(&mut self, items: &[Item<'_>], span: Span) -> Result<Feature, ParseError> {
        let invalid = || ParseError::at(ParseErrorKind::InvalidRange, span);

        let Some(first) = items.first() else {
            return Err(invalid());
        };

        if let Some(left_value) = range_value(first) {
            let (left_op, pos) = read_op(items, 1, span)?;
            let name = items.get(pos).and_then(Item::ident).ok_or_else(invalid)?;
            let pos = pos + 1;

            if pos == items.len() {
                return Ok(range_feature(name, Some(RangeBound::new(left_value, left_op)), None));
            }

            let (right_op, pos) = read_op(items, pos, span)?;
            let right_value = items.get(pos).and_then(range_value).ok_or_else(invalid)?;
            if pos + 1 != items.len() {
                return Err(invalid());
            }

            let direction = left_op.direction();
            if direction != right_op.direction() || left_op == RangeOp::Eq {
                return Err(invalid());
            }

            return Ok(range_feature(
                name,
                Some(RangeBound::new(left_value, left_op)),
                Some(RangeBound::new(right_value, right_op)),
            ));
        }

        let name = first.ident().ok_or_else(invalid)?;
        let (op, pos) = read_op(items, 1, span)?;
        let value = items.get(pos).and_then(range_value).ok_or_else(invalid)?;
        if pos + 1 != items.len() {
            return Err(invalid());
        }

        Ok(range_feature(name, None, Some(RangeBound::new(value, op))))
    }
}

fn range_feature(name: &str, left: Option<RangeBound>, right: Option<RangeBound>) -> Feature {
    Feature::Range {
        feature: name.to_string(),
        range: Range { left, right },
    }
}

/// Numbers, dimensions, ratios and the `infinite` keyword.
fn range_value(item: &Item<'_>) -> Option<Value> {
    match item.ident() {
        Some("infinite") => item.to_value(),
        Some(_) => None,
        None => item.to_value(),
    }
}

/// Reads `<`, `<=`, `>`, `>=` or `=` starting at `pos`.
///
/// `<=` and `>=` are two delims with no whitespace between them.
fn read_op(items: &[Item<'_>], pos: usize, span: Span) -> Result<(RangeOp, usize), ParseError> {
    let Some(item) = items.get(pos) else {
        return Err(ParseError::at(ParseErrorKind::ExpectRange, span));
    };
    let followed_by_eq = items
        .get(pos + 1)
        .is_some_and(|next| next.is_delim('=') && !next.is_after_space());

    let (strict, inclusive) = if item.is_delim('<') {
        (RangeOp::Lt, RangeOp::Le)
    } else if item.is_delim('>') {
        (RangeOp::Gt, RangeOp::Ge)
    } else if item.is_delim('=') {
        return Ok((RangeOp::Eq, pos + 1));
    } else {
        return Err(ParseError::at(ParseErrorKind::ExpectRange, item.span()));
    };

    if followed_by_eq {
        Ok((inclusive, pos + 2))
    } else {
        Ok((strict, pos + 1))
    }
}

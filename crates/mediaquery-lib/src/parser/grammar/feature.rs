use crate::ast::{Feature, FeaturePrefix, Value};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{ParserToken, Span, TokenKind};
use crate::parser::core::Grammar;

/// A feature operand after ratio coalescing: `16 / 9` is one item.
#[derive(Debug, Clone, Copy)]
pub(super) enum Item<'t> {
    Token(&'t ParserToken),
    Ratio {
        numerator: f64,
        denominator: f64,
        span: Span,
    },
}

impl<'t> Item<'t> {
    pub(super) fn span(&self) -> Span {
        match self {
            Self::Token(token) => token.span,
            Self::Ratio { span, .. } => *span,
        }
    }

    pub(super) fn kind(&self) -> Option<&'t TokenKind> {
        match self {
            Self::Token(token) => Some(&token.kind),
            Self::Ratio { .. } => None,
        }
    }

    pub(super) fn ident(&self) -> Option<&'t str> {
        match self.kind() {
            Some(TokenKind::Ident(name)) => Some(name),
            _ => None,
        }
    }

    pub(super) fn is_delim(&self, c: char) -> bool {
        self.kind().is_some_and(|kind| kind.is_delim(c))
    }

    pub(super) fn is_after_space(&self) -> bool {
        match self {
            Self::Token(token) => token.is_after_space,
            Self::Ratio { .. } => false,
        }
    }

    /// The value this item denotes in `name: value` position.
    pub(super) fn to_value(&self) -> Option<Value> {
        let kind = match self {
            Self::Ratio {
                numerator,
                denominator,
                ..
            } => {
                return Some(Value::Ratio {
                    numerator: *numerator,
                    denominator: *denominator,
                });
            }
            Self::Token(token) => &token.kind,
        };

        match kind {
            TokenKind::Number { value, flag } => Some(Value::Number {
                value: *value,
                flag: *flag,
            }),
            TokenKind::Dimension { value, unit, flag } => Some(Value::Dimension {
                value: *value,
                unit: unit.clone(),
                flag: *flag,
            }),
            TokenKind::Ident(value) => Some(Value::Ident {
                value: value.clone(),
            }),
            _ => None,
        }
    }
}

impl Grammar {
    /// A complete `( ... )` group whose interior holds no nested brackets.
    pub(crate) fn read_feature(&mut self, tokens: &[ParserToken]) -> Result<Feature, ParseError> {
        let Some(first) = tokens.first() else {
            return Err(self.error(ParseErrorKind::EmptyFeature, tokens));
        };
        if first.kind != TokenKind::ParenOpen {
            return Err(ParseError::at(ParseErrorKind::ExpectLparen, first.span));
        }

        let span = self.span(tokens);
        let interior = match tokens {
            [_, interior @ .., last] if last.kind == TokenKind::ParenClose => interior,
            _ => return Err(ParseError::at(ParseErrorKind::ExpectRparen, span)),
        };
        if interior.is_empty() {
            return Err(ParseError::at(ParseErrorKind::EmptyFeature, span));
        }
        if interior.iter().any(|t| is_bracket(&t.kind)) {
            return Err(ParseError::at(ParseErrorKind::InvalidFeature, span));
        }

        let items = coalesce_ratios(interior);
        match items.as_slice() {
            [item] => match item.ident() {
                Some(name) => Ok(Feature::Boolean {
                    feature: name.to_string(),
                }),
                None => Err(ParseError::at(ParseErrorKind::InvalidFeature, span)),
            },
            [name, colon, value] if colon.kind() == Some(&TokenKind::Colon) => {
                let Some(name) = name.ident() else {
                    return Err(ParseError::at(ParseErrorKind::InvalidFeature, span));
                };
                let Some(value) = value.to_value() else {
                    return Err(ParseError::at(ParseErrorKind::ExpectValue, value.span()));
                };
                let (prefix, feature) = split_prefix(name);
                Ok(Feature::Value {
                    feature: feature.to_string(),
                    prefix,
                    value,
                })
            }
            [_, _, _, ..] => self.read_range(&items, span),
            _ => Err(ParseError::at(ParseErrorKind::InvalidFeature, span)),
        }
    }
}

fn is_bracket(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::ParenOpen
            | TokenKind::ParenClose
            | TokenKind::Function(_)
            | TokenKind::BracketOpen
            | TokenKind::BracketClose
    )
}

/// Folds `number '/' number` into a ratio when both terms are positive.
fn coalesce_ratios(tokens: &[ParserToken]) -> Vec<Item<'_>> {
    let mut items = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if let [numerator, slash, denominator, ..] = &tokens[i..]
            && let (Some(n), Some(d)) = (positive_number(numerator), positive_number(denominator))
            && slash.kind.is_delim('/')
        {
            items.push(Item::Ratio {
                numerator: n,
                denominator: d,
                span: numerator.span.cover(denominator.span),
            });
            i += 3;
            continue;
        }

        items.push(Item::Token(&tokens[i]));
        i += 1;
    }

    items
}

fn positive_number(token: &ParserToken) -> Option<f64> {
    match token.kind {
        TokenKind::Number { value, .. } if value > 0.0 => Some(value),
        _ => None,
    }
}

/// `min-width` -> (`min`, `width`). A bare `min-` keeps its name.
fn split_prefix(name: &str) -> (Option<FeaturePrefix>, &str) {
    for (prefix, text) in [(FeaturePrefix::Min, "min-"), (FeaturePrefix::Max, "max-")] {
        if let Some(rest) = name.strip_prefix(text)
            && !rest.is_empty()
        {
            return (Some(prefix), rest);
        }
    }
    (None, name)
}

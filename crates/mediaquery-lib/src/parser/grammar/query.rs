use tracing::trace;

use crate::ast::{Condition, MediaType, NEVER_MATCHING_TYPES, Operator, Query, QueryList, QueryPrefix};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{ParserToken, TokenKind};
use crate::parser::core::{Grammar, ident_value, split_query_list, wrap_nested};

impl Grammar {
    /// Parses every top-level comma segment independently.
    ///
    /// Members that fail become `None` and their errors are collected in
    /// source order.
    pub(crate) fn read_query_list(
        &mut self,
        tokens: &[ParserToken],
    ) -> (QueryList, Vec<ParseError>) {
        let segments = split_query_list(tokens);
        trace!(segments = segments.len(), "split query list");
        if segments.is_empty() {
            return (QueryList::new(vec![Some(Query::all())]), Vec::new());
        }

        let mut queries = Vec::with_capacity(segments.len());
        let mut errors = Vec::new();

        for segment in segments {
            match self.read_query(segment) {
                Ok(query) => queries.push(Some(query)),
                Err(err) => {
                    trace!(kind = %err.kind, at = %err.span(), "invalid query list member");
                    queries.push(None);
                    errors.push(err);
                }
            }
        }

        (QueryList::new(queries), errors)
    }

    /// `[not|only] type [and [not] condition]` or a bare condition.
    pub(crate) fn read_query(&mut self, tokens: &[ParserToken]) -> Result<Query, ParseError> {
        let Some(first) = tokens.first() else {
            return Err(self.error(ParseErrorKind::EmptyQuery, tokens));
        };

        match &first.kind {
            TokenKind::ParenOpen => self.read_condition_query(tokens),
            TokenKind::Ident(_) => self.read_typed_query(tokens),
            _ => Err(ParseError::at(
                ParseErrorKind::ExpectLparenOrTypeOrModifier,
                first.span,
            )),
        }
    }

    /// Top-level condition, optionally introduced by `not`.
    pub(crate) fn read_media_condition(
        &mut self,
        tokens: &[ParserToken],
    ) -> Result<Condition, ParseError> {
        match tokens.split_first() {
            Some((first, rest)) if first.kind.is_ident("not") => {
                self.read_condition(rest, true, Some(Operator::Not))
            }
            _ => self.read_condition(tokens, true, None),
        }
    }

    /// Query without a media type: `(color)` or `not (color)`.
    fn read_condition_query(&mut self, tokens: &[ParserToken]) -> Result<Query, ParseError> {
        let span = self.span(tokens);
        let condition = self
            .read_media_condition(tokens)
            .map_err(|err| wrap_nested(err, ParseErrorKind::ExpectCondition, span))?;
        Ok(Query {
            condition: Some(condition),
            ..Query::all()
        })
    }

    fn read_typed_query(&mut self, tokens: &[ParserToken]) -> Result<Query, ParseError> {
        let mut rest = tokens;
        let mut prefix = None;

        if let Some((first, after)) = rest.split_first() {
            let modifier = match ident_value(first) {
                Some("not") => Some(QueryPrefix::Not),
                Some("only") => Some(QueryPrefix::Only),
                _ => None,
            };

            if let Some(modifier) = modifier {
                match after.first() {
                    Some(next)
                        if modifier == QueryPrefix::Not && next.kind == TokenKind::ParenOpen =>
                    {
                        return self.read_condition_query(tokens);
                    }
                    Some(next) if matches!(next.kind, TokenKind::Ident(_)) => {}
                    next => {
                        let kind = match modifier {
                            QueryPrefix::Not => ParseErrorKind::ExpectLparenOrType,
                            QueryPrefix::Only => ParseErrorKind::ExpectType,
                        };
                        let span = next.map_or(first.span, |t| t.span);
                        return Err(ParseError::at(kind, span));
                    }
                }
                prefix = Some(modifier);
                rest = after;
            }
        }

        let Some((type_token, after_type)) = rest.split_first() else {
            return Err(self.error(ParseErrorKind::ExpectType, rest));
        };
        let (prefix, media_type) = resolve_media_type(type_token, prefix)?;

        let Some((and_token, after_and)) = after_type.split_first() else {
            return Ok(Query {
                prefix,
                media_type,
                condition: None,
            });
        };
        if !and_token.kind.is_ident("and") {
            return Err(ParseError::at(ParseErrorKind::ExpectAnd, and_token.span));
        }
        if after_and.is_empty() {
            return Err(ParseError::at(ParseErrorKind::ExpectCondition, and_token.span));
        }

        let span = self.span(after_and);
        let condition = match after_and.split_first() {
            Some((first, operand)) if first.kind.is_ident("not") => {
                self.read_condition(operand, false, Some(Operator::Not))
            }
            _ => self.read_condition(after_and, false, None),
        }
        .map_err(|err| wrap_nested(err, ParseErrorKind::ExpectCondition, span))?;

        Ok(Query {
            prefix,
            media_type,
            condition: Some(condition),
        })
    }
}

/// Maps the type ident, folding never-matching legacy types into `all` with
/// the prefix negated.
fn resolve_media_type(
    token: &ParserToken,
    prefix: Option<QueryPrefix>,
) -> Result<(Option<QueryPrefix>, MediaType), ParseError> {
    let Some(name) = ident_value(token) else {
        return Err(ParseError::at(ParseErrorKind::ExpectType, token.span));
    };

    if let Some(media_type) = MediaType::from_ident(name) {
        return Ok((prefix, media_type));
    }

    if NEVER_MATCHING_TYPES.contains(&name) {
        let negated = match prefix {
            None | Some(QueryPrefix::Only) => Some(QueryPrefix::Not),
            Some(QueryPrefix::Not) => None,
        };
        return Ok((negated, MediaType::All));
    }

    Err(ParseError::at(ParseErrorKind::ExpectType, token.span))
}

use crate::ast::{Condition, ConditionChild, Operator};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{ParserToken, TokenKind};
use crate::parser::core::{Grammar, ident_value, matching_paren, wrap_nested};

impl Grammar {
    /// `(...) [and|or (...)]*`, collected iteratively into one node.
    ///
    /// `previous` seeds the operator: `Some(Not)` when the caller already
    /// consumed a `not`, which then admits exactly one operand. `or` is
    /// rejected unless `may_contain_or`.
    pub(crate) fn read_condition(
        &mut self,
        tokens: &[ParserToken],
        may_contain_or: bool,
        previous: Option<Operator>,
    ) -> Result<Condition, ParseError> {
        self.enter_recursion(tokens)?;
        let result = self.read_condition_operands(tokens, may_contain_or, previous);
        self.exit_recursion();
        result
    }

    fn read_condition_operands(
        &mut self,
        tokens: &[ParserToken],
        may_contain_or: bool,
        previous: Option<Operator>,
    ) -> Result<Condition, ParseError> {
        if tokens.is_empty() {
            return Err(self.error(ParseErrorKind::EmptyCondition, tokens));
        }

        let mut operator = previous;
        let mut children = Vec::new();
        let mut rest = tokens;

        loop {
            let (child, after) = self.read_in_parens(rest)?;
            children.push(child);
            rest = after;

            let Some((op_token, after_op)) = rest.split_first() else {
                break;
            };

            let Some(op) = ident_value(op_token)
                .and_then(Operator::from_ident)
                .filter(Operator::is_associative)
            else {
                let kind = if op_token.kind == TokenKind::ParenClose {
                    ParseErrorKind::MismatchParens
                } else {
                    ParseErrorKind::ExpectAndOrOr
                };
                return Err(ParseError::at(kind, op_token.span));
            };

            let conflicts = operator.is_some_and(|current| current != op);
            if conflicts || (op == Operator::Or && !may_contain_or) {
                return Err(ParseError::at(ParseErrorKind::MixAndWithOr, op_token.span));
            }
            if after_op.is_empty() {
                return Err(ParseError::at(ParseErrorKind::ExpectCondition, op_token.span));
            }

            operator = Some(op);
            rest = after_op;
        }

        Ok(Condition::new(operator, children))
    }

    /// One parenthesized operand: a feature when the group has no nested
    /// parens, otherwise a nested condition.
    fn read_in_parens<'t>(
        &mut self,
        tokens: &'t [ParserToken],
    ) -> Result<(ConditionChild, &'t [ParserToken]), ParseError> {
        let Some(first) = tokens.first() else {
            return Err(self.error(ParseErrorKind::EmptyCondition, tokens));
        };
        if first.kind != TokenKind::ParenOpen {
            return Err(ParseError::at(ParseErrorKind::ExpectLparen, first.span));
        }

        let Some((close, max_depth)) = matching_paren(tokens) else {
            return Err(self.error(ParseErrorKind::MismatchParens, tokens));
        };
        let (group, rest) = tokens.split_at(close + 1);
        let interior = &group[1..close];
        let span = self.span(group);

        let child = if max_depth == 1 {
            self.read_feature(group).map(ConditionChild::from)
        } else {
            match interior.split_first() {
                Some((first, operand)) if first.kind.is_ident("not") => {
                    self.read_condition(operand, true, Some(Operator::Not))
                }
                _ => self.read_condition(interior, true, None),
            }
            .map(ConditionChild::from)
        }
        .map_err(|err| wrap_nested(err, ParseErrorKind::ExpectFeatureOrCondition, span))?;

        Ok((child, rest))
    }
}

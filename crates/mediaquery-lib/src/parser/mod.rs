//! Media query parser.
//!
//! # Architecture
//!
//! Parsing runs in three stages over the input:
//!
//! - `reader` turns text into normalized codepoints
//! - `lexer` tokenizes codepoints and folds whitespace into adjacency flags
//! - `grammar` matches token slices deterministically, with no backtracking
//!
//! Spans are inclusive codepoint offsets into the normalized input.
//!
//! # Failure model
//!
//! Lex-level failures (unterminated strings, `{`, `;`) fail the whole input.
//! Inside a query list, any other failure only invalidates its own member,
//! which becomes `None`; that includes exceeding the recursion limit.

mod core;
mod grammar;

#[cfg(test)]
mod tests;

use tracing::{debug, trace};

use crate::ast::{Condition, Feature, Query, QueryList};
use crate::error::{ParseError, ParseErrorKind};
use crate::lexer::{self, ParserToken};
use crate::reader;
use crate::simplify;
use crate::PassResult;

use self::core::{Grammar, first_top_level_comma};

/// Default nesting limit for parenthesized conditions.
pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

/// Configurable parser.
///
/// ```
/// use mediaquery_lib::MediaQueryParser;
///
/// let list = MediaQueryParser::new()
///     .with_simplify(false)
///     .parse_query_list("screen and (min-width: 768px)")
///     .unwrap();
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQueryParser {
    recursion_limit: Option<u32>,
    simplify: bool,
}

impl Default for MediaQueryParser {
    fn default() -> Self {
        Self {
            recursion_limit: Some(DEFAULT_RECURSION_LIMIT),
            simplify: true,
        }
    }
}

impl MediaQueryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` disables the nesting guard.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Whether results are simplified before being returned.
    pub fn with_simplify(mut self, simplify: bool) -> Self {
        self.simplify = simplify;
        self
    }

    /// Parses a comma-separated list. Invalid members become `None`.
    pub fn parse_query_list(&self, source: &str) -> Result<QueryList, ParseError> {
        self.parse_query_list_with_errors(source).map(|(list, _)| list)
    }

    /// Like [`parse_query_list`](Self::parse_query_list), also returning the
    /// error of every invalid member in source order.
    pub fn parse_query_list_with_errors(&self, source: &str) -> PassResult<QueryList> {
        let (tokens, eof) = self.lex(source)?;
        let (list, errors) = self.grammar(eof).read_query_list(&tokens);
        debug!(
            queries = list.len(),
            invalid = errors.len(),
            "parsed media query list"
        );

        let list = if self.simplify {
            simplify::simplify(list)
        } else {
            list
        };
        Ok((list, errors))
    }

    /// Parses exactly one query. A top-level comma is an error.
    pub fn parse_query(&self, source: &str) -> Result<Query, ParseError> {
        let (tokens, eof) = self.lex(source)?;
        let mut grammar = self.grammar(eof);

        let query = match first_top_level_comma(&tokens) {
            Some(comma) => {
                let (head, tail) = tokens.split_at(comma);
                grammar.read_query(head)?;
                return Err(grammar.error(ParseErrorKind::InvalidQuery, tail));
            }
            None => grammar.read_query(&tokens)?,
        };
        debug!("parsed media query");

        Ok(if self.simplify {
            simplify::simplify_query(query)
        } else {
            query
        })
    }

    /// Parses a condition, optionally introduced by `not`.
    pub fn parse_condition(&self, source: &str) -> Result<Condition, ParseError> {
        let (tokens, eof) = self.lex(source)?;
        let condition = self.grammar(eof).read_media_condition(&tokens)?;
        debug!(children = condition.children.len(), "parsed media condition");

        Ok(if self.simplify {
            simplify::simplify_condition(condition)
        } else {
            condition
        })
    }

    /// Parses a single parenthesized feature.
    pub fn parse_feature(&self, source: &str) -> Result<Feature, ParseError> {
        let (tokens, eof) = self.lex(source)?;
        let feature = self.grammar(eof).read_feature(&tokens)?;
        debug!(feature = feature.name(), "parsed media feature");
        Ok(feature)
    }

    fn grammar(&self, eof: usize) -> Grammar {
        Grammar::new(eof).with_recursion_limit(self.recursion_limit)
    }

    fn lex(&self, source: &str) -> Result<(Vec<ParserToken>, usize), ParseError> {
        let codepoints = reader::read(source);
        let tokens = lexer::tokenize(&codepoints)?;
        trace!(count = tokens.len(), "tokenized");
        let tokens = lexer::to_parser_tokens(tokens)?;
        Ok((tokens, codepoints.len()))
    }
}

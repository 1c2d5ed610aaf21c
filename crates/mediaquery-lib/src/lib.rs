//! Parser for CSS media queries.
//!
//! Turns text like `screen and (min-width: 768px), print` into a typed AST,
//! simplifies it, and serializes it back to canonical text.
//!
//! # Example
//!
//! ```
//! use mediaquery_lib::{parse_media_query_list, stringify};
//!
//! let list = parse_media_query_list("screen and (min-width: 768px), tty").unwrap();
//! assert_eq!(stringify(&list), "screen and (min-width: 768px), not all");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod reader;
pub mod simplify;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod generator_tests;
#[cfg(test)]
mod simplify_tests;

pub use ast::{
    Condition, ConditionChild, Feature, FeaturePrefix, MediaType, Operator, Query, QueryList,
    QueryPrefix, Range, RangeBound, RangeOp, Value,
};
pub use diagnostics::DiagnosticsPrinter;
pub use error::{ParseError, ParseErrorKind};
pub use generator::{Node, stringify};
pub use parser::{DEFAULT_RECURSION_LIMIT, MediaQueryParser};
pub use printer::{AstPrinter, TokenPrinter};

/// Output alongside the errors of the parts that failed; fatal failures use
/// the outer `Result`.
pub type PassResult<T> = std::result::Result<(T, Vec<ParseError>), ParseError>;

/// Parses a comma-separated media query list with default settings.
///
/// Invalid members are `None`. Only lex-level failures and excessive nesting
/// fail the whole list.
pub fn parse_media_query_list(source: &str) -> Result<QueryList, ParseError> {
    MediaQueryParser::new().parse_query_list(source)
}

/// Like [`parse_media_query_list`], also returning each invalid member's error.
pub fn parse_media_query_list_with_errors(source: &str) -> PassResult<QueryList> {
    MediaQueryParser::new().parse_query_list_with_errors(source)
}

/// Parses exactly one media query.
pub fn parse_media_query(source: &str) -> Result<Query, ParseError> {
    MediaQueryParser::new().parse_query(source)
}

/// Parses a media condition such as `(color) and (hover)` or `not (color)`.
pub fn parse_media_condition(source: &str) -> Result<Condition, ParseError> {
    MediaQueryParser::new().parse_condition(source)
}

/// Parses a single feature such as `(min-width: 768px)`.
pub fn parse_media_feature(source: &str) -> Result<Feature, ParseError> {
    MediaQueryParser::new().parse_feature(source)
}

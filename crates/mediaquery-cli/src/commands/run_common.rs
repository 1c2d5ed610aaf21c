//! Parsing and error reporting shared by the commands.

use mediaquery_lib::{
    Condition, DiagnosticsPrinter, Feature, MediaQueryParser, Node, ParseError, Query, QueryList,
};
use tracing::debug;

use super::input_loader::{Input, LoadError};

/// Grammar entry point selected with `--as`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseAs {
    #[default]
    List,
    Query,
    Condition,
    Feature,
}

pub enum Parsed {
    List(QueryList),
    Query(Query),
    Condition(Condition),
    Feature(Feature),
}

impl Parsed {
    pub fn node(&self) -> Node<'_> {
        match self {
            Self::List(list) => list.into(),
            Self::Query(query) => query.into(),
            Self::Condition(condition) => condition.into(),
            Self::Feature(feature) => feature.into(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        match self {
            Self::List(list) => serde_json::to_string_pretty(list),
            Self::Query(query) => serde_json::to_string_pretty(query),
            Self::Condition(condition) => serde_json::to_string_pretty(condition),
            Self::Feature(feature) => serde_json::to_string_pretty(feature),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Already rendered against the input.
    #[error("{rendered}")]
    Parse { rendered: String },

    #[error("failed to serialize AST: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses `input` as `parse_as`. Invalid list members are returned with the
/// result; every other failure is rendered into the error.
pub fn parse_input(
    input: &Input,
    parse_as: ParseAs,
    simplify: bool,
    color: bool,
) -> Result<(Parsed, Vec<ParseError>), CommandError> {
    let parser = MediaQueryParser::new().with_simplify(simplify);
    let text = input.text.as_str();
    debug!(?parse_as, simplify, "parsing input");

    let result = match parse_as {
        ParseAs::List => parser
            .parse_query_list_with_errors(text)
            .map(|(list, errors)| (Parsed::List(list), errors)),
        ParseAs::Query => parser
            .parse_query(text)
            .map(|query| (Parsed::Query(query), Vec::new())),
        ParseAs::Condition => parser
            .parse_condition(text)
            .map(|condition| (Parsed::Condition(condition), Vec::new())),
        ParseAs::Feature => parser
            .parse_feature(text)
            .map(|feature| (Parsed::Feature(feature), Vec::new())),
    };

    result.map_err(|err| diagnostics_error(input, std::slice::from_ref(&err), color))
}

pub fn diagnostics_error(input: &Input, errors: &[ParseError], color: bool) -> CommandError {
    let mut printer = DiagnosticsPrinter::new(errors)
        .source(&input.text)
        .colored(color);
    if let Some(name) = &input.name {
        printer = printer.path(name);
    }
    CommandError::Parse {
        rendered: printer.render(),
    }
}

/// Prints the output, or reports the error and exits with status 1.
pub fn finish(result: Result<String, CommandError>) {
    match result {
        Ok(out) => print!("{}", out),
        Err(CommandError::Parse { rendered }) => {
            eprint!("{}", rendered);
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

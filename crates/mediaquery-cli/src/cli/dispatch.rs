//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror the command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the relevant fields
//! - `Into<*Args>` impls bridge dispatch to command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::format::FormatArgs;
use crate::commands::run_common::ParseAs;
use crate::commands::tokens::TokensArgs;

pub struct AstParams {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub parse_as: ParseAs,
    pub raw: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            parse_as: parse_as(m),
            raw: m.get_flag("raw"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            input_path: p.input_path,
            query_text: p.query_text,
            parse_as: p.parse_as,
            raw: p.raw,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub parse_as: ParseAs,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            parse_as: parse_as(m),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input_path: p.input_path,
            query_text: p.query_text,
            parse_as: p.parse_as,
            color: p.color.should_colorize(),
        }
    }
}

pub struct FormatParams {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub parse_as: ParseAs,
    pub color: ColorChoice,
}

impl FormatParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            parse_as: parse_as(m),
            color: parse_color(m),
        }
    }
}

impl From<FormatParams> for FormatArgs {
    fn from(p: FormatParams) -> Self {
        Self {
            input_path: p.input_path,
            query_text: p.query_text,
            parse_as: p.parse_as,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TokensParams {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub spans: bool,
    pub raw: bool,
    pub color: ColorChoice,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            spans: m.get_flag("spans"),
            raw: m.get_flag("raw"),
            color: parse_color(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            input_path: p.input_path,
            query_text: p.query_text,
            spans: p.spans,
            raw: p.raw,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_as(m: &ArgMatches) -> ParseAs {
    match m.get_one::<String>("parse_as").map(|s| s.as_str()) {
        Some("query") => ParseAs::Query,
        Some("condition") => ParseAs::Condition,
        Some("feature") => ParseAs::Feature,
        _ => ParseAs::List,
    }
}

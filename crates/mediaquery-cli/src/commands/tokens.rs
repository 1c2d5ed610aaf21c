use std::path::PathBuf;

use mediaquery_lib::TokenPrinter;
use mediaquery_lib::lexer::tokenize;
use mediaquery_lib::reader::read;

use super::input_loader::load_input;
use super::run_common::{CommandError, diagnostics_error, finish};

pub struct TokensArgs {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub spans: bool,
    pub raw: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    finish(execute(&args));
}

pub fn execute(args: &TokensArgs) -> Result<String, CommandError> {
    let input = load_input(args.input_path.as_deref(), args.query_text.as_deref())?;
    let tokens = tokenize(&read(&input.text))
        .map_err(|err| diagnostics_error(&input, std::slice::from_ref(&err), args.color))?;

    Ok(TokenPrinter::new(&tokens)
        .raw(args.raw)
        .with_spans(args.spans)
        .dump())
}

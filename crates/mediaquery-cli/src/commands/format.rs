use std::path::PathBuf;

use mediaquery_lib::stringify;

use super::input_loader::load_input;
use super::run_common::{CommandError, ParseAs, finish, parse_input};

pub struct FormatArgs {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub parse_as: ParseAs,
    pub color: bool,
}

pub fn run(args: FormatArgs) {
    finish(execute(&args));
}

pub fn execute(args: &FormatArgs) -> Result<String, CommandError> {
    let input = load_input(args.input_path.as_deref(), args.query_text.as_deref())?;
    let (parsed, _) = parse_input(&input, args.parse_as, true, args.color)?;

    let mut out = stringify(parsed.node());
    out.push('\n');
    Ok(out)
}

use std::path::PathBuf;

use super::input_loader::load_input;
use super::run_common::{CommandError, ParseAs, diagnostics_error, finish, parse_input};

pub struct CheckArgs {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub parse_as: ParseAs,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    finish(execute(&args));
}

/// Silent on success. A list fails if any member is invalid.
pub fn execute(args: &CheckArgs) -> Result<String, CommandError> {
    let input = load_input(args.input_path.as_deref(), args.query_text.as_deref())?;
    let (_, errors) = parse_input(&input, args.parse_as, false, args.color)?;

    if !errors.is_empty() {
        return Err(diagnostics_error(&input, &errors, args.color));
    }
    Ok(String::new())
}

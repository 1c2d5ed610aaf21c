use std::path::PathBuf;

use mediaquery_lib::AstPrinter;

use super::input_loader::load_input;
use super::run_common::{CommandError, ParseAs, finish, parse_input};

pub struct AstArgs {
    pub input_path: Option<PathBuf>,
    pub query_text: Option<String>,
    pub parse_as: ParseAs,
    pub raw: bool,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    finish(execute(&args));
}

/// Invalid list members show up as `Invalid` nodes (`null` in JSON).
pub fn execute(args: &AstArgs) -> Result<String, CommandError> {
    let input = load_input(args.input_path.as_deref(), args.query_text.as_deref())?;
    let (parsed, _) = parse_input(&input, args.parse_as, !args.raw, args.color)?;

    if args.json {
        let mut out = parsed.to_json()?;
        out.push('\n');
        return Ok(out);
    }
    Ok(AstPrinter::new(parsed.node()).dump())
}

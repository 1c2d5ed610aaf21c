//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Input args shared by every command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg())
        .arg(query_text_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("mediaquery")
        .about("Parse, check and format CSS media queries")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(ast_command())
        .subcommand(check_command())
        .subcommand(format_command())
        .subcommand(tokens_command())
}

/// Show the parsed tree.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the parsed tree of a media query")
        .override_usage(
            "\
  mediaquery ast <INPUT>
  mediaquery ast -q <TEXT> [--as <KIND>]",
        )
        .after_help(
            r#"EXAMPLES:
  mediaquery ast queries.txt                      # query list AST
  mediaquery ast -q 'screen and (color)'          # inline
  mediaquery ast -q '(a) and ((b))' --as condition --raw
  mediaquery ast -q '(width >= 10em)' --as feature --json"#,
        )
        .arg(parse_as_arg())
        .arg(raw_arg())
        .arg(json_arg());

    with_input_args(cmd)
}

/// Validate a media query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a media query")
        .override_usage(
            "\
  mediaquery check <INPUT>
  mediaquery check -q <TEXT> [--as <KIND>]",
        )
        .after_help(
            r#"EXAMPLES:
  mediaquery check queries.txt                    # every list member must be valid
  mediaquery check -q 'screen and'                # reports EXPECT_CONDITION
  echo '(color)' | mediaquery check - --as condition"#,
        )
        .arg(parse_as_arg());

    with_input_args(cmd)
}

/// Print canonical text.
pub fn format_command() -> Command {
    let cmd = Command::new("format")
        .about("Print a media query in canonical form")
        .override_usage(
            "\
  mediaquery format <INPUT>
  mediaquery format -q <TEXT> [--as <KIND>]",
        )
        .after_help(
            r#"EXAMPLES:
  mediaquery format -q 'SCREEN AND (MIN-WIDTH:768PX)'
  mediaquery format -q 'not (not (color))' --as condition"#,
        )
        .arg(parse_as_arg());

    with_input_args(cmd)
}

/// Print the lexer output.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the tokens of a media query")
        .override_usage(
            "\
  mediaquery tokens <INPUT>
  mediaquery tokens -q <TEXT> [--spans] [--raw]",
        )
        .arg(spans_arg())
        .arg(raw_tokens_arg());

    with_input_args(cmd)
}

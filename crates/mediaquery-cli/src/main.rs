mod cli;
mod commands;

use cli::{AstParams, CheckParams, FormatParams, TokensParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = build_cli().get_matches();

    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };
    init_logging(m.get_count("verbose"));

    match name {
        "ast" => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        "check" => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        "format" => {
            let params = FormatParams::from_matches(m);
            commands::format::run(params.into());
        }
        "tokens" => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `-v`/`-vv` pick the level; otherwise `MEDIAQUERY_LOG` applies, then `warn`.
fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_env("MEDIAQUERY_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

//! Snapshot helpers shared by the parser, simplifier and generator tests.

use crate::error::ParseError;
use crate::{AstPrinter, MediaQueryParser, Node};

/// Raw (unsimplified) parser used by grammar tests.
pub(crate) fn raw_parser() -> MediaQueryParser {
    MediaQueryParser::new().with_simplify(false)
}

pub(crate) fn dump<'a>(node: impl Into<Node<'a>>) -> String {
    AstPrinter::new(node).dump()
}

/// Outermost-first `KIND start..end` lines for an error chain.
pub(crate) fn dump_error(err: &ParseError) -> String {
    err.chain()
        .map(|e| format!("{} {}", e.kind, e.span()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Snapshots the unsimplified AST dump of a query list.
macro_rules! shot_ast {
    ($input:expr, @$snapshot:literal) => {{
        let list = $crate::test_utils::raw_parser()
            .parse_query_list($input)
            .expect("query list parses");
        insta::with_settings!({ omit_expression => true }, {
            insta::assert_snapshot!($crate::test_utils::dump(&list), @$snapshot);
        });
    }};
}

/// Snapshots the error chain of a single query that must fail.
macro_rules! shot_error {
    ($input:expr, @$snapshot:literal) => {{
        let err = $crate::test_utils::raw_parser()
            .parse_query($input)
            .expect_err("query must fail");
        insta::with_settings!({ omit_expression => true }, {
            insta::assert_snapshot!($crate::test_utils::dump_error(&err), @$snapshot);
        });
    }};
}

pub(crate) use {shot_ast, shot_error};

//! Grammar productions for media queries.
//!
//! Each production is an `impl Grammar` block over a token slice:
//!
//! - `query`: one member of a query list (`not screen and (color)`)
//! - `condition`: `and`/`or`/`not` combinations of parenthesized groups
//! - `feature`: a single `( ... )` group without nested parens
//! - `range`: range-context features (`(100px <= width < 200px)`)

mod condition;
mod feature;
mod query;
mod range;

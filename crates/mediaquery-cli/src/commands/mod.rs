pub mod ast;
pub mod check;
pub mod format;
pub mod input_loader;
pub mod run_common;
pub mod tokens;

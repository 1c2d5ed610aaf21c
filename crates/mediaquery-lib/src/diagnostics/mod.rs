//! Human-readable rendering of parse errors.
//!
//! Errors carry inclusive codepoint spans into the normalized input; the
//! printer maps them to byte ranges of that same normalized text before
//! handing them to `annotate-snippets`.

mod printer;


pub use printer::DiagnosticsPrinter;

use crate::error::ParseError;

impl ParseError {
    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(std::slice::from_ref(self))
    }

    /// Renders against `source` without colors.
    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }
}

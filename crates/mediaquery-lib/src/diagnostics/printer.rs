//! Builder-pattern printer for rendering parse errors.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::error::ParseError;
use crate::lexer::Span;
use crate::reader;

pub struct DiagnosticsPrinter<'e, 's> {
    errors: &'e [ParseError],
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> DiagnosticsPrinter<'e, 's> {
    pub fn new(errors: &'e [ParseError]) -> Self {
        Self {
            errors,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        if self.errors.is_empty() {
            return Ok(());
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let text = reader::to_text(&reader::read(source));
        let offsets = ByteOffsets::new(&text);

        for (i, error) in self.errors.iter().enumerate() {
            let causes: Vec<(Range<usize>, String)> = error
                .chain()
                .skip(1)
                .map(|cause| (offsets.range(cause.span()), cause_label(cause)))
                .collect();

            let mut snippet = Snippet::source(text.as_str()).line_start(1).annotation(
                AnnotationKind::Primary
                    .span(offsets.range(error.span()))
                    .label(error.kind.as_str()),
            );

            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            for (range, label) in &causes {
                snippet = snippet.annotation(
                    AnnotationKind::Context.span(range.clone()).label(label),
                );
            }

            let report: Vec<Group> =
                vec![Level::ERROR.primary_title(error.kind.fallback_message()).element(snippet)];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            for (depth, cause) in error.chain().enumerate() {
                writeln!(
                    w,
                    "{}{}: {}",
                    "  ".repeat(depth),
                    cause.kind.as_str(),
                    cause
                )?;
            }
        }
        Ok(())
    }
}

fn cause_label(cause: &ParseError) -> String {
    format!("{}: {}", cause.kind.as_str(), cause.kind.fallback_message())
}

/// Byte offset of every codepoint, plus one past the end.
struct ByteOffsets(Vec<usize>);

impl ByteOffsets {
    fn new(text: &str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        Self(offsets)
    }

    /// Inclusive codepoint span to a half-open byte range; the empty EOF
    /// span stays empty.
    fn range(&self, span: Span) -> Range<usize> {
        let limit = self.0.len() - 1;
        let at = |index: usize| self.0[index.min(limit)];

        if span.start >= limit {
            let end = at(limit);
            return end..end;
        }
        at(span.start)..at(span.end.saturating_add(1))
    }
}

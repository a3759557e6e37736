//! Builder-pattern printer for rendering a parse error against its source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use rowan::TextRange;

use super::ParseError;

pub struct DiagnosticPrinter<'e, 's> {
    error: &'e ParseError,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> DiagnosticPrinter<'e, 's> {
    pub fn new(error: &'e ParseError, source: &'s str) -> Self {
        Self {
            error,
            source,
            path: None,
            colored: false,
        }
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
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let error = self.error;
        let mut primary = AnnotationKind::Primary.span(adjust_range(error.range, self.source.len()));
        if let Some(hint) = error.kind.default_hint() {
            primary = primary.label(hint);
        }

        let mut snippet = Snippet::source(self.source).line_start(1).annotation(primary);

        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        for related in &error.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(adjust_range(related.range, self.source.len()))
                    .label(&related.message),
            );
        }

        let report = vec![Level::ERROR.primary_title(&error.message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

pub(super) fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

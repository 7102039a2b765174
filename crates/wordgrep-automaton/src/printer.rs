//! Builder-pattern printer for rendering regex errors against their source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::SpecError;

pub struct SpecErrorPrinter<'e, 's> {
    error: &'e SpecError,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'e, 's> SpecErrorPrinter<'e, 's> {
    pub fn new(error: &'e SpecError) -> Self {
        Self {
            error,
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
            return write!(w, "error: {}", self.error);
        };

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let mut snippet = Snippet::source(source).line_start(1).annotation(
            AnnotationKind::Primary
                .span(clamp(self.error.span(), source.len()))
                .label(self.error.label()),
        );
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let message = self.error.to_string();
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

fn clamp(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    range.start.min(limit)..range.end.min(limit)
}

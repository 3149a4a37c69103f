//! Diagnostics as plain data.
//!
//! A [`Diagnostic`] is a severity, a message and a source range. Producing
//! one never aborts anything; the parser collects them in source order and
//! callers decide what to do with them. Rendering to a human-readable
//! snippet lives here too, so consumers only need this crate to print
//! errors.

use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::TextRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { severity: Severity::Error, message: message.into(), range }
    }

    pub fn warning(message: impl Into<String>, range: TextRange) -> Self {
        Self { severity: Severity::Warning, message: message.into(), range }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The source range the diagnostic points at. May be empty for
    /// "expected X" diagnostics anchored between two tokens.
    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let level = match self.severity {
            Severity::Warning => Level::Warning,
            Severity::Error => Level::Error,
        };
        let message = level.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(level.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}

#[cfg(test)]
mod tests {
    use text_size::TextSize;

    use super::*;

    #[test]
    fn render_points_at_the_range() {
        let text = "fn (x: i32) {}";
        let diagnostic =
            Diagnostic::error("expected a function name", TextRange::empty(TextSize::new(3)));

        let rendered =
            diagnostic.render(&Renderer::plain(), "demo.fe", text).to_string();

        assert!(rendered.contains("expected a function name"), "{rendered}");
        assert!(rendered.contains("demo.fe"), "{rendered}");
    }

    #[test]
    fn severities_order_errors_above_warnings() {
        assert!(Severity::Error > Severity::Warning);
    }
}

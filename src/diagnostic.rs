//! The diagnostic value type attached to a [`ParseOutcome`](crate::outcome::ParseOutcome),
//! plus a thin `miette`-backed rendering helper for embedders.

use std::fmt;

use crate::span::Span;

/// Severity of a [`Diagnostic`].
///
/// Ordered worst-to-best is `Error > Warning > Info`, which lets an embedder
/// pick the worst diagnostic out of a batch with a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A severity-tagged message with an optional source span.
///
/// Value-equal by all three fields, per spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub text: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            span: None,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Attaches (or replaces) the span this diagnostic refers to.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some(span) => write!(f, "{}: {} ({span})", self.severity, self.text),
            None => write!(f, "{}: {}", self.severity, self.text),
        }
    }
}

/// Renders a batch of diagnostics against the original source text as a
/// `miette::Report`, for embedders that want terminal-quality output.
///
/// This is purely an ambient convenience on top of the algebra in
/// [`crate::outcome`]; nothing in the combinator core depends on it.
pub fn render(source: &str, diagnostics: &[Diagnostic]) -> Option<miette::Report> {
    let worst = diagnostics.iter().max_by_key(|d| d.severity)?;
    let message = worst.text.clone();

    let labels = diagnostics.iter().filter_map(|d| {
        let span = d.span?;
        Some(miette::LabeledSpan::new(
            Some(d.text.clone()),
            span.start.offset,
            span.len().max(1),
        ))
    });

    Some(
        miette::miette!(
            labels = labels.collect::<Vec<_>>(),
            "{message}"
        )
        .with_source_code(source.to_string()),
    )
}

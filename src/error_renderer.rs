//! Error rendering using ariadne
//!
//! This module renders abacus errors with the source line and the offending
//! token highlighted.

use crate::{Diagnostic, Error};
use ariadne::{ColorGenerator, IndexType, Label, Report, ReportKind, Source};
use std::io::Write;
use std::ops::Range;

const SOURCE_ID: &str = "<input>";

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use abacus::{evaluate, render_error};
///
/// let source = "2 + (3";
/// if let Err(e) = evaluate(source) {
///     render_error(source, &e);
/// }
/// ```
pub fn render_error(source: &str, error: &Error) {
    render_error_to_writer(source, error, &mut std::io::stderr(), true).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    render_error_to_writer(source, error, writer, true)
}

/// Render an error to a String (useful for tests, web UIs, etc.)
pub fn render_error_to_string(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, true).ok();
    String::from_utf8_lossy(&buf).to_string()
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(source: &str, error: &Error) -> String {
    let mut buf = Vec::new();
    render_error_to_writer(source, error, &mut buf, false).ok();
    String::from_utf8_lossy(&buf).to_string()
}

fn render_error_to_writer(
    source: &str,
    error: &Error,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    let diag = error.to_diagnostic();
    match &diag.span {
        Some(span) => render_diagnostic(source, &diag, span.0.clone(), writer, use_color),
        // Errors without a location (e.g. hand-built programs) have no
        // snippet to show.
        None => writeln!(writer, "{}", diag),
    }
}

fn render_diagnostic(
    source: &str,
    diag: &Diagnostic,
    span: Range<usize>,
    writer: &mut dyn Write,
    use_color: bool,
) -> std::io::Result<()> {
    // Pad with a space so zero-width end-of-input spans have a column to
    // point at.
    let padded = format!("{} ", source);

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let primary = visible(span);
    // Spans are byte offsets.
    let config = ariadne::Config::default()
        .with_color(use_color)
        .with_index_type(IndexType::Byte);
    let mut report = Report::build(ReportKind::Error, (SOURCE_ID, primary.clone()))
        .with_message(format!("{} failed: {}", diag.stage, diag.message))
        .with_config(config);

    if let Some(code) = &diag.code {
        report = report.with_code(code);
    }

    let color = colors.next();
    report = report.with_label(
        Label::new((SOURCE_ID, primary))
            .with_message(&diag.message)
            .with_color(color),
    );

    for related in &diag.related {
        let color = colors.next();
        report = report.with_label(
            Label::new((SOURCE_ID, visible(related.span.0.clone())))
                .with_message(&related.message)
                .with_color(color),
        );
    }

    if let Some(help) = &diag.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((SOURCE_ID, Source::from(padded.as_str())), &mut *writer)
}

/// Widens an empty span to one column.
fn visible(span: Range<usize>) -> Range<usize> {
    if span.is_empty() {
        span.start..span.start + 1
    } else {
        span
    }
}

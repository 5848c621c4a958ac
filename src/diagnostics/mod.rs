//! Diagnostic rendering for the CLI.
//!
//! Parse and semantic errors carry spans, so they are rendered as
//! ariadne reports with the offending source labelled. Everything else
//! (I/O, toolchain failures) prints as plain error lines. If report
//! rendering itself fails, the plain form is used as a fallback.

use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};

use hpc::semantic::SemanticError;

use crate::driver::CompileError;

fn print_range_report(
    filename: &str,
    source: &str,
    span_range: Range<usize>,
    short_message: &str,
    label_message: &str,
) -> std::io::Result<()> {
    Report::build(ReportKind::Error, (filename, span_range.clone()))
        .with_config(Config::default().with_index_type(IndexType::Byte))
        .with_message(short_message)
        .with_label(
            Label::new((filename, span_range))
                .with_message(label_message)
                .with_color(Color::Red),
        )
        .finish()
        .eprint((filename, Source::from(source)))
}

fn report_semantic_error(filename: &str, source: &str, error: &SemanticError) {
    let Some(span) = error.span() else {
        eprintln!("Semantic Error: {}", error.message());
        return;
    };

    if let Err(report_err) = print_range_report(
        filename,
        source,
        span.start..span.end,
        error.short_message(),
        error.message(),
    ) {
        eprintln!(
            "Semantic Error: {} (at {}:{})",
            error.message(),
            span.line,
            span.column
        );
        eprintln!("(Failed to display detailed error report: {})", report_err);
    }
}

/// Reports a compilation error to stderr.
pub(crate) fn report_error(filename: &str, source: &str, error: &CompileError) {
    match error {
        CompileError::Parse(e) => {
            if let Err(report_err) = print_range_report(
                filename,
                source,
                e.span.start..e.span.end,
                "Syntax error",
                &format!("at '{}': {}", e.lexeme, e.message),
            ) {
                eprintln!("Error: {}", e);
                eprintln!("(Failed to display detailed error report: {})", report_err);
            }
        }
        CompileError::Semantic(errors) => {
            for error in errors {
                report_semantic_error(filename, source, error);
            }
        }
        CompileError::Emit(e) => {
            if let Some(span) = e.span {
                if let Err(report_err) = print_range_report(
                    filename,
                    source,
                    span.start..span.end,
                    "Code generation failed",
                    &e.message,
                ) {
                    eprintln!("Error: {}", e);
                    eprintln!("(Failed to display detailed error report: {})", report_err);
                }
            } else {
                eprintln!("Error: Code generation failed: {}", e.message);
            }
        }
        CompileError::FileRead { .. }
        | CompileError::TempDirCreation(_)
        | CompileError::CFileWrite { .. }
        | CompileError::CCompilerLaunch(_)
        | CompileError::CCompilation { .. }
        | CompileError::ExecutableRun(_) => {
            eprintln!("Error: {}", error);
        }
    }
}

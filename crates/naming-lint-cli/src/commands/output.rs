//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use naming_lint_core::{LintResult, Severity, SyntaxTree, Violation, ViolationDiagnostic};

use crate::OutputFormat;

/// Print lint results in the specified format.
pub fn print(result: &LintResult, trees: &[SyntaxTree], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", render_text(result, false)),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print!("{}", render_compact(result)),
        OutputFormat::Fancy => print_fancy(result, trees),
    }
    print_failures(result);
    Ok(())
}

fn severity_indicator(severity: Severity, plain: bool) -> String {
    if plain {
        return severity.to_string();
    }
    let color = match severity {
        Severity::Error => "31",
        Severity::Warning => "33",
        Severity::Info => "34",
    };
    format!("\x1b[{color}m{severity}\x1b[0m")
}

fn render_violation(violation: &Violation, plain: bool) -> String {
    let location = violation.location();
    format!(
        "{} at {}:{}:{}\n  {}: {}\n  = identifier: {}\n",
        violation.rule,
        violation.file.display(),
        location.line,
        location.column,
        severity_indicator(violation.severity, plain),
        violation.message,
        violation.token.text,
    )
}

fn render_summary(result: &LintResult, plain: bool) -> String {
    let (errors, warnings, infos) = result.count_by_severity();
    let summary = format!(
        "Found {} error(s), {} warning(s), {} info(s) in {} tree(s)",
        errors, warnings, infos, result.trees_checked
    );
    if plain {
        return summary;
    }
    let color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };
    format!("{color}{summary}\x1b[0m")
}

fn render_text(result: &LintResult, plain: bool) -> String {
    let mut out = String::new();
    for violation in &result.violations {
        out.push_str(&render_violation(violation, plain));
        out.push('\n');
    }
    out.push_str(&render_summary(result, plain));
    out.push('\n');
    out
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn render_compact(result: &LintResult) -> String {
    result
        .violations
        .iter()
        .map(|v| format!("{v}\n"))
        .collect()
}

/// Renders each violation against its tree's source text, falling back to
/// the text layout for dumps that carry none.
fn print_fancy(result: &LintResult, trees: &[SyntaxTree]) {
    for violation in &result.violations {
        let source = trees
            .iter()
            .find(|t| t.path == violation.file)
            .and_then(|t| t.source.clone());
        match source {
            Some(source) => {
                let report = Report::new(ViolationDiagnostic::from(violation)).with_source_code(
                    NamedSource::new(violation.file.display().to_string(), source),
                );
                println!("{report:?}");
            }
            None => println!("{}", render_violation(violation, false)),
        }
    }
    println!("{}", render_summary(result, false));
}

fn print_failures(result: &LintResult) {
    for failure in &result.failures {
        eprintln!(
            "rule {} aborted on {}: {}",
            failure.rule,
            failure.file.display(),
            failure.message
        );
    }
}

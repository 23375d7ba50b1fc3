//! Check command implementation.

use anyhow::{Context, Result};
use naming_lint_core::{Analyzer, Config, LintResult, SyntaxTree};
use naming_lint_rules::builtin_registry;
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Exit status when rules aborted on malformed trees.
const EXIT_RULE_FAILURE: i32 = 2;

/// Runs the check command.
pub fn run(
    trees: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<&str>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load()?;
    let threshold = config.fail_threshold();

    let analyzer = build_analyzer(config, rules_filter)?;
    tracing::info!(
        "Analyzing {} tree(s) with {} rules",
        trees.len(),
        analyzer.rule_count()
    );

    let trees = trees
        .iter()
        .map(|path| {
            SyntaxTree::from_file(path)
                .with_context(|| format!("Failed to load syntax tree: {}", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let result = analyzer.analyze_all(&trees);

    super::output::print(&result, &trees, format)?;

    std::process::exit(exit_code(&result, threshold));
}

fn build_analyzer(config: Config, rules_filter: Option<&str>) -> Result<Analyzer> {
    let mut builder = Analyzer::builder()
        .registry(builtin_registry())
        .config(config);

    if let Some(filter) = rules_filter {
        builder = builder.only(
            filter
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        );
    }

    builder.build().context("Failed to build analyzer")
}

fn exit_code(result: &LintResult, threshold: naming_lint_core::Severity) -> i32 {
    if !result.failures.is_empty() {
        EXIT_RULE_FAILURE
    } else {
        i32::from(result.has_violations_at(threshold))
    }
}

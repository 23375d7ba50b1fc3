//! Core analyzer for orchestrating lint execution.

use crate::config::Config;
use crate::registry::{normalize_rule_name, RegistryEntry, RuleRegistry};
use crate::rule::RuleBox;
use crate::syntax::{SyntaxTree, TreeError};
use crate::traversal;
use crate::types::{LintResult, RuleFailure, RuleStatus, Violation};

use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A requested rule is not registered.
    #[error("Unknown rule: {name}")]
    UnknownRule {
        /// The name that failed to resolve.
        name: String,
    },

    /// Error loading a syntax tree dump.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    registry: RuleRegistry,
    only: Option<Vec<String>>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every rule from `registry`.
    #[must_use]
    pub fn registry(mut self, registry: &RuleRegistry) -> Self {
        for entry in registry.entries() {
            self = self.entry(entry);
        }
        self
    }

    /// Adds a single rule entry. An entry with an already known name is ignored.
    #[must_use]
    pub fn entry(mut self, entry: RegistryEntry) -> Self {
        if self.registry.register(entry.descriptor, entry.factory).is_err() {
            debug!("Rule {} already added", entry.descriptor.name);
        }
        self
    }

    /// Restricts analysis to the named rules.
    #[must_use]
    pub fn only<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if a name passed to [`only`](Self::only) is not registered.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();

        for name in config.rules.keys() {
            if !self.registry.contains(name) {
                warn!("Configuration mentions unknown rule: {}", name);
            }
        }

        let entries: Vec<RegistryEntry> = match self.only {
            Some(names) => names
                .iter()
                .map(|name| {
                    self.registry
                        .get(name)
                        .ok_or_else(|| AnalyzerError::UnknownRule {
                            name: normalize_rule_name(name),
                        })
                })
                .collect::<Result<_, _>>()?,
            None => self.registry.entries().collect(),
        };

        let entries = entries
            .into_iter()
            .filter(|entry| {
                let enabled = config.is_rule_enabled(entry.descriptor.name);
                if !enabled {
                    debug!("Skipping disabled rule: {}", entry.descriptor.name);
                }
                enabled
            })
            .collect();

        Ok(Analyzer { entries, config })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Every analyzed tree gets fresh rule instances, so results never leak
/// between trees. Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    entries: Vec<RegistryEntry>,
    config: Config,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of active rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.entries.len()
    }

    /// Names of the active rules, in execution order.
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|e| e.descriptor.name).collect()
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs every active rule over `tree` and returns one status per rule.
    ///
    /// Rules that aborted are returned as failures alongside; their statuses
    /// are omitted.
    #[must_use]
    pub fn run(&self, tree: &SyntaxTree) -> (Vec<RuleStatus>, Vec<RuleFailure>) {
        let mut rules: Vec<RuleBox> = self.entries.iter().map(RegistryEntry::create).collect();
        let aborted = traversal::drive(&tree.root, &mut rules);

        let failures: Vec<RuleFailure> = aborted
            .iter()
            .map(|a| RuleFailure {
                rule: rules[a.index].name().to_string(),
                file: tree.path.clone(),
                message: a.error.to_string(),
            })
            .collect();

        let statuses = rules
            .iter()
            .enumerate()
            .filter(|(index, _)| !aborted.iter().any(|a| a.index == *index))
            .map(|(_, rule)| rule.report())
            .collect();

        (statuses, failures)
    }

    /// Analyzes one tree.
    #[must_use]
    pub fn analyze(&self, tree: &SyntaxTree) -> LintResult {
        info!("Analyzing {}", tree.path.display());

        let (statuses, failures) = self.run(tree);

        let mut violations: Vec<Violation> = statuses
            .into_iter()
            .flat_map(|status| {
                let severity = self.config.rule_severity(status.descriptor.name);
                status.violations.into_iter().map(move |v| {
                    let v = v.with_file(tree.path.clone());
                    match severity {
                        Some(severity) => Violation { severity, ..v },
                        None => v,
                    }
                })
            })
            .collect();
        violations.sort();

        debug!(
            "{}: {} violation(s), {} failed rule(s)",
            tree.path.display(),
            violations.len(),
            failures.len()
        );

        LintResult {
            violations,
            failures,
            trees_checked: 1,
        }
    }

    /// Analyzes several trees and merges the results.
    #[must_use]
    pub fn analyze_all<'a, I>(&self, trees: I) -> LintResult
    where
        I: IntoIterator<Item = &'a SyntaxTree>,
    {
        let mut result = LintResult::new();
        for tree in trees {
            result.extend(self.analyze(tree));
        }
        result.violations.sort();
        info!(
            "Analysis complete: {} violations in {} trees",
            result.violations.len(),
            result.trees_checked
        );
        result
    }

    /// Loads a JSON tree dump and analyzes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the dump cannot be loaded.
    pub fn analyze_file(&self, path: &Path) -> Result<LintResult, AnalyzerError> {
        let tree = SyntaxTree::from_file(path)?;
        Ok(self.analyze(&tree))
    }
}

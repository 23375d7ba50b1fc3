//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::context::TraversalContext;
use crate::syntax::{NodeKind, Token};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source location of a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset from the start of the source text.
    pub offset: usize,
    /// Length of the token in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// Static metadata identifying and documenting a rule.
///
/// One instance exists per rule type for the lifetime of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    /// Kebab-case rule name (e.g., "port-name-style").
    pub name: &'static str,
    /// Style-guide topic the rule enforces.
    pub topic: &'static str,
    /// Human-readable policy description.
    pub description: &'static str,
}

/// A naming violation found on a single identifier token.
///
/// Violations order by file, then token offset, then message. Two violations
/// with the same key are the same finding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule name (e.g., "parameter-name-prefix").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Path of the analyzed tree. Empty until the analyzer stamps it.
    #[serde(default)]
    pub file: PathBuf,
    /// The offending leaf, copied from the traversed tree.
    pub token: Token,
    /// Human-readable message.
    pub message: String,
    /// Ancestor node kinds at the moment the token was flagged, innermost last.
    #[serde(default)]
    pub context: Vec<NodeKind>,
}

impl Violation {
    /// Creates a new violation on `token`, capturing the traversal context.
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        severity: Severity,
        token: &Token,
        message: impl Into<String>,
        context: &TraversalContext<'_>,
    ) -> Self {
        Self {
            rule: rule.into(),
            severity,
            file: PathBuf::new(),
            token: token.clone(),
            message: message.into(),
            context: context.snapshot(),
        }
    }

    /// Attaches the path of the tree this violation was found in.
    #[must_use]
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    /// Location of the offending token.
    #[must_use]
    pub fn location(&self) -> Location {
        self.token.location
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let location = self.location();
        let mut output = format!(
            "{} at {}:{}:{}\n",
            self.rule,
            self.file.display(),
            location.line,
            location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        let _ = writeln!(output, "  = identifier: {}", self.token.text);
        output
    }
}

impl PartialEq for Violation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Violation {}

impl PartialOrd for Violation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Violation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.file
            .cmp(&other.file)
            .then(self.token.location.offset.cmp(&other.token.location.offset))
            .then_with(|| self.message.cmp(&other.message))
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let location = self.location();
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.file.display(),
            location.line,
            location.column,
            self.severity,
            self.rule,
            self.message
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        let location = v.location();
        Self {
            message: format!("[{}] {}", v.rule, v.message),
            span: SourceSpan::from((location.offset, location.length)),
            label_message: format!("`{}` declared here", v.token.text),
        }
    }
}

/// Deduplicating, ordered collection of violations owned by one rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViolationSet {
    violations: BTreeSet<Violation>,
}

impl ViolationSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a violation. Returns `false` if an equal one was already present.
    pub fn insert(&mut self, violation: Violation) -> bool {
        self.violations.insert(violation)
    }

    /// Number of distinct violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if no violations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Iterates violations in order.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }
}

impl IntoIterator for ViolationSet {
    type Item = Violation;
    type IntoIter = std::collections::btree_set::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

/// The outcome of one rule over one tree: its descriptor plus everything it found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleStatus {
    /// Descriptor of the rule that produced this status.
    pub descriptor: &'static RuleDescriptor,
    /// Violations recorded during traversal.
    pub violations: ViolationSet,
}

impl RuleStatus {
    /// Bundles a violation set with its rule descriptor.
    #[must_use]
    pub fn new(descriptor: &'static RuleDescriptor, violations: ViolationSet) -> Self {
        Self {
            descriptor,
            violations,
        }
    }

    /// Returns true if the rule found nothing.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// A rule that stopped evaluating a tree because of an internal error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleFailure {
    /// Name of the failed rule.
    pub rule: String,
    /// Path of the tree being analyzed.
    #[serde(default)]
    pub file: PathBuf,
    /// Diagnostic describing the failure.
    pub message: String,
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found, ordered by file then position.
    pub violations: Vec<Violation>,
    /// Rules that aborted on a tree.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<RuleFailure>,
    /// Number of trees checked.
    pub trees_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_violations_at(Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Returns violations produced by one rule.
    #[must_use]
    pub fn by_rule(&self, rule: &str) -> Vec<&Violation> {
        self.violations.iter().filter(|v| v.rule == rule).collect()
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations
            .iter()
            .fold((0, 0, 0), |(e, w, i), v| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Adds violations and failures from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.failures.extend(other.failures);
        self.trees_checked += other.trees_checked;
    }
}

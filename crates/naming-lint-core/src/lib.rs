//! # naming-lint-core
//!
//! Core framework for naming-convention linting over positional
//! SystemVerilog concrete syntax trees.
//!
//! This crate provides the foundational traits and types for building
//! naming rules. It includes:
//!
//! - [`SyntaxNode`] and [`SyntaxTree`], the positional tree rules inspect
//! - [`matcher`], declarative shapes that select declaration nodes
//! - [`SyntaxTreeRule`] trait for per-tree rules driven node by node
//! - [`RuleRegistry`] mapping rule names to factories
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use naming_lint_core::{Analyzer, SyntaxTree};
//!
//! let analyzer = Analyzer::builder()
//!     .registry(naming_lint_rules::builtin_registry())
//!     .build()?;
//!
//! let tree = SyntaxTree::from_file("top.sv.json".as_ref())?;
//! let result = analyzer.analyze(&tree);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod builder;
mod config;
mod context;
mod registry;
mod rule;
mod syntax;
mod types;

/// Structural node matching.
pub mod matcher;
/// Pre-order traversal and the rule driver.
pub mod traversal;
/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use builder::SyntaxTreeBuilder;
pub use config::{Config, ConfigError, RuleConfig};
pub use context::TraversalContext;
pub use matcher::{Bindings, Matcher, Shape};
pub use registry::{normalize_rule_name, RegistryEntry, RegistryError, RuleRegistry};
pub use rule::{RuleBox, RuleError, RuleFactory, SyntaxTreeRule};
pub use syntax::{Interior, NodeKind, SyntaxNode, SyntaxTree, Token, TokenKind, TreeError};
pub use types::{
    LintResult, Location, RuleDescriptor, RuleFailure, RuleStatus, Severity, Violation,
    ViolationDiagnostic, ViolationSet,
};

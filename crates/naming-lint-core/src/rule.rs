//! Rule trait for defining syntax-tree lint rules.

use crate::context::TraversalContext;
use crate::syntax::{NodeKind, SyntaxNode};
use crate::types::{RuleDescriptor, RuleStatus, Severity};

/// A per-tree lint rule driven node by node.
///
/// The traversal driver calls [`handle_symbol`](Self::handle_symbol) once for
/// every node of the tree in pre-order, then [`report`](Self::report) once.
/// A rule keeps nothing between calls except the violations it has recorded,
/// and never observes other rules, so any number of rules can share a tree.
///
/// # Example
///
/// ```ignore
/// use naming_lint_core::{RuleDescriptor, RuleStatus, SyntaxTreeRule, ViolationSet};
///
/// static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
///     name: "no-lowercase-modules",
///     topic: "module-names",
///     description: "Checks that module names are upper case.",
/// };
///
/// pub struct NoLowercaseModules { violations: ViolationSet }
///
/// impl SyntaxTreeRule for NoLowercaseModules {
///     fn descriptor(&self) -> &'static RuleDescriptor { &DESCRIPTOR }
///
///     fn handle_symbol(&mut self, node: &SyntaxNode, ctx: &TraversalContext<'_>) -> Result<(), RuleError> {
///         // match, extract, test, record
///         Ok(())
///     }
///
///     fn report(&self) -> RuleStatus {
///         RuleStatus::new(&DESCRIPTOR, self.violations.clone())
///     }
/// }
/// ```
pub trait SyntaxTreeRule: Send {
    /// Returns the static descriptor of this rule.
    fn descriptor(&self) -> &'static RuleDescriptor;

    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// Returns the severity recorded on violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Inspects one node.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] when a node the rule's matcher accepted lacks the
    /// substructure the rule relies on. The driver stops feeding the rule.
    fn handle_symbol(
        &mut self,
        node: &SyntaxNode,
        ctx: &TraversalContext<'_>,
    ) -> Result<(), RuleError>;

    /// Returns everything recorded so far. Calling it twice yields the same status.
    fn report(&self) -> RuleStatus;
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn SyntaxTreeRule>;

/// Creates a fresh rule instance.
pub type RuleFactory = fn() -> RuleBox;

/// Internal rule failures.
///
/// These indicate a mismatch between a matcher and the extraction code
/// paired with it, never a property of the analyzed source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// A matched node is missing an expected sub-node.
    #[error("{rule}: matched {node} has no {expected}")]
    ContractViolation {
        /// Name of the rule that hit the mismatch.
        rule: &'static str,
        /// Kind of the matched node.
        node: NodeKind,
        /// What was expected inside it.
        expected: &'static str,
    },
}

//! Pre-order traversal driver.

use tracing::{debug, error};

use crate::context::TraversalContext;
use crate::rule::{RuleBox, RuleError};
use crate::syntax::{NodeKind, SyntaxNode};

/// Visits every node under `root` (leaves included) exactly once, parents
/// before children, siblings in order.
pub fn walk<'t, F>(root: &'t SyntaxNode, mut visit: F)
where
    F: FnMut(&'t SyntaxNode, &TraversalContext<'_>),
{
    let mut ancestors = Vec::new();
    walk_inner(root, &mut ancestors, &mut visit);
}

fn walk_inner<'t, F>(node: &'t SyntaxNode, ancestors: &mut Vec<NodeKind>, visit: &mut F)
where
    F: FnMut(&'t SyntaxNode, &TraversalContext<'_>),
{
    visit(node, &TraversalContext::new(ancestors.as_slice()));

    if let Some(interior) = node.as_interior() {
        ancestors.push(interior.kind);
        for child in interior.children.iter().flatten() {
            walk_inner(child, ancestors, visit);
        }
        ancestors.pop();
    }
}

/// A rule that aborted during [`drive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbortedRule {
    /// Index of the rule in the slice passed to [`drive`].
    pub index: usize,
    /// Why it stopped.
    pub error: RuleError,
}

/// Feeds every node to every rule, interleaved node by node.
///
/// A rule that returns an error is logged, receives no further nodes, and is
/// listed in the returned vector. Remaining rules keep running.
pub fn drive(root: &SyntaxNode, rules: &mut [RuleBox]) -> Vec<AbortedRule> {
    let mut aborted: Vec<Option<RuleError>> = vec![None; rules.len()];
    let mut nodes_visited = 0usize;

    walk(root, |node, ctx| {
        nodes_visited += 1;
        for (index, rule) in rules.iter_mut().enumerate() {
            if aborted[index].is_some() {
                continue;
            }
            if let Err(e) = rule.handle_symbol(node, ctx) {
                error!("Rule {} aborted: {}", rule.name(), e);
                aborted[index] = Some(e);
            }
        }
    });

    debug!("Visited {} nodes with {} rules", nodes_visited, rules.len());

    aborted
        .into_iter()
        .enumerate()
        .filter_map(|(index, e)| e.map(|error| AbortedRule { index, error }))
        .collect()
}

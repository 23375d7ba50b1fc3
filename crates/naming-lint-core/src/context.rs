//! Context types for rule execution.

use crate::syntax::NodeKind;

/// Ancestor chain of the node currently being visited.
///
/// The traversal driver rebuilds this view for every node; rules borrow it
/// for the duration of one [`handle_symbol`](crate::SyntaxTreeRule::handle_symbol)
/// call and copy it with [`snapshot`](Self::snapshot) when they need to keep it.
#[derive(Debug, Clone, Copy)]
pub struct TraversalContext<'a> {
    ancestors: &'a [NodeKind],
}

impl<'a> TraversalContext<'a> {
    /// Creates a context from an ancestor stack, innermost last.
    #[must_use]
    pub fn new(ancestors: &'a [NodeKind]) -> Self {
        Self { ancestors }
    }

    /// Context of the root node.
    #[must_use]
    pub fn root() -> Self {
        Self { ancestors: &[] }
    }

    /// Ancestor kinds, outermost first.
    #[must_use]
    pub fn ancestors(&self) -> &'a [NodeKind] {
        self.ancestors
    }

    /// Number of ancestors.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.ancestors.len()
    }

    /// Kind of the direct parent, if any.
    #[must_use]
    pub fn parent(&self) -> Option<NodeKind> {
        self.ancestors.last().copied()
    }

    /// Returns true if any ancestor has `kind`.
    #[must_use]
    pub fn is_inside(&self, kind: NodeKind) -> bool {
        self.ancestors.contains(&kind)
    }

    /// Copies the ancestor chain.
    #[must_use]
    pub fn snapshot(&self) -> Vec<NodeKind> {
        self.ancestors.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_context_is_empty() {
        let ctx = TraversalContext::root();
        assert_eq!(ctx.depth(), 0);
        assert!(ctx.parent().is_none());
        assert!(ctx.snapshot().is_empty());
    }

    #[test]
    fn parent_is_innermost() {
        let stack = [
            NodeKind::SourceText,
            NodeKind::ModuleDeclaration,
            NodeKind::ModuleHeader,
            NodeKind::PortDeclarationList,
        ];
        let ctx = TraversalContext::new(&stack);
        assert_eq!(ctx.parent(), Some(NodeKind::PortDeclarationList));
        assert!(ctx.is_inside(NodeKind::ModuleDeclaration));
        assert!(!ctx.is_inside(NodeKind::ClassDeclaration));
        assert_eq!(ctx.snapshot(), stack.to_vec());
    }
}

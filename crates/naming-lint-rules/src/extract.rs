//! Identifier extraction from matched declarations.
//!
//! Each extractor is paired with a matcher from [`crate::shapes`]: it only
//! sees nodes that matcher accepted. A matched node that still lacks the
//! expected substructure is reported as [`RuleError::ContractViolation`]
//! instead of yielding an empty result.

use naming_lint_core::{Bindings, NodeKind, RuleError, SyntaxNode, Token, TokenKind};

use crate::shapes::{DIRECTION, KEYWORD};
use crate::{parameter_name_prefix, port_name_style};

/// What kind of declaration an identifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    /// `parameter`, or a parameter port list entry without a keyword.
    Parameter,
    /// `localparam`.
    LocalParameter,
    /// `input` port.
    InputPort,
    /// `output` port.
    OutputPort,
    /// `inout` port.
    InoutPort,
}

/// An identifier leaf borrowed from the tree, with its declaration kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentifierToken<'a> {
    /// The identifier leaf.
    pub token: &'a Token,
    /// The declaration it names.
    pub kind: DeclarationKind,
}

/// Classifies a parameter declaration and returns every declared name, in
/// source order.
///
/// # Errors
///
/// Returns an error if the declaration has no assignment list, or an
/// assignment without an identifier.
pub fn parameter_identifiers<'a>(
    node: &'a SyntaxNode,
    bindings: &Bindings<'a>,
) -> Result<(DeclarationKind, Vec<IdentifierToken<'a>>), RuleError> {
    let contract = |expected| RuleError::ContractViolation {
        rule: parameter_name_prefix::NAME,
        node: NodeKind::ParamDeclaration,
        expected,
    };

    let kind = match bindings.leaf(KEYWORD).map(|t| t.kind) {
        Some(TokenKind::Localparam) => DeclarationKind::LocalParameter,
        _ => DeclarationKind::Parameter,
    };

    let list = node
        .child(2)
        .filter(|n| n.is_node(NodeKind::ParamAssignmentList))
        .ok_or_else(|| contract("parameter assignment list"))?;

    let identifiers = list
        .children()
        .filter(|child| child.is_node(NodeKind::ParamAssignment))
        .map(|assignment| {
            assignment
                .child(0)
                .and_then(SyntaxNode::as_leaf)
                .filter(|t| t.kind == TokenKind::SymbolIdentifier)
                .map(|token| IdentifierToken { token, kind })
                .ok_or_else(|| contract("parameter identifier"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if identifiers.is_empty() {
        return Err(contract("parameter assignment"));
    }
    Ok((kind, identifiers))
}

/// Returns the declared name of a port.
///
/// # Errors
///
/// Returns an error if the declaration has no identifier.
pub fn port_identifier<'a>(
    node: &'a SyntaxNode,
    bindings: &Bindings<'a>,
) -> Result<IdentifierToken<'a>, RuleError> {
    let contract = |expected| RuleError::ContractViolation {
        rule: port_name_style::NAME,
        node: NodeKind::PortDeclaration,
        expected,
    };

    let kind = match bindings.leaf(DIRECTION).map(|t| t.kind) {
        Some(TokenKind::Input) => DeclarationKind::InputPort,
        Some(TokenKind::Output) => DeclarationKind::OutputPort,
        Some(TokenKind::Inout) => DeclarationKind::InoutPort,
        _ => return Err(contract("direction")),
    };

    node.child(3)
        .filter(|n| n.is_node(NodeKind::UnqualifiedId))
        .and_then(|id| id.child(0))
        .and_then(SyntaxNode::as_leaf)
        .filter(|t| t.kind == TokenKind::SymbolIdentifier)
        .map(|token| IdentifierToken { token, kind })
        .ok_or_else(|| contract("port identifier"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{module, module_with_params, Param, Port};
    use crate::shapes::{param_decl_matcher, port_matcher};
    use naming_lint_core::traversal::walk;
    use naming_lint_core::{Location, SyntaxTree};

    fn parameters(tree: &SyntaxTree) -> Vec<(DeclarationKind, Vec<String>)> {
        let mut out = Vec::new();
        walk(&tree.root, |node, _| {
            if let Some(b) = param_decl_matcher().matches(node) {
                let (kind, ids) = parameter_identifiers(node, &b).expect("well-formed");
                out.push((kind, ids.iter().map(|i| i.token.text.clone()).collect()));
            }
        });
        out
    }

    #[test]
    fn classifies_by_keyword() {
        let tree = module(
            &[Param::implicit("int", "a")],
            &[],
            &[Param::parameter(&["b"]), Param::localparam(&["c", "d"])],
        );
        assert_eq!(
            parameters(&tree),
            vec![
                (DeclarationKind::Parameter, vec!["a".to_string()]),
                (DeclarationKind::Parameter, vec!["b".to_string()]),
                (
                    DeclarationKind::LocalParameter,
                    vec!["c".to_string(), "d".to_string()]
                ),
            ]
        );
    }

    #[test]
    fn port_identifier_carries_direction() {
        let tree = module(
            &[],
            &[
                Port::input("A").typed("logic").packed("7", "0"),
                Port::output("B").net("wire"),
                Port::inout("C"),
            ],
            &[],
        );
        let mut out = Vec::new();
        walk(&tree.root, |node, _| {
            if let Some(b) = port_matcher().matches(node) {
                let id = port_identifier(node, &b).expect("well-formed");
                out.push((id.kind, id.token.text.as_str()));
            }
        });
        assert_eq!(
            out,
            vec![
                (DeclarationKind::InputPort, "A"),
                (DeclarationKind::OutputPort, "B"),
                (DeclarationKind::InoutPort, "C"),
            ]
        );
    }

    #[test]
    fn extracted_tokens_are_tree_leaves() {
        let tree = module_with_params(&[Param::parameter(&["x", "y"])]);
        let leaves = tree.root.leaves();
        walk(&tree.root, |node, _| {
            if let Some(b) = param_decl_matcher().matches(node) {
                let (_, ids) = parameter_identifiers(node, &b).expect("well-formed");
                for id in ids {
                    assert!(leaves.iter().any(|leaf| std::ptr::eq(*leaf, id.token)));
                }
            }
        });
    }

    #[test]
    fn missing_assignment_list_is_a_contract_violation() {
        let keyword = SyntaxNode::leaf(Token::new(
            TokenKind::Parameter,
            "parameter",
            Location::default(),
        ));
        let node = SyntaxNode::node(
            NodeKind::ParamDeclaration,
            vec![Some(keyword), None, None, None],
        );
        let b = param_decl_matcher().matches(&node).expect("shape matches");
        let err = parameter_identifiers(&node, &b).expect_err("no names");
        assert_eq!(
            err,
            RuleError::ContractViolation {
                rule: "parameter-name-prefix",
                node: NodeKind::ParamDeclaration,
                expected: "parameter assignment list",
            }
        );
    }

    #[test]
    fn port_without_identifier_is_a_contract_violation() {
        let direction = SyntaxNode::leaf(Token::new(TokenKind::Input, "input", Location::default()));
        let node = SyntaxNode::node(NodeKind::PortDeclaration, vec![Some(direction)]);
        let b = port_matcher().matches(&node).expect("shape matches");
        assert!(port_identifier(&node, &b).is_err());
    }
}

//! Declaration shapes the naming rules select on.

use std::sync::OnceLock;

use naming_lint_core::{Matcher, NodeKind, Shape, SyntaxNode, TokenKind};

/// Binding name of a parameter declaration's keyword leaf.
pub const KEYWORD: &str = "keyword";

/// Binding name of a port declaration's direction leaf.
pub const DIRECTION: &str = "direction";

/// Matches any parameter declaration statement, with or without a
/// `parameter`/`localparam` keyword.
///
/// Child 0 is the keyword when present. Declarations inside a parameter
/// port list may omit it (`#(int P_W = 8)`).
pub fn param_decl_matcher() -> &'static Matcher {
    static MATCHER: OnceLock<Matcher> = OnceLock::new();
    MATCHER.get_or_init(|| {
        Matcher::new(
            Shape::node(NodeKind::ParamDeclaration).child(
                0,
                Shape::leaf_any(&[TokenKind::Parameter, TokenKind::Localparam])
                    .bind(KEYWORD)
                    .optional(),
            ),
        )
    })
}

/// Matches an ANSI port declaration with an explicit direction.
pub fn port_matcher() -> &'static Matcher {
    static MATCHER: OnceLock<Matcher> = OnceLock::new();
    MATCHER.get_or_init(|| {
        Matcher::new(
            Shape::node(NodeKind::PortDeclaration).child(
                0,
                Shape::leaf_any(&[TokenKind::Input, TokenKind::Output, TokenKind::Inout])
                    .bind(DIRECTION),
            ),
        )
    })
}

/// True for `parameter type T = ...` declarations.
///
/// Expects a node already accepted by [`param_decl_matcher`].
#[must_use]
pub fn is_type_parameter(node: &SyntaxNode) -> bool {
    node.child(1).and_then(SyntaxNode::token_kind) == Some(TokenKind::Type)
        || node
            .child(2)
            .is_some_and(|list| list.is_node(NodeKind::TypeAssignmentList))
}

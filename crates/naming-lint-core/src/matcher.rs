//! Structural matching of syntax nodes against declarative shapes.
//!
//! A [`Shape`] describes a node by its kind tag, its arity and patterns for
//! selected child slots. Shapes are plain data, so new declaration shapes are
//! added by writing a new pattern rather than new traversal code.
//!
//! ```
//! use naming_lint_core::matcher::{Matcher, Shape};
//! use naming_lint_core::{NodeKind, TokenKind};
//!
//! let matcher = Matcher::new(
//!     Shape::node(NodeKind::PortDeclaration)
//!         .child(0, Shape::leaf_any(&[TokenKind::Input, TokenKind::Output]).bind("direction")),
//! );
//! # let _ = matcher;
//! ```

use std::collections::BTreeMap;

use crate::syntax::{NodeKind, SyntaxNode, Token, TokenKind};

/// A structural pattern over syntax nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Any present node.
    Any,
    /// A leaf whose token kind is one of the listed kinds.
    Leaf(Vec<TokenKind>),
    /// An interior node of `kind` with at least `min_arity` child slots whose
    /// listed slots match their patterns.
    Node {
        /// Required node kind.
        kind: NodeKind,
        /// Minimum number of child slots.
        min_arity: usize,
        /// Patterns for specific child slots.
        children: Vec<(usize, Shape)>,
    },
    /// The slot may be absent; if present it must match.
    Optional(Box<Shape>),
    /// First matching alternative wins.
    AnyOf(Vec<Shape>),
    /// Matches the inner shape and records the node under a name.
    Bind(&'static str, Box<Shape>),
}

impl Shape {
    /// Interior node of `kind`, any children.
    #[must_use]
    pub fn node(kind: NodeKind) -> Self {
        Self::Node {
            kind,
            min_arity: 0,
            children: Vec::new(),
        }
    }

    /// Leaf of exactly `kind`.
    #[must_use]
    pub fn leaf(kind: TokenKind) -> Self {
        Self::Leaf(vec![kind])
    }

    /// Leaf of any of `kinds`.
    #[must_use]
    pub fn leaf_any(kinds: &[TokenKind]) -> Self {
        Self::Leaf(kinds.to_vec())
    }

    /// Alternatives.
    #[must_use]
    pub fn any_of(shapes: Vec<Shape>) -> Self {
        Self::AnyOf(shapes)
    }

    /// Requires at least `arity` child slots. Only meaningful on node shapes.
    #[must_use]
    pub fn min_arity(self, arity: usize) -> Self {
        match self {
            Self::Node { kind, children, .. } => Self::Node {
                kind,
                min_arity: arity,
                children,
            },
            other => other,
        }
    }

    /// Adds a pattern for child slot `index`. Only meaningful on node shapes.
    #[must_use]
    pub fn child(self, index: usize, shape: Shape) -> Self {
        match self {
            Self::Node {
                kind,
                min_arity,
                mut children,
            } => {
                children.push((index, shape));
                Self::Node {
                    kind,
                    min_arity,
                    children,
                }
            }
            other => other,
        }
    }

    /// Allows the slot to be absent.
    #[must_use]
    pub fn optional(self) -> Self {
        Self::Optional(Box::new(self))
    }

    /// Binds the matched node under `name`.
    #[must_use]
    pub fn bind(self, name: &'static str) -> Self {
        Self::Bind(name, Box::new(self))
    }
}

/// Sub-nodes bound by a successful match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings<'a> {
    bound: BTreeMap<&'static str, &'a SyntaxNode>,
}

impl<'a> Bindings<'a> {
    /// Node bound under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a SyntaxNode> {
        self.bound.get(name).copied()
    }

    /// Token bound under `name`, if the bound node is a leaf.
    #[must_use]
    pub fn leaf(&self, name: &str) -> Option<&'a Token> {
        self.get(name).and_then(SyntaxNode::as_leaf)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Returns true if nothing was bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bound.is_empty()
    }
}

/// Evaluates one [`Shape`] against nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    shape: Shape,
}

impl Matcher {
    /// Creates a matcher for `shape`.
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self { shape }
    }

    /// The pattern this matcher evaluates.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Tests `node`, returning its bindings on success.
    #[must_use]
    pub fn matches<'a>(&self, node: &'a SyntaxNode) -> Option<Bindings<'a>> {
        let mut bindings = Bindings::default();
        match_slot(&self.shape, Some(node), &mut bindings).then_some(bindings)
    }
}

fn match_slot<'a>(
    shape: &Shape,
    slot: Option<&'a SyntaxNode>,
    bindings: &mut Bindings<'a>,
) -> bool {
    match shape {
        Shape::Optional(inner) => slot.map_or(true, |node| match_slot(inner, Some(node), bindings)),
        Shape::AnyOf(alternatives) => alternatives.iter().any(|alt| {
            let mut scratch = bindings.clone();
            if match_slot(alt, slot, &mut scratch) {
                *bindings = scratch;
                true
            } else {
                false
            }
        }),
        Shape::Bind(name, inner) => {
            let Some(node) = slot else {
                return false;
            };
            if match_slot(inner, Some(node), bindings) {
                bindings.bound.insert(*name, node);
                true
            } else {
                false
            }
        }
        Shape::Any => slot.is_some(),
        Shape::Leaf(kinds) => slot
            .and_then(SyntaxNode::token_kind)
            .is_some_and(|kind| kinds.contains(&kind)),
        Shape::Node {
            kind,
            min_arity,
            children,
        } => {
            let Some(node) = slot else {
                return false;
            };
            if node.node_kind() != Some(*kind) || node.arity() < *min_arity {
                return false;
            }
            children
                .iter()
                .all(|(index, child)| match_slot(child, node.child(*index), bindings))
        }
    }
}

//! Concrete syntax tree model consumed by rules.
//!
//! Trees are produced by an external parser, either directly through
//! [`SyntaxTreeBuilder`](crate::SyntaxTreeBuilder) or as a JSON dump loaded
//! with [`SyntaxTree::from_json`]. Rules only ever borrow nodes.
//!
//! Interior nodes have positional children. An optional construct that is
//! absent from the source occupies its slot as `None`, so a given child index
//! always plays the same role for a given [`NodeKind`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::types::Location;

/// Kind tag of an interior node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of a compilation unit.
    SourceText,
    /// `module ... endmodule`
    ModuleDeclaration,
    /// `module name #(...) (...);`
    ModuleHeader,
    /// `package ... endpackage`
    PackageDeclaration,
    /// `class ... endclass`
    ClassDeclaration,
    /// Items between a header and its end keyword.
    ItemList,
    /// `#( ... )` parameter port list.
    ParamPortList,
    /// `( ... )` ANSI port list.
    PortDeclarationList,
    /// One ANSI port: `[0]` direction, `[1]` net/var keyword, `[2]` data type,
    /// `[3]` identifier, `[4]` unpacked dimensions.
    PortDeclaration,
    /// `parameter`/`localparam` declaration: `[0]` keyword, `[1]` data type or
    /// `type` keyword, `[2]` assignment list, `[3]` semicolon.
    ParamDeclaration,
    /// Comma-separated value parameter assignments.
    ParamAssignmentList,
    /// `name [dims] = value`: `[0]` identifier, `[1]` dimensions, `[2]` `=`,
    /// `[3]` value.
    ParamAssignment,
    /// Comma-separated type parameter assignments.
    TypeAssignmentList,
    /// `name = type`: `[0]` identifier, `[1]` `=`, `[2]` type.
    TypeAssignment,
    /// Data type: `[0]` type keyword, `[1]` packed dimensions.
    DataType,
    /// `[msb:lsb]` packed dimensions.
    PackedDimensions,
    /// Unpacked dimensions following an identifier.
    UnpackedDimensions,
    /// `msb:lsb`
    DimensionRange,
    /// Wrapper around a declared identifier leaf.
    UnqualifiedId,
    /// Any expression.
    Expression,
}

impl NodeKind {
    /// Returns the snake_case name used in tree dumps.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceText => "source_text",
            Self::ModuleDeclaration => "module_declaration",
            Self::ModuleHeader => "module_header",
            Self::PackageDeclaration => "package_declaration",
            Self::ClassDeclaration => "class_declaration",
            Self::ItemList => "item_list",
            Self::ParamPortList => "param_port_list",
            Self::PortDeclarationList => "port_declaration_list",
            Self::PortDeclaration => "port_declaration",
            Self::ParamDeclaration => "param_declaration",
            Self::ParamAssignmentList => "param_assignment_list",
            Self::ParamAssignment => "param_assignment",
            Self::TypeAssignmentList => "type_assignment_list",
            Self::TypeAssignment => "type_assignment",
            Self::DataType => "data_type",
            Self::PackedDimensions => "packed_dimensions",
            Self::UnpackedDimensions => "unpacked_dimensions",
            Self::DimensionRange => "dimension_range",
            Self::UnqualifiedId => "unqualified_id",
            Self::Expression => "expression",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind tag of a leaf token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// `module`
    Module,
    /// `endmodule`
    Endmodule,
    /// `package`
    Package,
    /// `endpackage`
    Endpackage,
    /// `class`
    Class,
    /// `endclass`
    Endclass,
    /// `parameter`
    Parameter,
    /// `localparam`
    Localparam,
    /// `type`
    Type,
    /// `input`
    Input,
    /// `output`
    Output,
    /// `inout`
    Inout,
    /// `wire`
    Wire,
    /// `var`
    Var,
    /// `logic`
    Logic,
    /// `bit`
    Bit,
    /// `int`
    Int,
    /// A plain identifier.
    SymbolIdentifier,
    /// A numeric literal.
    Number,
    /// Any punctuation or operator.
    Punctuation,
}

/// A leaf: literal source text plus its location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Source text of the token.
    pub text: String,
    /// Where the token starts.
    pub location: Location,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, location: Location) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

/// An interior node: kind tag plus positional children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interior {
    /// Node kind.
    pub kind: NodeKind,
    /// Children in source order; `None` marks an absent optional construct.
    #[serde(default)]
    pub children: Vec<Option<SyntaxNode>>,
}

/// One element of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyntaxNode {
    /// Terminal token.
    Leaf(Token),
    /// Nonterminal with children.
    Node(Interior),
}

impl SyntaxNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn leaf(token: Token) -> Self {
        Self::Leaf(token)
    }

    /// Creates an interior node.
    #[must_use]
    pub fn node(kind: NodeKind, children: Vec<Option<SyntaxNode>>) -> Self {
        Self::Node(Interior { kind, children })
    }

    /// Returns the token if this is a leaf.
    #[must_use]
    pub fn as_leaf(&self) -> Option<&Token> {
        match self {
            Self::Leaf(token) => Some(token),
            Self::Node(_) => None,
        }
    }

    /// Returns the interior node if this is not a leaf.
    #[must_use]
    pub fn as_interior(&self) -> Option<&Interior> {
        match self {
            Self::Leaf(_) => None,
            Self::Node(interior) => Some(interior),
        }
    }

    /// Node kind of an interior node.
    #[must_use]
    pub fn node_kind(&self) -> Option<NodeKind> {
        self.as_interior().map(|n| n.kind)
    }

    /// Token kind of a leaf.
    #[must_use]
    pub fn token_kind(&self) -> Option<TokenKind> {
        self.as_leaf().map(|t| t.kind)
    }

    /// Returns true if this is an interior node of `kind`.
    #[must_use]
    pub fn is_node(&self, kind: NodeKind) -> bool {
        self.node_kind() == Some(kind)
    }

    /// Number of child slots, including absent ones. Leaves have none.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.as_interior().map_or(0, |n| n.children.len())
    }

    /// Child at `index`, if the slot exists and is populated.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.as_interior()
            .and_then(|n| n.children.get(index))
            .and_then(Option::as_ref)
    }

    /// Present children in order.
    pub fn children(&self) -> impl Iterator<Item = &SyntaxNode> {
        self.as_interior()
            .into_iter()
            .flat_map(|n| n.children.iter().flatten())
    }

    /// All descendant leaves (or this leaf) in source order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    /// First descendant leaf in source order.
    #[must_use]
    pub fn leftmost_leaf(&self) -> Option<&Token> {
        match self {
            Self::Leaf(token) => Some(token),
            Self::Node(_) => self.children().find_map(SyntaxNode::leftmost_leaf),
        }
    }
}

fn collect_leaves<'a>(node: &'a SyntaxNode, out: &mut Vec<&'a Token>) {
    match node {
        SyntaxNode::Leaf(token) => out.push(token),
        SyntaxNode::Node(_) => {
            for child in node.children() {
                collect_leaves(child, out);
            }
        }
    }
}

/// Errors loading a syntax tree dump.
#[derive(Debug, Error)]
pub enum TreeError {
    /// IO error reading the dump.
    #[error("Failed to read syntax tree {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The dump is not a valid tree.
    #[error("Invalid syntax tree dump: {0}")]
    Json(#[from] serde_json::Error),
}

/// A parsed compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxTree {
    /// Path of the source file the tree was parsed from.
    #[serde(default)]
    pub path: PathBuf,
    /// Original source text, when the producer includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Root node.
    pub root: SyntaxNode,
}

impl SyntaxTree {
    /// Wraps a root node.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, root: SyntaxNode) -> Self {
        Self {
            path: path.into(),
            source: None,
            root,
        }
    }

    /// Attaches the source text.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Parses a JSON tree dump.
    ///
    /// Nesting depth is unbounded. Each tree level is two JSON levels, so
    /// long expressions or nested generate blocks outgrow `serde_json`'s
    /// default limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a tree.
    pub fn from_json(content: &str) -> Result<Self, TreeError> {
        let mut json = serde_json::Deserializer::from_str(content);
        json.disable_recursion_limit();
        let tree = Self::deserialize(serde_stacker::Deserializer::new(&mut json))?;
        json.end()?;
        Ok(tree)
    }

    /// Loads a JSON tree dump from disk. An empty `path` field is filled
    /// with the dump's own path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, TreeError> {
        let content = std::fs::read_to_string(path).map_err(|e| TreeError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut tree = Self::from_json(&content)?;
        if tree.path.as_os_str().is_empty() {
            tree.path = path.to_path_buf();
        }
        Ok(tree)
    }

    /// Serializes the tree as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

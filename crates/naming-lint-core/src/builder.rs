//! Incremental construction of syntax trees with real token locations.
//!
//! Parser adapters (and tests) create leaves in source order through a
//! [`SyntaxTreeBuilder`]; the builder appends each token's text to a source
//! buffer and stamps the token with its line, column and byte offset in that
//! buffer. Interior nodes are assembled with [`SyntaxNode::node`].
//!
//! ```
//! use naming_lint_core::{NodeKind, SyntaxNode, SyntaxTreeBuilder, TokenKind};
//!
//! let mut b = SyntaxTreeBuilder::new("t.sv");
//! let id = SyntaxNode::node(
//!     NodeKind::UnqualifiedId,
//!     vec![Some(b.token(TokenKind::SymbolIdentifier, "NAME"))],
//! );
//! let tree = b.finish(id);
//! assert_eq!(tree.source.as_deref(), Some("NAME"));
//! ```

use std::path::PathBuf;

use crate::syntax::{SyntaxNode, SyntaxTree, Token, TokenKind};
use crate::types::Location;

/// Lays out tokens sequentially and records their locations.
#[derive(Debug, Clone)]
pub struct SyntaxTreeBuilder {
    path: PathBuf,
    source: String,
    line: usize,
    column: usize,
}

impl SyntaxTreeBuilder {
    /// Creates a builder for a tree that will be reported under `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: String::new(),
            line: 1,
            column: 1,
        }
    }

    /// Appends `text` separated from the previous token by one space.
    pub fn token(&mut self, kind: TokenKind, text: &str) -> SyntaxNode {
        SyntaxNode::leaf(self.make_token(kind, text, true))
    }

    /// Appends `text` directly after the previous token.
    pub fn glued(&mut self, kind: TokenKind, text: &str) -> SyntaxNode {
        SyntaxNode::leaf(self.make_token(kind, text, false))
    }

    /// Appends a punctuation token directly after the previous token.
    pub fn punct(&mut self, text: &str) -> SyntaxNode {
        self.glued(TokenKind::Punctuation, text)
    }

    /// Starts a new source line.
    pub fn newline(&mut self) {
        self.push_text("\n");
    }

    /// Source text laid out so far.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Wraps `root` into a tree carrying the laid-out source.
    #[must_use]
    pub fn finish(self, root: SyntaxNode) -> SyntaxTree {
        SyntaxTree::new(self.path, root).with_source(self.source)
    }

    fn make_token(&mut self, kind: TokenKind, text: &str, spaced: bool) -> Token {
        if spaced && self.source.chars().last().is_some_and(|c| !c.is_whitespace()) {
            self.push_text(" ");
        }
        let location = Location::new(self.line, self.column).with_span(self.source.len(), text.len());
        self.push_text(text);
        Token::new(kind, text, location)
    }

    fn push_text(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.source.push_str(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::NodeKind;

    #[test]
    fn locations_point_into_source() {
        let mut b = SyntaxTreeBuilder::new("t.sv");
        let module = b.token(TokenKind::Module, "module");
        let name = b.token(TokenKind::SymbolIdentifier, "t");
        let semi = b.punct(";");
        b.newline();
        let end = b.token(TokenKind::Endmodule, "endmodule");
        let tree = b.finish(SyntaxNode::node(
            NodeKind::ModuleDeclaration,
            vec![Some(module), Some(name), Some(semi), Some(end)],
        ));

        let source = tree.source.clone().expect("builder records source");
        assert_eq!(source, "module t;\nendmodule");
        for token in tree.root.leaves() {
            let loc = token.location;
            assert_eq!(&source[loc.offset..loc.offset + loc.length], token.text);
        }

        let end = tree.root.leaves()[3].location;
        assert_eq!((end.line, end.column, end.offset), (2, 1, 10));
        let name = tree.root.leaves()[1].location;
        assert_eq!((name.line, name.column), (1, 8));
    }
}

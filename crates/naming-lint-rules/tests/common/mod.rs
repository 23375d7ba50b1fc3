//! SystemVerilog-shaped syntax trees for rule tests.
//!
//! Each builder lays the tokens out in source order, so every leaf carries a
//! real location inside the synthesised source text.

#![allow(dead_code)]

use naming_lint_core::{NodeKind, SyntaxNode, SyntaxTree, SyntaxTreeBuilder, TokenKind};

/// One parameter declaration statement.
#[derive(Debug, Clone)]
pub struct Param {
    keyword: Option<TokenKind>,
    data_type: Option<&'static str>,
    names: Vec<&'static str>,
    type_param: bool,
    with_default: bool,
}

impl Param {
    /// `parameter [type] NAME = 1, ...`
    pub fn parameter(names: &[&'static str]) -> Self {
        Self {
            keyword: Some(TokenKind::Parameter),
            data_type: None,
            names: names.to_vec(),
            type_param: false,
            with_default: true,
        }
    }

    /// `localparam [type] NAME = 1, ...`
    pub fn localparam(names: &[&'static str]) -> Self {
        Self {
            keyword: Some(TokenKind::Localparam),
            ..Self::parameter(names)
        }
    }

    /// `<type> NAME = 1` inside `#( ... )`, with no keyword.
    pub fn implicit(data_type: &'static str, name: &'static str) -> Self {
        Self {
            keyword: None,
            data_type: Some(data_type),
            ..Self::parameter(&[name])
        }
    }

    /// `parameter type NAME = int`
    pub fn type_parameter(name: &'static str) -> Self {
        Self {
            type_param: true,
            ..Self::parameter(&[name])
        }
    }

    /// `localparam type NAME = int`
    pub fn local_type_parameter(name: &'static str) -> Self {
        Self {
            type_param: true,
            ..Self::localparam(&[name])
        }
    }

    /// Sets the data type keyword (`int`, `logic`, `bit`).
    pub fn typed(mut self, data_type: &'static str) -> Self {
        self.data_type = Some(data_type);
        self
    }

    /// Drops the `= <default>` part of every assignment.
    pub fn no_default(mut self) -> Self {
        self.with_default = false;
        self
    }
}

/// One ANSI port declaration.
#[derive(Debug, Clone)]
pub struct Port {
    direction: TokenKind,
    net: Option<&'static str>,
    data_type: Option<&'static str>,
    packed: Option<(&'static str, &'static str)>,
    name: &'static str,
}

impl Port {
    fn with_direction(direction: TokenKind, name: &'static str) -> Self {
        Self {
            direction,
            net: None,
            data_type: None,
            packed: None,
            name,
        }
    }

    /// `input NAME`
    pub fn input(name: &'static str) -> Self {
        Self::with_direction(TokenKind::Input, name)
    }

    /// `output NAME`
    pub fn output(name: &'static str) -> Self {
        Self::with_direction(TokenKind::Output, name)
    }

    /// `inout NAME`
    pub fn inout(name: &'static str) -> Self {
        Self::with_direction(TokenKind::Inout, name)
    }

    /// Adds a net or variable keyword (`wire`, `var`).
    pub fn net(mut self, keyword: &'static str) -> Self {
        self.net = Some(keyword);
        self
    }

    /// Adds a data type keyword (`logic`, `bit`).
    pub fn typed(mut self, keyword: &'static str) -> Self {
        self.data_type = Some(keyword);
        self
    }

    /// Adds a packed range `[msb:lsb]`.
    pub fn packed(mut self, msb: &'static str, lsb: &'static str) -> Self {
        self.packed = Some((msb, lsb));
        self
    }
}

fn keyword_kind(text: &str) -> TokenKind {
    match text {
        "int" => TokenKind::Int,
        "logic" => TokenKind::Logic,
        "bit" => TokenKind::Bit,
        "wire" => TokenKind::Wire,
        "var" => TokenKind::Var,
        "type" => TokenKind::Type,
        _ => TokenKind::SymbolIdentifier,
    }
}

fn keyword_text(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Parameter => "parameter",
        TokenKind::Localparam => "localparam",
        TokenKind::Input => "input",
        TokenKind::Output => "output",
        TokenKind::Inout => "inout",
        _ => "",
    }
}

/// Appends tokens, gluing the first one of a construct to whatever precedes it.
struct Writer {
    b: SyntaxTreeBuilder,
    glue_next: bool,
}

impl Writer {
    fn new(path: &str) -> Self {
        Self {
            b: SyntaxTreeBuilder::new(path),
            glue_next: false,
        }
    }

    fn tok(&mut self, kind: TokenKind, text: &str) -> SyntaxNode {
        if std::mem::take(&mut self.glue_next) {
            self.b.glued(kind, text)
        } else {
            self.b.token(kind, text)
        }
    }

    fn punct(&mut self, text: &str) -> SyntaxNode {
        self.glue_next = false;
        self.b.punct(text)
    }

    fn open(&mut self, text: &str) -> SyntaxNode {
        let node = self.tok(TokenKind::Punctuation, text);
        self.glue_next = true;
        node
    }

    fn number(&mut self, text: &str) -> SyntaxNode {
        SyntaxNode::node(
            NodeKind::Expression,
            vec![Some(self.tok(TokenKind::Number, text))],
        )
    }

    fn data_type(&mut self, keyword: Option<&str>, packed: Option<(&str, &str)>) -> SyntaxNode {
        let keyword = keyword.map(|k| self.tok(keyword_kind(k), k));
        let packed = packed.map(|(msb, lsb)| {
            let open = self.tok(TokenKind::Punctuation, "[");
            self.glue_next = true;
            let msb = self.number(msb);
            let colon = self.punct(":");
            self.glue_next = true;
            let lsb = self.number(lsb);
            let close = self.punct("]");
            SyntaxNode::node(
                NodeKind::PackedDimensions,
                vec![
                    Some(open),
                    Some(SyntaxNode::node(
                        NodeKind::DimensionRange,
                        vec![Some(msb), Some(colon), Some(lsb)],
                    )),
                    Some(close),
                ],
            )
        });
        SyntaxNode::node(NodeKind::DataType, vec![keyword, packed])
    }

    fn ident(&mut self, name: &str) -> SyntaxNode {
        self.tok(TokenKind::SymbolIdentifier, name)
    }

    fn param(&mut self, param: &Param, terminated: bool) -> SyntaxNode {
        let keyword = param.keyword.map(|k| self.tok(k, keyword_text(k)));

        let (data_type, list) = if param.type_param {
            let type_kw = self.tok(TokenKind::Type, "type");
            let mut assignments = Vec::new();
            for (i, name) in param.names.iter().enumerate() {
                if i > 0 {
                    assignments.push(Some(self.punct(",")));
                }
                let id = self.ident(name);
                let (eq, ty) = if param.with_default {
                    let eq = self.tok(TokenKind::Punctuation, "=");
                    (Some(eq), Some(self.data_type(Some("int"), None)))
                } else {
                    (None, None)
                };
                assignments.push(Some(SyntaxNode::node(
                    NodeKind::TypeAssignment,
                    vec![Some(id), eq, ty],
                )));
            }
            (
                Some(type_kw),
                SyntaxNode::node(NodeKind::TypeAssignmentList, assignments),
            )
        } else {
            let data_type = param.data_type.map(|t| self.data_type(Some(t), None));
            let mut assignments = Vec::new();
            for (i, name) in param.names.iter().enumerate() {
                if i > 0 {
                    assignments.push(Some(self.punct(",")));
                }
                let id = self.ident(name);
                let (eq, value) = if param.with_default {
                    let eq = self.tok(TokenKind::Punctuation, "=");
                    (Some(eq), Some(self.number("1")))
                } else {
                    (None, None)
                };
                assignments.push(Some(SyntaxNode::node(
                    NodeKind::ParamAssignment,
                    vec![Some(id), None, eq, value],
                )));
            }
            (
                data_type,
                SyntaxNode::node(NodeKind::ParamAssignmentList, assignments),
            )
        };

        let semicolon = terminated.then(|| self.punct(";"));
        SyntaxNode::node(
            NodeKind::ParamDeclaration,
            vec![keyword, data_type, Some(list), semicolon],
        )
    }

    fn port(&mut self, port: &Port) -> SyntaxNode {
        let direction = self.tok(port.direction, keyword_text(port.direction));
        let net = port.net.map(|n| self.tok(keyword_kind(n), n));
        let data_type = (port.data_type.is_some() || port.packed.is_some())
            .then(|| self.data_type(port.data_type, port.packed));
        let id = self.ident(port.name);
        SyntaxNode::node(
            NodeKind::PortDeclaration,
            vec![
                Some(direction),
                net,
                data_type,
                Some(SyntaxNode::node(NodeKind::UnqualifiedId, vec![Some(id)])),
                None,
            ],
        )
    }

    fn items(&mut self, params: &[Param]) -> SyntaxNode {
        let mut items = Vec::new();
        for param in params {
            self.b.newline();
            items.push(Some(self.param(param, true)));
        }
        SyntaxNode::node(NodeKind::ItemList, items)
    }

    fn module(
        mut self,
        name: &str,
        header_params: &[Param],
        ports: &[Port],
        body_params: &[Param],
    ) -> SyntaxTree {
        let mut header = vec![
            Some(self.tok(TokenKind::Module, "module")),
            Some(self.ident(name)),
        ];

        if header_params.is_empty() {
            header.push(None);
        } else {
            let mut list = vec![Some(self.tok(TokenKind::Punctuation, "#"))];
            self.glue_next = true;
            list.push(Some(self.open("(")));
            for (i, param) in header_params.iter().enumerate() {
                if i > 0 {
                    list.push(Some(self.punct(",")));
                }
                list.push(Some(self.param(param, false)));
            }
            list.push(Some(self.punct(")")));
            header.push(Some(SyntaxNode::node(NodeKind::ParamPortList, list)));
        }

        if ports.is_empty() {
            header.push(None);
        } else {
            let mut list = vec![Some(self.open("("))];
            for (i, port) in ports.iter().enumerate() {
                if i > 0 {
                    list.push(Some(self.punct(",")));
                }
                list.push(Some(self.port(port)));
            }
            list.push(Some(self.punct(")")));
            header.push(Some(SyntaxNode::node(NodeKind::PortDeclarationList, list)));
        }
        header.push(Some(self.punct(";")));

        let items = self.items(body_params);
        self.b.newline();
        let end = self.tok(TokenKind::Endmodule, "endmodule");

        let root = SyntaxNode::node(
            NodeKind::SourceText,
            vec![Some(SyntaxNode::node(
                NodeKind::ModuleDeclaration,
                vec![
                    Some(SyntaxNode::node(NodeKind::ModuleHeader, header)),
                    Some(items),
                    Some(end),
                ],
            ))],
        );
        self.b.finish(root)
    }

    fn container(
        mut self,
        kind: NodeKind,
        open: (TokenKind, &str),
        close: (TokenKind, &str),
        name: &str,
        params: &[Param],
    ) -> SyntaxTree {
        let keyword = self.tok(open.0, open.1);
        let id = self.ident(name);
        let semicolon = self.punct(";");
        let items = self.items(params);
        self.b.newline();
        let end = self.tok(close.0, close.1);
        let root = SyntaxNode::node(
            NodeKind::SourceText,
            vec![Some(SyntaxNode::node(
                kind,
                vec![
                    Some(keyword),
                    Some(id),
                    Some(semicolon),
                    Some(items),
                    Some(end),
                ],
            ))],
        );
        self.b.finish(root)
    }
}

/// `module NAME #(params) (ports); body endmodule` stored under `t.sv`.
pub fn module(header_params: &[Param], ports: &[Port], body_params: &[Param]) -> SyntaxTree {
    Writer::new("t.sv").module("foo", header_params, ports, body_params)
}

/// Module whose body holds `params`.
pub fn module_with_params(params: &[Param]) -> SyntaxTree {
    module(&[], &[], params)
}

/// Module whose header parameter port list holds `params`.
pub fn module_with_header_params(params: &[Param]) -> SyntaxTree {
    module(params, &[], &[])
}

/// Module with an ANSI port list.
pub fn module_with_ports(ports: &[Port]) -> SyntaxTree {
    module(&[], ports, &[])
}

/// `package NAME; params endpackage`
pub fn package_with_params(params: &[Param]) -> SyntaxTree {
    Writer::new("pkg.sv").container(
        NodeKind::PackageDeclaration,
        (TokenKind::Package, "package"),
        (TokenKind::Endpackage, "endpackage"),
        "foo",
        params,
    )
}

/// `class NAME; params endclass`
pub fn class_with_params(params: &[Param]) -> SyntaxTree {
    Writer::new("cls.sv").container(
        NodeKind::ClassDeclaration,
        (TokenKind::Class, "class"),
        (TokenKind::Endclass, "endclass"),
        "foo",
        params,
    )
}

/// Texts of the flagged identifiers, in report order.
pub fn flagged(result: &naming_lint_core::LintResult) -> Vec<&str> {
    result
        .violations
        .iter()
        .map(|v| v.token.text.as_str())
        .collect()
}

//! Builder helpers for node construction.
//!
//! Producers and tests build trees with these instead of spelling out
//! `Node { position, kind }` by hand. Every builder places the node at
//! [`Position::START`]; chain [`Node::at`] to set the real location.

use crate::node::{Binary, Function, Node, NodeKind};
use jsexp_common::Position;

impl Node {
    /// Create a node of `kind` at the start of the source.
    #[must_use]
    pub const fn leaf(kind: NodeKind) -> Self {
        Self::new(Position::START, kind)
    }

    /// Move the node to `line:column`.
    #[must_use]
    pub const fn at(mut self, line: u32, column: u32) -> Self {
        self.position = Position::new(line, column);
        self
    }

    /// Create a numeric literal
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::leaf(NodeKind::Number(value))
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::leaf(NodeKind::String(value.into()))
    }

    /// Create a regular expression literal from its source text
    pub fn regexp(source: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Regexp(source.into()))
    }

    /// Create an identifier reference
    pub fn name(name: impl Into<String>) -> Self {
        Self::leaf(NodeKind::Name(name.into()))
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::leaf(if value { NodeKind::True } else { NodeKind::False })
    }

    #[must_use]
    pub const fn null() -> Self {
        Self::leaf(NodeKind::Null)
    }

    #[must_use]
    pub const fn this() -> Self {
        Self::leaf(NodeKind::This)
    }

    /// Create an empty statement
    #[must_use]
    pub const fn semicolon() -> Self {
        Self::leaf(NodeKind::Semicolon)
    }

    /// Create a unary node, e.g. `Node::unary(NodeKind::Not, operand)`
    pub fn unary(kind: fn(Box<Node>) -> NodeKind, operand: Node) -> Self {
        Self::leaf(kind(Box::new(operand)))
    }

    /// Create a binary node, e.g. `Node::binary(NodeKind::OpAdd, left, right)`
    pub fn binary(kind: fn(Binary) -> NodeKind, left: Node, right: Node) -> Self {
        Self::leaf(kind(Binary {
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    /// Create a sequence node, e.g. `Node::sequence(NodeKind::Comma, items)`
    pub fn sequence(kind: fn(Vec<Node>) -> NodeKind, elements: Vec<Node>) -> Self {
        Self::leaf(kind(elements))
    }

    /// Create a program root
    pub fn program(statements: Vec<Node>) -> Self {
        Self::sequence(NodeKind::SourceElements, statements)
    }

    /// Create a function expression; `name` is `None` for anonymous functions
    pub fn function(name: Option<&str>, arguments: &[&str], body: Node) -> Self {
        Self::leaf(NodeKind::Function(Function {
            name: name.map(str::to_string),
            arguments: arguments.iter().map(|arg| (*arg).to_string()).collect(),
            body: Box::new(body),
        }))
    }

    /// Wrap in parentheses
    #[must_use]
    pub fn paren(self) -> Self {
        Self::unary(NodeKind::Parenthesis, self)
    }
}

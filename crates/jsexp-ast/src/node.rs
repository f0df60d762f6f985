//! Node model for parsed JavaScript programs.
//!
//! A program is a tree of [`Node`]s. Each node carries its source
//! [`Position`] and a [`NodeKind`], whose variant identifies the construct and
//! fixes the shape of its payload. The variant is the node's identity: two
//! kinds with the same payload shape (for instance `Number` and `Regexp`, or
//! `Not` and `Parenthesis`) are still distinct and transforms tell them apart
//! by variant, never by inspecting the payload.
//!
//! Nodes are plain values. They own their children, are never mutated after
//! the producer builds them, and have no behavior beyond
//! [`Node::accept`](crate::Transform).

use jsexp_common::Position;
use jsexp_common::limits::{STACK_GROW_SIZE, STACK_RED_ZONE};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// A single construct in a parsed program.
///
/// `Clone`, `PartialEq` and `Serialize` pass through here once per level, so
/// they are written out to grow the stack on deep trees.
#[derive(Debug, Deserialize)]
pub struct Node {
    pub position: Position,
    pub kind: NodeKind,
}

/// The two operands of a binary node, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Binary {
    pub left: Box<Node>,
    pub right: Box<Node>,
}

/// Payload of a function expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    /// `None` for anonymous function expressions.
    pub name: Option<String>,
    /// Parameter names, as written.
    pub arguments: Vec<String>,
    pub body: Box<Node>,
}

/// Payload shape shared by a group of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Scalar value or nothing: literals, identifiers, markers.
    Literal,
    /// Exactly one child.
    Unary,
    /// Exactly two children, `left` then `right`.
    Binary,
    /// Ordered list of children.
    Sequence,
    /// Name, parameter names and a body.
    Function,
}

/// Concrete node kind and its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeKind {
    // =========================================================================
    // Literals
    // =========================================================================
    /// Numeric literal: `10`, `3.5`
    Number(f64),
    /// String literal contents, unquoted.
    String(String),
    /// Regular expression literal source: `/ab+c/gi`
    Regexp(String),
    /// Identifier reference: `i`
    Name(String),
    True,
    False,
    Null,
    This,
    /// Empty statement: `;`
    Semicolon,

    // =========================================================================
    // Unary
    // =========================================================================
    Throw(Box<Node>),
    Delete(Box<Node>),
    Void(Box<Node>),
    Typeof(Box<Node>),
    /// `!x`
    Not(Box<Node>),
    /// `~x`
    BitwiseNot(Box<Node>),
    /// `-x`
    UnaryNegative(Box<Node>),
    /// `+x`
    UnaryPositive(Box<Node>),
    /// `++x`
    PrefixIncrement(Box<Node>),
    /// `x++`
    PostfixIncrement(Box<Node>),
    /// `--x`
    PrefixDecrement(Box<Node>),
    /// `x--`
    PostfixDecrement(Box<Node>),
    /// `(x)`. Kept in the tree; parenthesization is not normalized away.
    Parenthesis(Box<Node>),

    // =========================================================================
    // Binary: assignment
    // =========================================================================
    /// `a = b`
    OpEqual(Binary),
    /// `a *= b`
    OpMultiplyEqual(Binary),
    /// `a /= b`
    OpDivideEqual(Binary),
    /// `a += b`
    OpAddEqual(Binary),
    /// `a -= b`
    OpSubtractEqual(Binary),
    /// `a <<= b`
    OpLShiftEqual(Binary),
    /// `a >>= b`
    OpRShiftEqual(Binary),
    /// `a >>>= b`
    OpURShiftEqual(Binary),
    /// `a &= b`
    OpBitAndEqual(Binary),
    /// `a ^= b`
    OpBitXorEqual(Binary),
    /// `a |= b`
    OpBitOrEqual(Binary),
    /// `a %= b`
    OpModEqual(Binary),
    /// Assignment in initializer position, e.g. the `x = 1` of `var x = 1`.
    AssignExpr(Binary),

    // =========================================================================
    // Binary: arithmetic, bitwise, shift
    // =========================================================================
    OpMultiply(Binary),
    OpDivide(Binary),
    OpAdd(Binary),
    OpSubtract(Binary),
    OpMod(Binary),
    OpBitAnd(Binary),
    OpLShift(Binary),
    OpRShift(Binary),
    OpURShift(Binary),
    OpBitXor(Binary),
    OpBitOr(Binary),

    // =========================================================================
    // Binary: comparison and logical
    // =========================================================================
    /// `a == b`
    Equal(Binary),
    /// `a != b`
    NotEqual(Binary),
    /// `a === b`
    StrictEqual(Binary),
    /// `a || b`
    Or(Binary),
    /// `a && b`
    And(Binary),

    // =========================================================================
    // Binary: member access, object properties, labels
    // =========================================================================
    /// `a.b`
    DotAccessor(Binary),
    /// `a[b]`
    BracketAccess(Binary),
    /// `key: value` inside an object literal.
    Property(Binary),
    /// `get key() {}` inside an object literal.
    GetterProperty(Binary),
    /// `set key(v) {}` inside an object literal.
    SetterProperty(Binary),
    /// `label: statement`
    Label(Binary),

    // =========================================================================
    // Sequences
    // =========================================================================
    /// Program or function body statements.
    SourceElements(Vec<Node>),
    /// `var a, b = 1`
    VarStatement(Vec<Node>),
    /// `a, b, c`
    Comma(Vec<Node>),
    ObjectLiteral(Vec<Node>),
    ArrayLiteral(Vec<Node>),
    /// `new F(args)`: constructor followed by arguments.
    New(Vec<Node>),
    /// `f(args)`: callee followed by arguments.
    FunctionCall(Vec<Node>),

    // =========================================================================
    // Functions
    // =========================================================================
    Function(Function),
}

/// Every kind name with its category, in declaration order.
///
/// This is the registry the JSON loader checks incoming trees against; a kind
/// missing here cannot be loaded.
pub const KIND_TABLE: &[(&str, Category)] = &[
    ("Number", Category::Literal),
    ("String", Category::Literal),
    ("Regexp", Category::Literal),
    ("Name", Category::Literal),
    ("True", Category::Literal),
    ("False", Category::Literal),
    ("Null", Category::Literal),
    ("This", Category::Literal),
    ("Semicolon", Category::Literal),
    ("Throw", Category::Unary),
    ("Delete", Category::Unary),
    ("Void", Category::Unary),
    ("Typeof", Category::Unary),
    ("Not", Category::Unary),
    ("BitwiseNot", Category::Unary),
    ("UnaryNegative", Category::Unary),
    ("UnaryPositive", Category::Unary),
    ("PrefixIncrement", Category::Unary),
    ("PostfixIncrement", Category::Unary),
    ("PrefixDecrement", Category::Unary),
    ("PostfixDecrement", Category::Unary),
    ("Parenthesis", Category::Unary),
    ("OpEqual", Category::Binary),
    ("OpMultiplyEqual", Category::Binary),
    ("OpDivideEqual", Category::Binary),
    ("OpAddEqual", Category::Binary),
    ("OpSubtractEqual", Category::Binary),
    ("OpLShiftEqual", Category::Binary),
    ("OpRShiftEqual", Category::Binary),
    ("OpURShiftEqual", Category::Binary),
    ("OpBitAndEqual", Category::Binary),
    ("OpBitXorEqual", Category::Binary),
    ("OpBitOrEqual", Category::Binary),
    ("OpModEqual", Category::Binary),
    ("AssignExpr", Category::Binary),
    ("OpMultiply", Category::Binary),
    ("OpDivide", Category::Binary),
    ("OpAdd", Category::Binary),
    ("OpSubtract", Category::Binary),
    ("OpMod", Category::Binary),
    ("OpBitAnd", Category::Binary),
    ("OpLShift", Category::Binary),
    ("OpRShift", Category::Binary),
    ("OpURShift", Category::Binary),
    ("OpBitXor", Category::Binary),
    ("OpBitOr", Category::Binary),
    ("Equal", Category::Binary),
    ("NotEqual", Category::Binary),
    ("StrictEqual", Category::Binary),
    ("Or", Category::Binary),
    ("And", Category::Binary),
    ("DotAccessor", Category::Binary),
    ("BracketAccess", Category::Binary),
    ("Property", Category::Binary),
    ("GetterProperty", Category::Binary),
    ("SetterProperty", Category::Binary),
    ("Label", Category::Binary),
    ("SourceElements", Category::Sequence),
    ("VarStatement", Category::Sequence),
    ("Comma", Category::Sequence),
    ("ObjectLiteral", Category::Sequence),
    ("ArrayLiteral", Category::Sequence),
    ("New", Category::Sequence),
    ("FunctionCall", Category::Sequence),
    ("Function", Category::Function),
];

impl NodeKind {
    /// Look up the category registered for a kind name.
    #[must_use]
    pub fn category_of(name: &str) -> Option<Category> {
        KIND_TABLE
            .iter()
            .find(|(kind, _)| *kind == name)
            .map(|&(_, category)| category)
    }

    /// The kind's name, matching its variant and its JSON tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Regexp(_) => "Regexp",
            Self::Name(_) => "Name",
            Self::True => "True",
            Self::False => "False",
            Self::Null => "Null",
            Self::This => "This",
            Self::Semicolon => "Semicolon",
            Self::Throw(_) => "Throw",
            Self::Delete(_) => "Delete",
            Self::Void(_) => "Void",
            Self::Typeof(_) => "Typeof",
            Self::Not(_) => "Not",
            Self::BitwiseNot(_) => "BitwiseNot",
            Self::UnaryNegative(_) => "UnaryNegative",
            Self::UnaryPositive(_) => "UnaryPositive",
            Self::PrefixIncrement(_) => "PrefixIncrement",
            Self::PostfixIncrement(_) => "PostfixIncrement",
            Self::PrefixDecrement(_) => "PrefixDecrement",
            Self::PostfixDecrement(_) => "PostfixDecrement",
            Self::Parenthesis(_) => "Parenthesis",
            Self::OpEqual(_) => "OpEqual",
            Self::OpMultiplyEqual(_) => "OpMultiplyEqual",
            Self::OpDivideEqual(_) => "OpDivideEqual",
            Self::OpAddEqual(_) => "OpAddEqual",
            Self::OpSubtractEqual(_) => "OpSubtractEqual",
            Self::OpLShiftEqual(_) => "OpLShiftEqual",
            Self::OpRShiftEqual(_) => "OpRShiftEqual",
            Self::OpURShiftEqual(_) => "OpURShiftEqual",
            Self::OpBitAndEqual(_) => "OpBitAndEqual",
            Self::OpBitXorEqual(_) => "OpBitXorEqual",
            Self::OpBitOrEqual(_) => "OpBitOrEqual",
            Self::OpModEqual(_) => "OpModEqual",
            Self::AssignExpr(_) => "AssignExpr",
            Self::OpMultiply(_) => "OpMultiply",
            Self::OpDivide(_) => "OpDivide",
            Self::OpAdd(_) => "OpAdd",
            Self::OpSubtract(_) => "OpSubtract",
            Self::OpMod(_) => "OpMod",
            Self::OpBitAnd(_) => "OpBitAnd",
            Self::OpLShift(_) => "OpLShift",
            Self::OpRShift(_) => "OpRShift",
            Self::OpURShift(_) => "OpURShift",
            Self::OpBitXor(_) => "OpBitXor",
            Self::OpBitOr(_) => "OpBitOr",
            Self::Equal(_) => "Equal",
            Self::NotEqual(_) => "NotEqual",
            Self::StrictEqual(_) => "StrictEqual",
            Self::Or(_) => "Or",
            Self::And(_) => "And",
            Self::DotAccessor(_) => "DotAccessor",
            Self::BracketAccess(_) => "BracketAccess",
            Self::Property(_) => "Property",
            Self::GetterProperty(_) => "GetterProperty",
            Self::SetterProperty(_) => "SetterProperty",
            Self::Label(_) => "Label",
            Self::SourceElements(_) => "SourceElements",
            Self::VarStatement(_) => "VarStatement",
            Self::Comma(_) => "Comma",
            Self::ObjectLiteral(_) => "ObjectLiteral",
            Self::ArrayLiteral(_) => "ArrayLiteral",
            Self::New(_) => "New",
            Self::FunctionCall(_) => "FunctionCall",
            Self::Function(_) => "Function",
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Number(_)
            | Self::String(_)
            | Self::Regexp(_)
            | Self::Name(_)
            | Self::True
            | Self::False
            | Self::Null
            | Self::This
            | Self::Semicolon => Category::Literal,
            Self::Throw(_)
            | Self::Delete(_)
            | Self::Void(_)
            | Self::Typeof(_)
            | Self::Not(_)
            | Self::BitwiseNot(_)
            | Self::UnaryNegative(_)
            | Self::UnaryPositive(_)
            | Self::PrefixIncrement(_)
            | Self::PostfixIncrement(_)
            | Self::PrefixDecrement(_)
            | Self::PostfixDecrement(_)
            | Self::Parenthesis(_) => Category::Unary,
            Self::OpEqual(_)
            | Self::OpMultiplyEqual(_)
            | Self::OpDivideEqual(_)
            | Self::OpAddEqual(_)
            | Self::OpSubtractEqual(_)
            | Self::OpLShiftEqual(_)
            | Self::OpRShiftEqual(_)
            | Self::OpURShiftEqual(_)
            | Self::OpBitAndEqual(_)
            | Self::OpBitXorEqual(_)
            | Self::OpBitOrEqual(_)
            | Self::OpModEqual(_)
            | Self::AssignExpr(_)
            | Self::OpMultiply(_)
            | Self::OpDivide(_)
            | Self::OpAdd(_)
            | Self::OpSubtract(_)
            | Self::OpMod(_)
            | Self::OpBitAnd(_)
            | Self::OpLShift(_)
            | Self::OpRShift(_)
            | Self::OpURShift(_)
            | Self::OpBitXor(_)
            | Self::OpBitOr(_)
            | Self::Equal(_)
            | Self::NotEqual(_)
            | Self::StrictEqual(_)
            | Self::Or(_)
            | Self::And(_)
            | Self::DotAccessor(_)
            | Self::BracketAccess(_)
            | Self::Property(_)
            | Self::GetterProperty(_)
            | Self::SetterProperty(_)
            | Self::Label(_) => Category::Binary,
            Self::SourceElements(_)
            | Self::VarStatement(_)
            | Self::Comma(_)
            | Self::ObjectLiteral(_)
            | Self::ArrayLiteral(_)
            | Self::New(_)
            | Self::FunctionCall(_) => Category::Sequence,
            Self::Function(_) => Category::Function,
        }
    }

    /// The single child of a unary kind.
    #[must_use]
    pub fn operand(&self) -> Option<&Node> {
        match self {
            Self::Throw(child)
            | Self::Delete(child)
            | Self::Void(child)
            | Self::Typeof(child)
            | Self::Not(child)
            | Self::BitwiseNot(child)
            | Self::UnaryNegative(child)
            | Self::UnaryPositive(child)
            | Self::PrefixIncrement(child)
            | Self::PostfixIncrement(child)
            | Self::PrefixDecrement(child)
            | Self::PostfixDecrement(child)
            | Self::Parenthesis(child) => Some(child.as_ref()),
            _ => None,
        }
    }

    /// The operands of a binary kind.
    #[must_use]
    pub const fn operands(&self) -> Option<&Binary> {
        match self {
            Self::OpEqual(b)
            | Self::OpMultiplyEqual(b)
            | Self::OpDivideEqual(b)
            | Self::OpAddEqual(b)
            | Self::OpSubtractEqual(b)
            | Self::OpLShiftEqual(b)
            | Self::OpRShiftEqual(b)
            | Self::OpURShiftEqual(b)
            | Self::OpBitAndEqual(b)
            | Self::OpBitXorEqual(b)
            | Self::OpBitOrEqual(b)
            | Self::OpModEqual(b)
            | Self::AssignExpr(b)
            | Self::OpMultiply(b)
            | Self::OpDivide(b)
            | Self::OpAdd(b)
            | Self::OpSubtract(b)
            | Self::OpMod(b)
            | Self::OpBitAnd(b)
            | Self::OpLShift(b)
            | Self::OpRShift(b)
            | Self::OpURShift(b)
            | Self::OpBitXor(b)
            | Self::OpBitOr(b)
            | Self::Equal(b)
            | Self::NotEqual(b)
            | Self::StrictEqual(b)
            | Self::Or(b)
            | Self::And(b)
            | Self::DotAccessor(b)
            | Self::BracketAccess(b)
            | Self::Property(b)
            | Self::GetterProperty(b)
            | Self::SetterProperty(b)
            | Self::Label(b) => Some(b),
            _ => None,
        }
    }

    /// The children of a sequence kind.
    #[must_use]
    pub fn elements(&self) -> Option<&[Node]> {
        match self {
            Self::SourceElements(nodes)
            | Self::VarStatement(nodes)
            | Self::Comma(nodes)
            | Self::ObjectLiteral(nodes)
            | Self::ArrayLiteral(nodes)
            | Self::New(nodes)
            | Self::FunctionCall(nodes) => Some(nodes),
            _ => None,
        }
    }
}

impl Node {
    #[must_use]
    pub const fn new(position: Position, kind: NodeKind) -> Self {
        Self { position, kind }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.kind.category()
    }

    /// Direct children in source order.
    #[must_use]
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Function(func) => vec![func.body.as_ref()],
            kind => {
                if let Some(child) = kind.operand() {
                    vec![child]
                } else if let Some(binary) = kind.operands() {
                    vec![binary.left.as_ref(), binary.right.as_ref()]
                } else if let Some(elements) = kind.elements() {
                    elements.iter().collect()
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Maximum nesting depth of the tree rooted here; a leaf has depth 1.
    ///
    /// Walks with an explicit stack, so it is safe on trees too deep to
    /// convert recursively.
    #[must_use]
    pub fn depth(&self) -> u32 {
        let mut max = 0;
        let mut stack = vec![(self, 1u32)];
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.children().into_iter().map(|child| (child, level + 1)));
        }
        max
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || Self {
            position: self.position,
            kind: self.kind.clone(),
        })
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            self.position == other.position && self.kind == other.kind
        })
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            let mut node = serializer.serialize_struct("Node", 2)?;
            node.serialize_field("position", &self.position)?;
            node.serialize_field("kind", &self.kind)?;
            node.end()
        })
    }
}

#[cfg(test)]
#[path = "../tests/node_tests.rs"]
mod tests;

//! Node tree to S-expression conversion.
//!
//! `SexpVisitor` walks a tree depth-first, converting children left to right
//! before assembling the parent's list. Dispatch is a single exhaustive
//! `match` over [`NodeKind`], so adding a kind to the node model is a compile
//! error here until it is given a tag.
//!
//! Output shapes by category:
//! - literal:  `(tag value)` or `(tag)` for markers
//! - unary:    `(tag child)`
//! - binary:   `(tag left right)`
//! - sequence: `(tag (children...))`, except the program root which is the
//!   bare list of its statements
//! - function: `(func_expr name-or-nil ("arg"...) body)`

use crate::sexp::Sexp;
use crate::tag::Tag;
use jsexp_ast::{Binary, Function, Node, NodeKind, Position, Transform};
use jsexp_common::limits::{MAX_SEXP_DEPTH, STACK_GROW_SIZE, STACK_RED_ZONE};
use thiserror::Error;
use tracing::{trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SexpOptions {
    /// Deepest nesting converted before giving up; a leaf has depth 1.
    pub max_depth: u32,
}

impl Default for SexpOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEXP_DEPTH,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SexpError {
    #[error("tree nesting exceeds the limit of {limit} levels at {position}")]
    DepthExceeded { limit: u32, position: Position },
}

/// Converts node trees into [`Sexp`] values.
///
/// A visitor can be reused; each [`convert`](Self::convert) call starts from
/// depth zero.
#[derive(Debug, Default)]
pub struct SexpVisitor {
    options: SexpOptions,
    depth: u32,
}

impl SexpVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_options(options: SexpOptions) -> Self {
        Self { options, depth: 0 }
    }

    #[must_use]
    pub const fn options(&self) -> SexpOptions {
        self.options
    }

    #[tracing::instrument(level = "debug", skip_all, fields(kind = root.kind.name()))]
    pub fn convert(&mut self, root: &Node) -> Result<Sexp, SexpError> {
        self.depth = 0;
        root.accept(self)
    }

    fn visit(&mut self, node: &Node) -> Result<Sexp, SexpError> {
        if self.depth >= self.options.max_depth {
            warn!(
                limit = self.options.max_depth,
                position = %node.position,
                "S-expression conversion exceeded nesting limit"
            );
            return Err(SexpError::DepthExceeded {
                limit: self.options.max_depth,
                position: node.position,
            });
        }

        self.depth += 1;
        let result = stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || self.dispatch(node));
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, node: &Node) -> Result<Sexp, SexpError> {
        trace!(kind = node.kind.name(), depth = self.depth, "visit");
        Ok(match &node.kind {
            // Literals
            NodeKind::Number(value) => Sexp::tagged(Tag::Lit, vec![Sexp::num(*value)]),
            NodeKind::Regexp(source) => Sexp::tagged(Tag::Lit, vec![Sexp::str(source.as_str())]),
            NodeKind::String(value) => Sexp::tagged(Tag::Str, vec![Sexp::str(value.as_str())]),
            NodeKind::Name(name) => Sexp::tagged(Tag::Name, vec![Sexp::str(name.as_str())]),
            NodeKind::True => Sexp::tagged(Tag::True, Vec::new()),
            NodeKind::False => Sexp::tagged(Tag::False, Vec::new()),
            NodeKind::Null => Sexp::tagged(Tag::Nil, Vec::new()),
            NodeKind::This => Sexp::tagged(Tag::This, Vec::new()),
            NodeKind::Semicolon => Sexp::tagged(Tag::Semicolon, Vec::new()),

            // Unary
            NodeKind::Throw(child) => self.unary(Tag::Throw, child)?,
            NodeKind::Delete(child) => self.unary(Tag::Delete, child)?,
            NodeKind::Void(child) => self.unary(Tag::Void, child)?,
            NodeKind::Typeof(child) => self.unary(Tag::Typeof, child)?,
            NodeKind::Not(child) => self.unary(Tag::Not, child)?,
            NodeKind::BitwiseNot(child) => self.unary(Tag::BitwiseNot, child)?,
            NodeKind::UnaryNegative(child) => self.unary(Tag::UNeg, child)?,
            NodeKind::UnaryPositive(child) => self.unary(Tag::UPos, child)?,
            NodeKind::PrefixIncrement(child) => self.unary(Tag::PrefixInc, child)?,
            NodeKind::PostfixIncrement(child) => self.unary(Tag::PostfixInc, child)?,
            NodeKind::PrefixDecrement(child) => self.unary(Tag::PrefixDec, child)?,
            NodeKind::PostfixDecrement(child) => self.unary(Tag::PostfixDec, child)?,
            NodeKind::Parenthesis(child) => self.unary(Tag::Paren, child)?,

            // Binary: assignment
            NodeKind::OpEqual(b) => self.binary(Tag::OpEqual, b)?,
            NodeKind::OpMultiplyEqual(b) => self.binary(Tag::OpMultiplyEqual, b)?,
            NodeKind::OpDivideEqual(b) => self.binary(Tag::OpDivideEqual, b)?,
            NodeKind::OpAddEqual(b) => self.binary(Tag::OpAddEqual, b)?,
            NodeKind::OpSubtractEqual(b) => self.binary(Tag::OpSubtractEqual, b)?,
            NodeKind::OpLShiftEqual(b) => self.binary(Tag::OpLShiftEqual, b)?,
            NodeKind::OpRShiftEqual(b) => self.binary(Tag::OpRShiftEqual, b)?,
            NodeKind::OpURShiftEqual(b) => self.binary(Tag::OpURShiftEqual, b)?,
            NodeKind::OpBitAndEqual(b) => self.binary(Tag::OpBitAndEqual, b)?,
            NodeKind::OpBitXorEqual(b) => self.binary(Tag::OpBitXorEqual, b)?,
            NodeKind::OpBitOrEqual(b) => self.binary(Tag::OpBitOrEqual, b)?,
            NodeKind::OpModEqual(b) => self.binary(Tag::OpModEqual, b)?,
            NodeKind::AssignExpr(b) => self.binary(Tag::Assign, b)?,

            // Binary: arithmetic, bitwise, shift
            NodeKind::OpMultiply(b) => self.binary(Tag::OpMultiply, b)?,
            NodeKind::OpDivide(b) => self.binary(Tag::OpDivide, b)?,
            NodeKind::OpAdd(b) => self.binary(Tag::OpAdd, b)?,
            NodeKind::OpSubtract(b) => self.binary(Tag::OpSubtract, b)?,
            NodeKind::OpMod(b) => self.binary(Tag::OpMod, b)?,
            NodeKind::OpBitAnd(b) => self.binary(Tag::OpBitAnd, b)?,
            NodeKind::OpLShift(b) => self.binary(Tag::OpLShift, b)?,
            NodeKind::OpRShift(b) => self.binary(Tag::OpRShift, b)?,
            NodeKind::OpURShift(b) => self.binary(Tag::OpURShift, b)?,
            NodeKind::OpBitXor(b) => self.binary(Tag::OpBitXor, b)?,
            NodeKind::OpBitOr(b) => self.binary(Tag::OpBitOr, b)?,

            // Binary: comparison and logical
            NodeKind::Equal(b) => self.binary(Tag::Equal, b)?,
            NodeKind::NotEqual(b) => self.binary(Tag::NotEqual, b)?,
            NodeKind::StrictEqual(b) => self.binary(Tag::StrictEqual, b)?,
            NodeKind::Or(b) => self.binary(Tag::Or, b)?,
            NodeKind::And(b) => self.binary(Tag::And, b)?,

            // Binary: member access, object properties, labels
            NodeKind::DotAccessor(b) => self.binary(Tag::DotAccessor, b)?,
            NodeKind::BracketAccess(b) => self.binary(Tag::BracketAccess, b)?,
            NodeKind::Property(b) => self.binary(Tag::Property, b)?,
            NodeKind::GetterProperty(b) => self.binary(Tag::Getter, b)?,
            NodeKind::SetterProperty(b) => self.binary(Tag::Setter, b)?,
            NodeKind::Label(b) => self.binary(Tag::Label, b)?,

            // Sequences
            NodeKind::SourceElements(nodes) => self.elements(nodes)?,
            NodeKind::VarStatement(nodes) => self.sequence(Tag::Var, nodes)?,
            NodeKind::Comma(nodes) => self.sequence(Tag::Comma, nodes)?,
            NodeKind::ObjectLiteral(nodes) => self.sequence(Tag::Object, nodes)?,
            NodeKind::ArrayLiteral(nodes) => self.sequence(Tag::Array, nodes)?,
            NodeKind::New(nodes) => self.sequence(Tag::New, nodes)?,
            NodeKind::FunctionCall(nodes) => self.sequence(Tag::FunctionCall, nodes)?,

            NodeKind::Function(func) => self.function(func)?,
        })
    }

    fn unary(&mut self, tag: Tag, child: &Node) -> Result<Sexp, SexpError> {
        Ok(Sexp::tagged(tag, vec![child.accept(self)?]))
    }

    fn binary(&mut self, tag: Tag, operands: &Binary) -> Result<Sexp, SexpError> {
        let left = operands.left.accept(self)?;
        let right = operands.right.accept(self)?;
        Ok(Sexp::tagged(tag, vec![left, right]))
    }

    fn elements(&mut self, nodes: &[Node]) -> Result<Sexp, SexpError> {
        nodes
            .iter()
            .map(|node| node.accept(self))
            .collect::<Result<Vec<_>, _>>()
            .map(Sexp::List)
    }

    fn sequence(&mut self, tag: Tag, nodes: &[Node]) -> Result<Sexp, SexpError> {
        Ok(Sexp::tagged(tag, vec![self.elements(nodes)?]))
    }

    fn function(&mut self, func: &Function) -> Result<Sexp, SexpError> {
        let name = func.name.as_deref().map_or(Sexp::Nil, Sexp::str);
        let arguments = func.arguments.iter().map(|arg| Sexp::str(arg.as_str())).collect();
        let body = func.body.accept(self)?;
        Ok(Sexp::tagged(Tag::FuncExpr, vec![name, Sexp::List(arguments), body]))
    }
}

impl Transform for SexpVisitor {
    type Output = Result<Sexp, SexpError>;

    fn transform(&mut self, node: &Node) -> Self::Output {
        self.visit(node)
    }
}

/// Convert `root` with default options.
pub fn to_sexp(root: &Node) -> Result<Sexp, SexpError> {
    SexpVisitor::new().convert(root)
}

/// Method-call form of [`to_sexp`]: `node.to_sexp()`.
pub trait ToSexp {
    fn to_sexp(&self) -> Result<Sexp, SexpError>;
}

impl ToSexp for Node {
    fn to_sexp(&self) -> Result<Sexp, SexpError> {
        to_sexp(self)
    }
}

#[cfg(test)]
#[path = "../tests/visitor_tests.rs"]
mod tests;

//! Symbols that head each tagged list.

use std::fmt;

/// Symbol at the head of a converted node.
///
/// Several node kinds share a tag: `Number` and `Regexp` both become `lit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    // Literals
    Lit,
    Str,
    Name,
    Nil,
    True,
    False,
    This,
    Semicolon,

    // Unary
    Throw,
    Delete,
    Void,
    Typeof,
    PrefixDec,
    PostfixDec,
    PrefixInc,
    PostfixInc,
    Paren,
    UNeg,
    UPos,
    BitwiseNot,
    Not,

    // Binary
    OpEqual,
    OpMultiplyEqual,
    OpDivideEqual,
    OpAddEqual,
    OpSubtractEqual,
    OpLShiftEqual,
    OpRShiftEqual,
    OpURShiftEqual,
    OpBitAndEqual,
    OpBitXorEqual,
    OpBitOrEqual,
    OpModEqual,
    OpMultiply,
    OpDivide,
    OpAdd,
    OpSubtract,
    OpMod,
    OpBitAnd,
    OpLShift,
    OpRShift,
    OpURShift,
    OpBitXor,
    OpBitOr,
    Assign,
    Equal,
    NotEqual,
    StrictEqual,
    Or,
    And,
    DotAccessor,
    BracketAccess,
    Property,
    Getter,
    Setter,
    Label,

    // Sequences
    Var,
    Comma,
    Object,
    Array,
    New,
    FunctionCall,

    // Functions
    FuncExpr,
}

impl Tag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lit => "lit",
            Self::Str => "str",
            Self::Name => "name",
            Self::Nil => "nil",
            Self::True => "true",
            Self::False => "false",
            Self::This => "this",
            Self::Semicolon => "semicolon",
            Self::Throw => "throw",
            Self::Delete => "delete",
            Self::Void => "void",
            Self::Typeof => "typeof",
            Self::PrefixDec => "prefix_dec",
            Self::PostfixDec => "postfix_dec",
            Self::PrefixInc => "prefix_inc",
            Self::PostfixInc => "postfix_inc",
            Self::Paren => "paren",
            Self::UNeg => "u_neg",
            Self::UPos => "u_pos",
            Self::BitwiseNot => "bitwise_not",
            Self::Not => "not",
            Self::OpEqual => "op_equal",
            Self::OpMultiplyEqual => "op_multiply_equal",
            Self::OpDivideEqual => "op_divide_equal",
            Self::OpAddEqual => "op_add_equal",
            Self::OpSubtractEqual => "op_subtract_equal",
            Self::OpLShiftEqual => "op_lshift_equal",
            Self::OpRShiftEqual => "op_rshift_equal",
            Self::OpURShiftEqual => "op_urshift_equal",
            Self::OpBitAndEqual => "op_bitand_equal",
            Self::OpBitXorEqual => "op_bitxor_equal",
            Self::OpBitOrEqual => "op_bitor_equal",
            Self::OpModEqual => "op_mod_equal",
            Self::OpMultiply => "op_multiply",
            Self::OpDivide => "op_divide",
            Self::OpAdd => "op_add",
            Self::OpSubtract => "op_subtract",
            Self::OpMod => "op_mod",
            Self::OpBitAnd => "op_bitand",
            Self::OpLShift => "op_lshift",
            Self::OpRShift => "op_rshift",
            Self::OpURShift => "op_urshift",
            Self::OpBitXor => "op_bitxor",
            Self::OpBitOr => "op_bitor",
            Self::Assign => "assign",
            Self::Equal => "equal",
            Self::NotEqual => "not_equal",
            Self::StrictEqual => "strict_equal",
            Self::Or => "or",
            Self::And => "and",
            Self::DotAccessor => "dot_accessor",
            Self::BracketAccess => "bracket_access",
            Self::Property => "property",
            Self::Getter => "getter",
            Self::Setter => "setter",
            Self::Label => "label",
            Self::Var => "var",
            Self::Comma => "comma",
            Self::Object => "object",
            Self::Array => "array",
            Self::New => "new",
            Self::FunctionCall => "function_call",
            Self::FuncExpr => "func_expr",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

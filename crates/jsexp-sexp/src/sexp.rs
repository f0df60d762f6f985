//! The tagged-list value produced by conversion.
//!
//! A converted node is a list headed by a [`Tag`] symbol:
//! `(op_equal (name "i") (lit 10))`. Values compare structurally, so tests
//! check conversions with plain `assert_eq!` against hand-built lists.
//!
//! Three renderings are provided:
//! - `Display`: canonical single-line text
//! - [`Sexp::to_pretty_string`]: the same tokens, broken across lines to fit a width
//! - `Serialize`: nested arrays, symbols as `":tag"` strings, `Nil` as `null`

use crate::tag::Tag;
use jsexp_common::limits::{STACK_GROW_SIZE, STACK_RED_ZONE};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt::{self, Write as _};

/// Largest magnitude below which every integral `f64` is exactly an `i64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A symbol, scalar or list.
///
/// `Clone`, `PartialEq` and `Debug` are written out rather than derived so
/// that, like `Display`, they grow the stack on deep values.
pub enum Sexp {
    Symbol(Tag),
    Number(f64),
    String(String),
    /// Absent value, e.g. the name of an anonymous function.
    Nil,
    List(Vec<Sexp>),
}

impl Sexp {
    #[must_use]
    pub const fn sym(tag: Tag) -> Self {
        Self::Symbol(tag)
    }

    #[must_use]
    pub const fn num(value: f64) -> Self {
        Self::Number(value)
    }

    pub fn str(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    #[must_use]
    pub const fn list(items: Vec<Sexp>) -> Self {
        Self::List(items)
    }

    /// Create `(tag items...)`
    #[must_use]
    pub fn tagged(tag: Tag, items: Vec<Sexp>) -> Self {
        let mut list = Vec::with_capacity(items.len() + 1);
        list.push(Self::Symbol(tag));
        list.extend(items);
        Self::List(list)
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Sexp]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// The symbol heading this list, if it is a tagged list.
    #[must_use]
    pub fn tag(&self) -> Option<Tag> {
        match self.as_list()?.first()? {
            Self::Symbol(tag) => Some(*tag),
            _ => None,
        }
    }

    /// Render with lists broken one child per line wherever the single-line
    /// form would run past `width` columns.
    #[must_use]
    pub fn to_pretty_string(&self, width: usize) -> String {
        let mut out = String::new();
        self.write_pretty(&mut out, 0, width);
        out
    }

    fn write_pretty(&self, out: &mut String, indent: usize, width: usize) {
        let flat = self.to_string();
        let items = match self {
            Self::List(items) if indent + flat.len() > width && !items.is_empty() => items,
            _ => {
                out.push_str(&flat);
                return;
            }
        };
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            out.push('(');
            items[0].write_pretty(out, indent + 1, width);
            for item in &items[1..] {
                out.push('\n');
                out.extend(std::iter::repeat_n(' ', indent + 2));
                item.write_pretty(out, indent + 2, width);
            }
            out.push(')');
        });
    }
}

impl Clone for Sexp {
    fn clone(&self) -> Self {
        match self {
            Self::Symbol(tag) => Self::Symbol(*tag),
            Self::Number(value) => Self::Number(*value),
            Self::String(value) => Self::String(value.clone()),
            Self::Nil => Self::Nil,
            Self::List(items) => stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
                Self::List(items.clone())
            }),
        }
    }
}

impl PartialEq for Sexp {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::List(a), Self::List(b)) => {
                stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || a == b)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(tag) => f.debug_tuple("Symbol").field(tag).finish(),
            Self::Number(value) => f.debug_tuple("Number").field(value).finish(),
            Self::String(value) => f.debug_tuple("String").field(value).finish(),
            Self::Nil => f.write_str("Nil"),
            Self::List(items) => stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
                f.debug_tuple("List").field(items).finish()
            }),
        }
    }
}

impl From<Tag> for Sexp {
    fn from(tag: Tag) -> Self {
        Self::Symbol(tag)
    }
}

/// Format a number the way JavaScript prints it: integral values without a
/// fractional part, exponent form below `1e-6` and from `1e21` up, `NaN`
/// and `Infinity` by name.
///
/// Exponents use Rust's spelling (`1e21`, `1e-7`) rather than JavaScript's
/// `1e+21`.
fn write_number(f: &mut impl fmt::Write, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        f.write_char('0')
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        write!(f, "{value:e}")
    } else if value.fract() == 0.0 {
        write!(f, "{value:.0}")
    } else {
        write!(f, "{value}")
    }
}

fn write_quoted(f: &mut impl fmt::Write, value: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in value.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => f.write_char(ch)?,
        }
    }
    f.write_char('"')
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(tag) => f.write_str(tag.as_str()),
            Self::Number(value) => write_number(f, *value),
            Self::String(value) => write_quoted(f, value),
            Self::Nil => f.write_str("nil"),
            Self::List(items) => stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
                f.write_char('(')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_char(')')
            }),
        }
    }
}

impl Serialize for Sexp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Symbol(tag) => serializer.collect_str(&format_args!(":{tag}")),
            Self::Number(value) => {
                if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
                    serializer.serialize_i64(*value as i64)
                } else {
                    serializer.serialize_f64(*value)
                }
            }
            Self::String(value) => serializer.serialize_str(value),
            Self::Nil => serializer.serialize_none(),
            Self::List(items) => stacker::maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }),
        }
    }
}

#[cfg(test)]
#[path = "../tests/sexp_tests.rs"]
mod tests;

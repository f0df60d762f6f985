//! S-expression form of JavaScript node trees.
//!
//! [`to_sexp`] turns a [`jsexp_ast::Node`] tree into a [`Sexp`]: nested lists
//! headed by [`Tag`] symbols, suitable for structural comparison in tests and
//! for printing.
//!
//! ```
//! use jsexp_ast::{Node, NodeKind};
//! use jsexp_sexp::to_sexp;
//!
//! let tree = Node::program(vec![Node::binary(
//!     NodeKind::OpEqual,
//!     Node::name("i"),
//!     Node::number(10.0),
//! )]);
//! let sexp = to_sexp(&tree).unwrap();
//! assert_eq!(sexp.to_string(), r#"((op_equal (name "i") (lit 10)))"#);
//! ```

pub mod sexp;
pub use sexp::Sexp;

pub mod tag;
pub use tag::Tag;

pub mod visitor;
pub use visitor::{SexpError, SexpOptions, SexpVisitor, ToSexp, to_sexp};

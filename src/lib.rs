//! Canonical S-expression form for parsed JavaScript trees.
//!
//! The workspace is split the same way the pipeline is:
//! - [`ast`] (`jsexp-ast`): the node model and the JSON loader
//! - [`sexp`] (`jsexp-sexp`): the structural transform and its renderings
//! - [`common`] (`jsexp-common`): positions and limits shared by both
//!
//! The most used items are re-exported at the crate root.

pub use jsexp_ast as ast;
pub use jsexp_common as common;
pub use jsexp_sexp as sexp;

pub use jsexp_ast::{DispatchError, LoadError, Node, NodeKind, Position, Transform};
pub use jsexp_sexp::{Sexp, SexpError, SexpOptions, SexpVisitor, Tag, ToSexp, to_sexp};

pub mod cli;
pub mod tracing_config;

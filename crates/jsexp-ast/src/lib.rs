//! JavaScript node model for the jsexp compiler tools.
//!
//! This crate provides the tree a parser produces and the transforms consume:
//! - `Node` / `NodeKind` - one variant per construct, grouped by `Category`
//! - Builder helpers for constructing trees in code
//! - `Transform` - the double-dispatch hook (`Node::accept`)
//! - `json` - loading trees handed over by external parsers

pub mod node;
pub use node::{Binary, Category, Function, KIND_TABLE, Node, NodeKind};

mod builders;

pub mod transform;
pub use transform::Transform;

pub mod json;
pub use json::{DispatchError, LoadError};

pub use jsexp_common::Position;

//! Double-dispatch hook between nodes and the transforms that consume them.

use crate::node::Node;

/// A whole-tree transform.
///
/// Implementors select behavior by matching on [`Node::kind`](crate::Node);
/// because [`NodeKind`](crate::NodeKind) is closed, an exhaustive `match`
/// is checked by the compiler and no kind can go unhandled.
pub trait Transform {
    type Output;

    fn transform(&mut self, node: &Node) -> Self::Output;
}

impl Node {
    /// Hand this node to `transform` and return whatever it produces.
    pub fn accept<T: Transform + ?Sized>(&self, transform: &mut T) -> T::Output {
        transform.transform(self)
    }
}

//! Tests for the node model.

use super::*;
use crate::Transform;
use std::collections::HashSet;

fn i() -> Node {
    Node::name("i")
}

fn pair() -> Binary {
    Binary {
        left: Box::new(i()),
        right: Box::new(Node::number(10.0)),
    }
}

/// One instance of every kind, in `KIND_TABLE` order.
fn one_of_each_kind() -> Vec<NodeKind> {
    let child = || Box::new(i());
    vec![
        NodeKind::Number(10.0),
        NodeKind::String("s".into()),
        NodeKind::Regexp("/a/".into()),
        NodeKind::Name("i".into()),
        NodeKind::True,
        NodeKind::False,
        NodeKind::Null,
        NodeKind::This,
        NodeKind::Semicolon,
        NodeKind::Throw(child()),
        NodeKind::Delete(child()),
        NodeKind::Void(child()),
        NodeKind::Typeof(child()),
        NodeKind::Not(child()),
        NodeKind::BitwiseNot(child()),
        NodeKind::UnaryNegative(child()),
        NodeKind::UnaryPositive(child()),
        NodeKind::PrefixIncrement(child()),
        NodeKind::PostfixIncrement(child()),
        NodeKind::PrefixDecrement(child()),
        NodeKind::PostfixDecrement(child()),
        NodeKind::Parenthesis(child()),
        NodeKind::OpEqual(pair()),
        NodeKind::OpMultiplyEqual(pair()),
        NodeKind::OpDivideEqual(pair()),
        NodeKind::OpAddEqual(pair()),
        NodeKind::OpSubtractEqual(pair()),
        NodeKind::OpLShiftEqual(pair()),
        NodeKind::OpRShiftEqual(pair()),
        NodeKind::OpURShiftEqual(pair()),
        NodeKind::OpBitAndEqual(pair()),
        NodeKind::OpBitXorEqual(pair()),
        NodeKind::OpBitOrEqual(pair()),
        NodeKind::OpModEqual(pair()),
        NodeKind::AssignExpr(pair()),
        NodeKind::OpMultiply(pair()),
        NodeKind::OpDivide(pair()),
        NodeKind::OpAdd(pair()),
        NodeKind::OpSubtract(pair()),
        NodeKind::OpMod(pair()),
        NodeKind::OpBitAnd(pair()),
        NodeKind::OpLShift(pair()),
        NodeKind::OpRShift(pair()),
        NodeKind::OpURShift(pair()),
        NodeKind::OpBitXor(pair()),
        NodeKind::OpBitOr(pair()),
        NodeKind::Equal(pair()),
        NodeKind::NotEqual(pair()),
        NodeKind::StrictEqual(pair()),
        NodeKind::Or(pair()),
        NodeKind::And(pair()),
        NodeKind::DotAccessor(pair()),
        NodeKind::BracketAccess(pair()),
        NodeKind::Property(pair()),
        NodeKind::GetterProperty(pair()),
        NodeKind::SetterProperty(pair()),
        NodeKind::Label(pair()),
        NodeKind::SourceElements(vec![i()]),
        NodeKind::VarStatement(vec![i()]),
        NodeKind::Comma(vec![i()]),
        NodeKind::ObjectLiteral(vec![i()]),
        NodeKind::ArrayLiteral(vec![i()]),
        NodeKind::New(vec![i()]),
        NodeKind::FunctionCall(vec![i()]),
        NodeKind::Function(Function {
            name: None,
            arguments: vec![],
            body: Box::new(Node::program(vec![])),
        }),
    ]
}

#[test]
fn test_kind_table_matches_every_variant() {
    let kinds = one_of_each_kind();
    assert_eq!(kinds.len(), KIND_TABLE.len());
    for (kind, &(name, category)) in kinds.iter().zip(KIND_TABLE) {
        assert_eq!(kind.name(), name);
        assert_eq!(kind.category(), category, "category of {name}");
        assert_eq!(NodeKind::category_of(name), Some(category));
    }
}

#[test]
fn test_kind_names_are_unique() {
    let names: HashSet<&str> = KIND_TABLE.iter().map(|&(name, _)| name).collect();
    assert_eq!(names.len(), KIND_TABLE.len());
}

#[test]
fn test_unknown_kind_has_no_category() {
    assert_eq!(NodeKind::category_of("Ternary"), None);
    assert_eq!(NodeKind::category_of("opequal"), None);
}

#[test]
fn test_payload_accessors_follow_category() {
    for kind in one_of_each_kind() {
        let node = Node::leaf(kind);
        let children = node.children().len();
        match node.category() {
            Category::Literal => assert_eq!(children, 0),
            Category::Unary => {
                assert!(node.kind.operand().is_some());
                assert_eq!(children, 1);
            }
            Category::Binary => {
                assert!(node.kind.operands().is_some());
                assert_eq!(children, 2);
            }
            Category::Sequence => {
                assert_eq!(node.kind.elements().map(<[Node]>::len), Some(children));
            }
            Category::Function => assert_eq!(children, 1),
        }
    }
}

#[test]
fn test_children_keep_source_order() {
    let call = Node::sequence(
        NodeKind::FunctionCall,
        vec![Node::name("f"), Node::number(1.0), Node::string("two")],
    );
    let kinds: Vec<&str> = call.children().iter().map(|c| c.kind.name()).collect();
    assert_eq!(kinds, ["Name", "Number", "String"]);

    let assign = Node::binary(NodeKind::OpEqual, Node::name("a"), Node::name("b"));
    let names: Vec<_> = assign.children().into_iter().cloned().collect();
    assert_eq!(names, vec![Node::name("a"), Node::name("b")]);
}

#[test]
fn test_depth() {
    assert_eq!(i().depth(), 1);
    assert_eq!(i().paren().depth(), 2);

    let tree = Node::program(vec![
        Node::semicolon(),
        Node::binary(NodeKind::OpAdd, i().paren().paren(), Node::number(1.0)),
    ]);
    assert_eq!(tree.depth(), 5);
}

#[test]
fn test_depth_of_deep_chain_does_not_recurse() {
    let mut node = i();
    for _ in 0..100_000 {
        node = node.paren();
    }
    assert_eq!(node.depth(), 100_001);
    // Dismantle iteratively; the derived Drop would recurse once per level.
    let mut current = Some(node);
    while let Some(Node {
        kind: NodeKind::Parenthesis(child),
        ..
    }) = current
    {
        current = Some(*child);
    }
}

#[test]
fn test_builders_place_nodes_at_start() {
    let node = Node::function(Some("f"), &["a", "b"], Node::program(vec![]));
    assert_eq!(node.position, Position::START);
    let NodeKind::Function(func) = &node.kind else {
        panic!("expected a function, got {}", node.kind.name());
    };
    assert_eq!(func.name.as_deref(), Some("f"));
    assert_eq!(func.arguments, ["a", "b"]);
}

#[test]
fn test_at_sets_position() {
    let node = Node::name("x").at(3, 14);
    assert_eq!(node.position, Position::new(3, 14));
}

#[test]
fn test_boolean_builder() {
    assert_eq!(Node::boolean(true).kind, NodeKind::True);
    assert_eq!(Node::boolean(false).kind, NodeKind::False);
}

struct CountNames(usize);

impl Transform for CountNames {
    type Output = usize;

    fn transform(&mut self, node: &Node) -> usize {
        if matches!(node.kind, NodeKind::Name(_)) {
            self.0 += 1;
        }
        for child in node.children() {
            child.accept(self);
        }
        self.0
    }
}

#[test]
fn test_accept_dispatches_to_transform() {
    let tree = Node::program(vec![
        Node::binary(NodeKind::OpEqual, Node::name("a"), Node::name("b")),
        Node::unary(NodeKind::Typeof, Node::name("c")),
        Node::null(),
    ]);
    assert_eq!(tree.accept(&mut CountNames(0)), 3);
}

#[test]
fn test_clone_and_eq_on_deep_tree() {
    let mut tree = Node::name("i");
    for _ in 0..50_000 {
        tree = Node::unary(NodeKind::Not, tree);
    }
    let copy = tree.clone();
    assert!(copy == tree);
    assert_eq!(copy.depth(), 50_001);

    let mut other = Node::name("j");
    for _ in 0..50_000 {
        other = Node::unary(NodeKind::Not, other);
    }
    assert!(other != tree);

    // Dropping recurses once per level; dismantle the chains iteratively.
    for root in [tree, copy, other] {
        let mut next = Some(root);
        while let Some(node) = next.take() {
            if let NodeKind::Not(child) = node.kind {
                next = Some(*child);
            }
        }
    }
}

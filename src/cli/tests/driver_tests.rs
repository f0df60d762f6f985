use super::args::{CliArgs, OutputFormat};
use super::driver::{convert_and_render, load_str, render, run};
use clap::Parser;
use jsexp_ast::{Node, NodeKind, json};
use std::io::Write;

fn assignment() -> Node {
    Node::program(vec![Node::binary(
        NodeKind::OpEqual,
        Node::name("i"),
        Node::number(10.0),
    )])
}

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["jsexp"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("parse")
}

#[test]
fn renders_each_format() {
    let tree = assignment();
    assert_eq!(
        convert_and_render(&tree, &args(&[])).expect("sexp"),
        r#"((op_equal (name "i") (lit 10)))"#
    );
    assert_eq!(
        convert_and_render(&tree, &args(&["-f", "json"])).expect("json"),
        r#"[[":op_equal",[":name","i"],[":lit",10]]]"#
    );
    assert_eq!(
        convert_and_render(&tree, &args(&["-f", "pretty", "--width", "24"])).expect("pretty"),
        "((op_equal\n   (name \"i\")\n   (lit 10)))"
    );
}

#[test]
fn render_pretty_ignores_width_when_it_fits() {
    let sexp = jsexp_sexp::to_sexp(&assignment()).expect("convert");
    let flat = render(&sexp, OutputFormat::Sexp, 0).expect("sexp");
    assert_eq!(render(&sexp, OutputFormat::Pretty, 200).expect("pretty"), flat);
}

#[test]
fn depth_limit_is_reported() {
    let tree = Node::unary(NodeKind::Not, Node::unary(NodeKind::Not, Node::name("i")));
    let err = convert_and_render(&tree, &args(&["--max-depth", "2"])).expect_err("too deep");
    let message = format!("{err:#}");
    assert!(message.contains("failed to convert tree"), "{message}");
    assert!(message.contains("limit of 2 levels"), "{message}");
}

#[test]
fn load_str_reports_unknown_kind() {
    let err = load_str(r#"{"position":{"line":4,"column":2},"kind":"WithStatement"}"#)
        .expect_err("unknown kind");
    let message = format!("{err:#}");
    assert!(message.contains("failed to load tree"), "{message}");
    assert!(message.contains("`WithStatement` at 4:2"), "{message}");
}

#[test]
fn run_reads_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    let text = json::to_string(&assignment()).expect("encode");
    file.write_all(text.as_bytes()).expect("write");

    let path = file.path().to_string_lossy().into_owned();
    let output = run(&args(&[path.as_str()])).expect("run");
    assert_eq!(output, r#"((op_equal (name "i") (lit 10)))"#);
}

#[test]
fn run_reports_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");
    let path = path.to_string_lossy().into_owned();
    let err = run(&args(&[path.as_str()])).expect_err("missing file");
    assert!(format!("{err:#}").contains("failed to open"));
}

#[test]
fn loads_long_operator_chain() {
    // a + a + ... + a, nesting one level per operator
    let mut chain = Node::name("a");
    for _ in 0..1_000 {
        chain = Node::binary(NodeKind::OpAdd, chain, Node::name("a"));
    }
    let text = json::to_string(&chain).expect("encode");
    let tree = load_str(&text).expect("load");
    assert_eq!(tree.depth(), 1_001);

    let output = convert_and_render(&tree, &args(&["-f", "json"])).expect("convert");
    assert!(output.starts_with(r#"[":op_add",[":op_add","#), "{output:.40}");
}

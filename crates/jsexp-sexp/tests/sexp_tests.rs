//! Tests for `Sexp` rendering.

use super::*;

fn assignment() -> Sexp {
    Sexp::tagged(
        Tag::OpEqual,
        vec![
            Sexp::tagged(Tag::Name, vec![Sexp::str("i")]),
            Sexp::tagged(Tag::Lit, vec![Sexp::num(10.0)]),
        ],
    )
}

#[test]
fn test_display_canonical_form() {
    assert_eq!(assignment().to_string(), r#"(op_equal (name "i") (lit 10))"#);
}

#[test]
fn test_display_program_list() {
    let program = Sexp::list(vec![assignment(), Sexp::tagged(Tag::Semicolon, Vec::new())]);
    assert_eq!(
        program.to_string(),
        r#"((op_equal (name "i") (lit 10)) (semicolon))"#
    );
    assert_eq!(Sexp::list(Vec::new()).to_string(), "()");
}

#[test]
fn test_display_numbers() {
    let cases = [
        (10.0, "10"),
        (-3.0, "-3"),
        (0.5, "0.5"),
        (-0.0, "0"),
        (1e20, "100000000000000000000"),
        (1e21, "1e21"),
        (0.000001, "0.000001"),
        (1e-7, "1e-7"),
        (-2.5e-9, "-2.5e-9"),
        (f64::NAN, "NaN"),
        (f64::INFINITY, "Infinity"),
        (f64::NEG_INFINITY, "-Infinity"),
    ];
    for (value, text) in cases {
        assert_eq!(Sexp::num(value).to_string(), text, "{value:?}");
    }
}

#[test]
fn test_display_escapes_strings() {
    let sexp = Sexp::str("a\"b\\c\nd\te\r");
    assert_eq!(sexp.to_string(), r#""a\"b\\c\nd\te\r""#);
}

#[test]
fn test_display_nil() {
    let func = Sexp::tagged(
        Tag::FuncExpr,
        vec![Sexp::Nil, Sexp::list(Vec::new()), Sexp::list(Vec::new())],
    );
    assert_eq!(func.to_string(), "(func_expr nil () ())");
}

#[test]
fn test_tag_accessor() {
    assert_eq!(assignment().tag(), Some(Tag::OpEqual));
    assert_eq!(Sexp::list(vec![assignment()]).tag(), None);
    assert_eq!(Sexp::str("x").tag(), None);
    assert_eq!(Sexp::list(Vec::new()).tag(), None);
    assert_eq!(Sexp::from(Tag::Lit), Sexp::sym(Tag::Lit));
}

#[test]
fn test_pretty_fits_on_one_line() {
    let sexp = assignment();
    assert_eq!(sexp.to_pretty_string(80), sexp.to_string());
}

#[test]
fn test_pretty_breaks_long_lists() {
    let sexp = assignment();
    assert_eq!(
        sexp.to_pretty_string(20),
        "(op_equal\n  (name \"i\")\n  (lit 10))"
    );
}

#[test]
fn test_pretty_nested_indent() {
    let program = Sexp::list(vec![assignment()]);
    assert_eq!(
        program.to_pretty_string(20),
        "((op_equal\n   (name \"i\")\n   (lit 10)))"
    );
}

#[test]
fn test_json_output() {
    let json = serde_json::to_string(&assignment()).expect("serialize");
    assert_eq!(json, r#"[":op_equal",[":name","i"],[":lit",10]]"#);
}

#[test]
fn test_json_scalars() {
    let sexp = Sexp::list(vec![
        Sexp::Nil,
        Sexp::num(2.5),
        Sexp::num(-7.0),
        Sexp::str("s"),
    ]);
    let json = serde_json::to_string(&sexp).expect("serialize");
    assert_eq!(json, r#"[null,2.5,-7,"s"]"#);
}

#[test]
fn test_tag_display_matches_as_str() {
    for tag in [Tag::Lit, Tag::UNeg, Tag::OpURShiftEqual, Tag::FuncExpr] {
        assert_eq!(tag.to_string(), tag.as_str());
    }
}

#[test]
fn test_clone_and_eq_are_structural() {
    let sexp = Sexp::list(vec![assignment(), Sexp::Nil]);
    let copy = sexp.clone();
    assert_eq!(copy, sexp);
    assert_ne!(copy, Sexp::list(vec![assignment()]));
    assert_ne!(Sexp::Nil, Sexp::list(Vec::new()));
    assert_ne!(Sexp::num(f64::NAN), Sexp::num(f64::NAN));
}

#[test]
fn test_debug_form() {
    let sexp = Sexp::list(vec![Sexp::sym(Tag::Lit), Sexp::num(1.0), Sexp::Nil]);
    assert_eq!(format!("{sexp:?}"), "List([Symbol(Lit), Number(1.0), Nil])");
}

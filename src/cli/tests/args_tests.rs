use super::args::{CliArgs, OutputFormat};
use clap::Parser;
use jsexp_common::limits::MAX_SEXP_DEPTH;
use std::path::Path;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["jsexp"]).expect("parse");
    assert_eq!(args.file, None);
    assert_eq!(args.format, OutputFormat::Sexp);
    assert_eq!(args.width, 80);
    assert_eq!(args.max_depth, MAX_SEXP_DEPTH);
    assert_eq!(args.input_path(), None);
}

#[test]
fn parses_all_options() {
    let args = CliArgs::try_parse_from([
        "jsexp",
        "tree.json",
        "-f",
        "pretty",
        "--width",
        "40",
        "--max-depth",
        "64",
    ])
    .expect("parse");
    assert_eq!(args.input_path(), Some(Path::new("tree.json")));
    assert_eq!(args.format, OutputFormat::Pretty);
    assert_eq!(args.width, 40);
    assert_eq!(args.max_depth, 64);
}

#[test]
fn format_is_case_insensitive() {
    let args = CliArgs::try_parse_from(["jsexp", "--format", "JSON"]).expect("parse");
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn dash_means_stdin() {
    let args = CliArgs::try_parse_from(["jsexp", "-"]).expect("parse");
    assert!(args.file.is_some());
    assert_eq!(args.input_path(), None);
}

#[test]
fn rejects_unknown_format() {
    assert!(CliArgs::try_parse_from(["jsexp", "-f", "xml"]).is_err());
}

#[test]
fn rejects_negative_depth() {
    assert!(CliArgs::try_parse_from(["jsexp", "--max-depth", "-1"]).is_err());
}

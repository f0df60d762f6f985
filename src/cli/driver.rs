//! Load, convert and render one tree.

use anyhow::{Context, Result};
use jsexp_ast::{Node, json};
use jsexp_sexp::{Sexp, SexpOptions, SexpVisitor};
use std::io::Read;
use tracing::info;

use crate::cli::args::{CliArgs, OutputFormat};

/// Run the conversion described by `args` and return the rendered output.
pub fn run(args: &CliArgs) -> Result<String> {
    let tree = load_tree(args)?;
    convert_and_render(&tree, args)
}

fn load_tree(args: &CliArgs) -> Result<Node> {
    match args.input_path() {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            json::from_reader(file).with_context(|| format!("failed to load {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read tree from stdin")?;
            load_str(&text)
        }
    }
}

/// Load a tree from JSON text, with CLI error context.
pub fn load_str(text: &str) -> Result<Node> {
    json::from_str(text).context("failed to load tree")
}

/// Convert an already loaded tree and render it in the requested format.
pub fn convert_and_render(tree: &Node, args: &CliArgs) -> Result<String> {
    let options = SexpOptions {
        max_depth: args.max_depth,
    };
    let sexp = SexpVisitor::with_options(options)
        .convert(tree)
        .context("failed to convert tree")?;
    info!(format = ?args.format, "converted tree");
    render(&sexp, args.format, args.width)
}

/// Render `sexp` in `format`; `width` only applies to `Pretty`.
pub fn render(sexp: &Sexp, format: OutputFormat, width: usize) -> Result<String> {
    Ok(match format {
        OutputFormat::Sexp => sexp.to_string(),
        OutputFormat::Pretty => sexp.to_pretty_string(width),
        OutputFormat::Json => serde_json::to_string(sexp).context("failed to encode output")?,
    })
}

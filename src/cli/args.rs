use clap::{Parser, ValueEnum};
use jsexp_common::limits::MAX_SEXP_DEPTH;
use std::path::{Path, PathBuf};

/// CLI arguments for the jsexp binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsexp",
    version,
    about = "Print a parsed JavaScript tree in canonical S-expression form"
)]
pub struct CliArgs {
    /// JSON node tree to convert; reads stdin when absent or `-`.
    pub file: Option<PathBuf>,

    /// Output rendering.
    #[arg(short = 'f', long, value_enum, ignore_case = true, default_value_t = OutputFormat::Sexp)]
    pub format: OutputFormat,

    /// Line width for `--format pretty`.
    #[arg(long, default_value_t = 80)]
    pub width: usize,

    /// Deepest tree nesting to convert before failing.
    #[arg(long = "max-depth", default_value_t = MAX_SEXP_DEPTH)]
    pub max_depth: u32,
}

impl CliArgs {
    /// The input file, or `None` when the tree comes from stdin.
    #[must_use]
    pub fn input_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Single line: `(op_equal (name "i") (lit 10))`
    #[default]
    Sexp,
    /// Indented, wrapped at `--width`.
    Pretty,
    /// Nested JSON arrays with `":tag"` symbols.
    Json,
}

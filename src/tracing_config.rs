//! Logging setup for the `jsexp` binary.
//!
//! The library crates only emit `tracing` events: the JSON loader logs at
//! `debug`, each conversion opens a `debug` span, every dispatched node kind
//! is a `trace` event and hitting the nesting limit is a `warn`. This module
//! installs a subscriber for them, writing to stderr so stdout carries only
//! the converted tree.
//!
//! `JSEXP_LOG` (falling back to `RUST_LOG`) holds the filter and
//! `JSEXP_LOG_FORMAT` picks `text` (default), `tree` or `json`:
//!
//! ```bash
//! JSEXP_LOG=jsexp_ast=debug jsexp tree.json
//! JSEXP_LOG=jsexp_sexp=trace JSEXP_LOG_FORMAT=tree jsexp tree.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Flat `fmt` lines.
    Text,
    /// Indented spans via `tracing-tree`, one line per dispatched kind.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parse a `JSEXP_LOG_FORMAT` value; anything unrecognised is `Text`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("JSEXP_LOG_FORMAT").unwrap_or_default())
    }
}

/// The filter to log with, or `None` when logging was not asked for.
///
/// `JSEXP_LOG` wins over `RUST_LOG`; both use `EnvFilter` directive syntax.
fn filter_from_env() -> Option<EnvFilter> {
    match std::env::var("JSEXP_LOG") {
        Ok(directives) => Some(EnvFilter::builder().parse_lossy(directives)),
        Err(_) if std::env::var_os("RUST_LOG").is_some() => Some(EnvFilter::from_default_env()),
        Err(_) => None,
    }
}

/// Install the global subscriber, if `JSEXP_LOG` or `RUST_LOG` is set.
pub fn init_tracing() {
    let Some(filter) = filter_from_env() else {
        return;
    };

    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

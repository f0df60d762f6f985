//! Line/column source locations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based line/column pair identifying where a node starts in the source.
///
/// Positions are produced by the parser and carried through the tree for
/// diagnostics only; no transform reads them to decide its output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// First character of the source.
    pub const START: Self = Self { line: 1, column: 1 };

    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
#[path = "../tests/position_tests.rs"]
mod tests;

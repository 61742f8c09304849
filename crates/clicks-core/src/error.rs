//! Error types for click-distance queries.
//!
//! Only conditions the caller cannot branch on as a normal outcome live
//! here. A target set that is not reachable from the start page is reported
//! through [`crate::solver::Distance::Disconnected`] instead, and a category
//! pair without comparable pages is dropped from the ranking.

use std::fmt;

/// Result alias used throughout `clicks-core`.
pub type Result<T> = std::result::Result<T, ClickError>;

/// Errors produced by the click-distance engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClickError {
    /// Caller-supplied arguments are malformed (zero depth, empty target set, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A page id that must exist in the graph does not.
    #[error("page not found in graph: {0}")]
    UnknownNode(String),

    /// A category label that must exist in the dataset does not.
    #[error("category not found in dataset: {0}")]
    UnknownCategory(String),

    /// Degree centrality was requested on a single-node graph, where the
    /// `|V| - 1` normalization denominator is zero.
    #[error("degree centrality is undefined for a single-node graph (node {node})")]
    DegenerateCentrality {
        /// The only node in the graph.
        node: String,
    },

    /// The configured depth cap was reached before the target set was covered.
    #[error("target set not covered within the depth limit of {limit} clicks")]
    DepthLimitExceeded {
        /// The configured `solver.max_depth`.
        limit: usize,
    },

    /// An input file line could not be parsed.
    #[error("{source_kind} line {line}: {message}")]
    Parse {
        /// Which kind of input was being read.
        source_kind: InputKind,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Reading an input stream failed.
    #[error("read error: {0}")]
    Io(String),
}

impl ClickError {
    /// Returns `true` for the invalid-input class of errors.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for ClickError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// The kind of input file a [`ClickError::Parse`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Whitespace-separated edge list.
    EdgeList,
    /// Page/category dataset.
    Dataset,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeList => f.write_str("edge list"),
            Self::Dataset => f.write_str("dataset"),
        }
    }
}

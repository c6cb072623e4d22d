use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Convenient result alias for the roadroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Input data violated the expected layout (bad counts, unparsable
    /// tokens, or references to node ids outside the node table).
    #[error("malformed input in {source_name}: {message}")]
    MalformedInput {
        source_name: String,
        message: String,
    },

    /// Input file could not be located at the resolved path.
    #[error("road network file not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// Raised when an edge carries a negative traversal cost.
    #[error("edge {from} -> {to} has negative cost {cost}")]
    NegativeEdgeCost { from: NodeId, to: NodeId, cost: i64 },

    /// Raised when a landmark name could not be found in the index.
    #[error("unknown landmark name: {name}{}", format_suggestions(.suggestions))]
    UnknownLandmark {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a node id passed to the search engine is out of range.
    #[error("node {id} is out of range for a graph with {node_count} nodes")]
    InvalidNode { id: NodeId, node_count: usize },

    /// No suitable data directory could be resolved for this platform.
    #[error("failed to resolve a data directory for road network files")]
    DataDirUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV writer errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

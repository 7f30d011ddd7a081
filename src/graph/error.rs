//! Error types for graph operations.

use std::fmt;

/// Result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur during graph operations.
#[derive(Debug, Clone)]
pub enum GraphError {
    /// An edge or query referenced a vertex outside the vertex set.
    UnknownVertex {
        vertex: String,
        context: &'static str,
    },

    /// Malformed input, such as an edge weight that is not totally ordered.
    InvalidInput { reason: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex { vertex, context } => {
                write!(f, "Unknown vertex {} in {}", vertex, context)
            }
            Self::InvalidInput { reason } => {
                write!(f, "Invalid input: {}", reason)
            }
        }
    }
}

impl std::error::Error for GraphError {}

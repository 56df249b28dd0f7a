//! Error types for the weighted graph library.

use std::fmt;

use thiserror::Error;

/// All errors that can occur when operating on a graph.
///
/// Every variant is a precondition violation: the caller referenced a vertex
/// or edge that does not exist, or tried to insert a vertex twice. A failing
/// operation never leaves the graph partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex not found by identifier.
    #[error("Vertex {0} not found")]
    UnknownVertex(String),

    /// Vertex identifier already present.
    #[error("Vertex {0} already exists")]
    DuplicateVertex(String),

    /// Both endpoints exist but no edge connects them.
    #[error("No edge from {from} to {to}")]
    MissingEdge { from: String, to: String },
}

impl GraphError {
    /// Whether this error is a precondition violation. Always true; kept so
    /// callers can match on the error kind rather than on variants.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::UnknownVertex(_) | Self::DuplicateVertex(_) | Self::MissingEdge { .. }
        )
    }

    pub(crate) fn unknown<Q: fmt::Display + ?Sized>(id: &Q) -> Self {
        Self::UnknownVertex(id.to_string())
    }

    pub(crate) fn duplicate<Q: fmt::Display + ?Sized>(id: &Q) -> Self {
        Self::DuplicateVertex(id.to_string())
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

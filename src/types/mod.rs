//! Shared data types for the weighted graph library.

pub mod error;

pub use error::{GraphError, GraphResult};

/// Weight of a directed edge, and of a path as the sum of its edges.
pub type Cost = u64;

/// Identifier types usable as vertex keys.
///
/// Identifiers are ordered so that vertex and adjacency iteration is
/// deterministic, and displayable so they can appear in errors and dumps.
pub trait VertexId: Ord + Clone + std::fmt::Display {}

impl<T: Ord + Clone + std::fmt::Display> VertexId for T {}

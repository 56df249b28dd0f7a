//! Fluent API for building Graph instances.

use crate::types::{Cost, GraphResult, VertexId};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices and edges are only checked in [`build`](Self::build), where all
/// vertices are inserted before any edge.
pub struct GraphBuilder<E, K = String> {
    vertices: Vec<(K, E)>,
    edges: Vec<(K, K, Cost)>,
}

impl<E, K: VertexId> GraphBuilder<E, K> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, id: impl Into<K>, data: E) -> &mut Self {
        self.vertices.push((id.into(), data));
        self
    }

    /// Add a directed edge between two vertices.
    pub fn edge(&mut self, source: impl Into<K>, target: impl Into<K>, cost: Cost) -> &mut Self {
        self.edges.push((source.into(), target.into(), cost));
        self
    }

    /// Build the final Graph, failing on the first duplicate vertex or
    /// dangling edge endpoint.
    pub fn build(self) -> GraphResult<Graph<E, K>> {
        let mut graph = Graph::new();
        for (id, data) in self.vertices {
            graph.add_vertex(id, data)?;
        }
        for (source, target, cost) in &self.edges {
            graph.add_directed_edge::<K>(source, target, *cost)?;
        }
        log::debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<E, K: VertexId> Default for GraphBuilder<E, K> {
    fn default() -> Self {
        Self::new()
    }
}

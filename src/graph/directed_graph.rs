//! Core graph structure: vertices with data and weighted outgoing edges.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use crate::types::{Cost, GraphError, GraphResult, VertexId};

/// One vertex record: its data plus outgoing adjacency (neighbor -> cost).
#[derive(Debug, Clone, PartialEq)]
struct VertexEntry<K, E> {
    data: E,
    edges: BTreeMap<K, Cost>,
}

/// A directed graph with per-vertex data and weighted edges.
///
/// Vertices and adjacency are kept in identifier order, so every iteration
/// the graph exposes (and therefore every traversal and tie-break) is
/// deterministic for a given set of insertions.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<E, K = String> {
    /// All vertices, indexed by identifier. Each entry owns its adjacency.
    vertices: BTreeMap<K, VertexEntry<K, E>>,
    /// Number of directed edges across all adjacency maps.
    edge_count: usize,
}

impl<E, K: VertexId> Graph<E, K> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// True when the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` names a vertex of this graph.
    pub fn contains_vertex<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.vertices.contains_key(id)
    }

    /// Whether a directed edge `source -> target` exists.
    pub fn contains_edge<Q>(&self, source: &Q, target: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.vertices
            .get(source)
            .is_some_and(|entry| entry.edges.contains_key(target))
    }

    /// Add a vertex with no outgoing edges.
    pub fn add_vertex(&mut self, id: K, data: E) -> GraphResult<()> {
        if self.vertices.contains_key(&id) {
            return Err(GraphError::duplicate(&id));
        }
        log::trace!("add vertex {}", id);
        self.vertices.insert(
            id,
            VertexEntry {
                data,
                edges: BTreeMap::new(),
            },
        );
        Ok(())
    }

    /// Add or update the edge `source -> target`.
    ///
    /// Returns the previous cost when an existing edge was overwritten.
    /// Self-loops are accepted.
    pub fn add_directed_edge<Q>(
        &mut self,
        source: &Q,
        target: &Q,
        cost: Cost,
    ) -> GraphResult<Option<Cost>>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        // Resolve the target first so a failed call never touches the source entry
        let target_key = self
            .vertices
            .get_key_value(target)
            .map(|(key, _)| key.clone())
            .ok_or_else(|| GraphError::unknown(target))?;
        let entry = self
            .vertices
            .get_mut(source)
            .ok_or_else(|| GraphError::unknown(source))?;

        let previous = entry.edges.insert(target_key, cost);
        if previous.is_none() {
            self.edge_count += 1;
        }
        log::trace!("edge {} -> {} = {} (was {:?})", source, target, cost, previous);
        Ok(previous)
    }

    /// Replace the data of an existing vertex, returning the old value.
    pub fn set_data<Q>(&mut self, id: &Q, data: E) -> GraphResult<E>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        let entry = self
            .vertices
            .get_mut(id)
            .ok_or_else(|| GraphError::unknown(id))?;
        Ok(std::mem::replace(&mut entry.data, data))
    }

    /// Outgoing neighbors of `id` and the cost to reach each, in ascending
    /// neighbor order.
    pub fn adjacent_vertices<Q>(&self, id: &Q) -> GraphResult<&BTreeMap<K, Cost>>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.entry(id).map(|entry| &entry.edges)
    }

    /// Cost of the edge `source -> target`.
    pub fn cost<Q>(&self, source: &Q, target: &Q) -> GraphResult<Cost>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        if !self.vertices.contains_key(target) {
            return Err(GraphError::unknown(target));
        }
        self.entry(source)?
            .edges
            .get(target)
            .copied()
            .ok_or_else(|| GraphError::MissingEdge {
                from: source.to_string(),
                to: target.to_string(),
            })
    }

    /// Data associated with `id`.
    pub fn data<Q>(&self, id: &Q) -> GraphResult<&E>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.entry(id).map(|entry| &entry.data)
    }

    /// All vertex identifiers, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.keys()
    }

    /// The graph's own copy of the identifier `id`.
    pub(crate) fn resolve<Q>(&self, id: &Q) -> GraphResult<&K>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.vertices
            .get_key_value(id)
            .map(|(key, _)| key)
            .ok_or_else(|| GraphError::unknown(id))
    }

    fn entry<Q>(&self, id: &Q) -> GraphResult<&VertexEntry<K, E>>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        self.vertices.get(id).ok_or_else(|| GraphError::unknown(id))
    }
}

impl<E, K: VertexId> Default for Graph<E, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, K: VertexId> fmt::Display for Graph<E, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: [")?;
        for (i, id) in self.vertices.keys().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id)?;
        }
        writeln!(f, "]")?;

        writeln!(f, "Edges:")?;
        for (id, entry) in &self.vertices {
            write!(f, "Vertex({})--->{{", id)?;
            for (i, (neighbor, cost)) in entry.edges.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", neighbor, cost)?;
            }
            writeln!(f, "}}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_count_tracks_overwrites() {
        let mut graph: Graph<()> = Graph::new();
        graph.add_vertex("A".to_string(), ()).unwrap();
        graph.add_vertex("B".to_string(), ()).unwrap();

        assert_eq!(graph.add_directed_edge("A", "B", 3).unwrap(), None);
        assert_eq!(graph.add_directed_edge("A", "B", 7).unwrap(), Some(3));
        assert_eq!(graph.add_directed_edge("B", "A", 1).unwrap(), None);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn empty_graph_display() {
        let graph: Graph<u32> = Graph::new();
        assert_eq!(graph.to_string(), "Vertices: []\nEdges:\n");
    }
}

//! Graph traversal algorithms (BFS, DFS).

use std::borrow::Borrow;
use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::types::{GraphResult, VertexId};

use super::{Graph, Visitor};

/// Order in which a traversal expands its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalOrder {
    /// FIFO frontier.
    BreadthFirst,
    /// LIFO frontier; among siblings the smallest identifier is expanded first.
    DepthFirst,
}

/// Breadth-first traversal from `start`, calling `visitor` once per reachable vertex.
pub fn bfs_traverse<E, K, Q, V>(
    graph: &Graph<E, K>,
    start: &Q,
    visitor: &mut V,
) -> GraphResult<()>
where
    K: VertexId + Borrow<Q>,
    Q: Ord + fmt::Display + ?Sized,
    V: Visitor<K, E> + ?Sized,
{
    bfs_from(graph, graph.resolve(start)?, visitor)
}

fn bfs_from<E, K, V>(graph: &Graph<E, K>, start: &K, visitor: &mut V) -> GraphResult<()>
where
    K: VertexId,
    V: Visitor<K, E> + ?Sized,
{
    let mut visited: BTreeSet<&K> = BTreeSet::new();
    let mut queue: VecDeque<&K> = VecDeque::new();
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        log::trace!("bfs visit {}", current);
        visitor.visit(current, graph.data(current)?);

        // Neighbors may already be queued; they are skipped when dequeued again
        queue.extend(graph.adjacent_vertices(current)?.keys());
    }

    log::debug!("bfs from {} reached {} vertices", start, visited.len());
    Ok(())
}

/// Depth-first traversal from `start`, calling `visitor` once per reachable vertex.
pub fn dfs_traverse<E, K, Q, V>(
    graph: &Graph<E, K>,
    start: &Q,
    visitor: &mut V,
) -> GraphResult<()>
where
    K: VertexId + Borrow<Q>,
    Q: Ord + fmt::Display + ?Sized,
    V: Visitor<K, E> + ?Sized,
{
    dfs_from(graph, graph.resolve(start)?, visitor)
}

fn dfs_from<E, K, V>(graph: &Graph<E, K>, start: &K, visitor: &mut V) -> GraphResult<()>
where
    K: VertexId,
    V: Visitor<K, E> + ?Sized,
{
    let mut visited: BTreeSet<&K> = BTreeSet::new();
    let mut stack: Vec<&K> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        log::trace!("dfs visit {}", current);
        visitor.visit(current, graph.data(current)?);

        // Reverse so the first neighbor ends on top of the stack
        stack.extend(graph.adjacent_vertices(current)?.keys().rev());
    }

    log::debug!("dfs from {} reached {} vertices", start, visited.len());
    Ok(())
}

impl<E, K: VertexId> Graph<E, K> {
    /// Breadth-first traversal. Fails if `start` is not a vertex.
    pub fn breadth_first<Q, V>(&self, start: &Q, visitor: &mut V) -> GraphResult<()>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
        V: Visitor<K, E> + ?Sized,
    {
        bfs_traverse(self, start, visitor)
    }

    /// Depth-first traversal. Fails if `start` is not a vertex.
    pub fn depth_first<Q, V>(&self, start: &Q, visitor: &mut V) -> GraphResult<()>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
        V: Visitor<K, E> + ?Sized,
    {
        dfs_traverse(self, start, visitor)
    }

    /// Traverse in the given order.
    pub fn traverse<Q, V>(
        &self,
        start: &Q,
        order: TraversalOrder,
        visitor: &mut V,
    ) -> GraphResult<()>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
        V: Visitor<K, E> + ?Sized,
    {
        match order {
            TraversalOrder::BreadthFirst => bfs_traverse(self, start, visitor),
            TraversalOrder::DepthFirst => dfs_traverse(self, start, visitor),
        }
    }

    /// Identifiers reachable from `start` (including `start`), in the given
    /// traversal order.
    pub fn reachable<Q>(&self, start: &Q, order: TraversalOrder) -> GraphResult<Vec<K>>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        let mut recorder = super::VisitOrder::new();
        self.traverse(start, order, &mut recorder)?;
        Ok(recorder.into_inner())
    }
}

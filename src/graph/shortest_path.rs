//! Single-pair shortest path (Dijkstra).

use std::borrow::Borrow;
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt;

use crate::types::{Cost, GraphResult, VertexId};

use super::Graph;

/// Outcome of a shortest-path query between two known vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortestPath<K> {
    /// A cheapest path, listed from start to end inclusive.
    Found { cost: Cost, path: Vec<K> },
    /// No directed path leads from start to end.
    Unreachable,
}

impl<K> ShortestPath<K> {
    /// Total cost of the path, if one exists.
    pub fn cost(&self) -> Option<Cost> {
        match self {
            Self::Found { cost, .. } => Some(*cost),
            Self::Unreachable => None,
        }
    }

    /// The vertices on the path. Empty when unreachable.
    pub fn path(&self) -> &[K] {
        match self {
            Self::Found { path, .. } => path,
            Self::Unreachable => &[],
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Consume the result, returning `(cost, path)` if a path exists.
    pub fn into_parts(self) -> Option<(Cost, Vec<K>)> {
        match self {
            Self::Found { cost, path } => Some((cost, path)),
            Self::Unreachable => None,
        }
    }
}

impl<K: fmt::Display> fmt::Display for ShortestPath<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { cost, path } => {
                for (i, id) in path.iter().enumerate() {
                    if i > 0 {
                        write!(f, " -> ")?;
                    }
                    write!(f, "{}", id)?;
                }
                write!(f, " (cost {})", cost)
            }
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Cheapest directed path from `start` to `end`.
///
/// Both vertices must exist. Heap entries are ordered by `(cost, vertex)`, so
/// among equally cheap candidates the smallest identifier is settled first.
pub fn dijkstra<E, K, Q>(
    graph: &Graph<E, K>,
    start: &Q,
    end: &Q,
) -> GraphResult<ShortestPath<K>>
where
    K: VertexId + Borrow<Q>,
    Q: Ord + fmt::Display + ?Sized,
{
    let start = graph.resolve(start)?;
    let end = graph.resolve(end)?;
    let result = dijkstra_between(graph, start, end)?;
    log::debug!("shortest path {} -> {}: {}", start, end, result);
    Ok(result)
}

fn dijkstra_between<E, K>(
    graph: &Graph<E, K>,
    start: &K,
    end: &K,
) -> GraphResult<ShortestPath<K>>
where
    K: VertexId,
{
    if start == end {
        return Ok(ShortestPath::Found {
            cost: 0,
            path: vec![start.clone()],
        });
    }

    // Finalized vertices: minimum cost and the parent it was reached from
    let mut solved: BTreeMap<&K, (Cost, Option<&K>)> = BTreeMap::new();
    let mut tentative: BTreeMap<&K, Cost> = BTreeMap::new();
    let mut heap = BinaryHeap::new();

    tentative.insert(start, 0);
    heap.push(Reverse((0, start, None)));

    while let Some(Reverse((cost, vertex, parent))) = heap.pop() {
        if solved.contains_key(vertex) {
            continue;
        }
        solved.insert(vertex, (cost, parent));
        log::trace!("settled {} at cost {}", vertex, cost);

        if vertex == end {
            return Ok(ShortestPath::Found {
                cost,
                path: trace_back(&solved, end),
            });
        }

        for (neighbor, &edge_cost) in graph.adjacent_vertices(vertex)? {
            if solved.contains_key(neighbor) {
                continue;
            }
            let candidate = cost.saturating_add(edge_cost);
            if tentative.get(neighbor).map_or(true, |&best| candidate < best) {
                tentative.insert(neighbor, candidate);
                heap.push(Reverse((candidate, neighbor, Some(vertex))));
            }
        }
    }

    Ok(ShortestPath::Unreachable)
}

/// Follow parent pointers from `end` back to the start, returning the path
/// in forward order.
fn trace_back<K: VertexId>(solved: &BTreeMap<&K, (Cost, Option<&K>)>, end: &K) -> Vec<K> {
    let mut path = vec![end.clone()];
    let mut current = end;
    while let Some(&(_, Some(parent))) = solved.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}

impl<E, K: VertexId> Graph<E, K> {
    /// Cheapest directed path from `start` to `end`.
    ///
    /// Fails if either vertex is unknown. An unreachable `end` is not an
    /// error; it yields [`ShortestPath::Unreachable`].
    pub fn shortest_path<Q>(&self, start: &Q, end: &Q) -> GraphResult<ShortestPath<K>>
    where
        K: Borrow<Q>,
        Q: Ord + fmt::Display + ?Sized,
    {
        dijkstra(self, start, end)
    }

    /// Sum of edge costs along `path`, failing if any step is not an edge.
    pub fn path_cost(&self, path: &[K]) -> GraphResult<Cost> {
        if let Some(first) = path.first() {
            self.resolve::<K>(first)?;
        }
        path.windows(2)
            .try_fold(0, |total: Cost, step| -> GraphResult<Cost> {
                Ok(total.saturating_add(self.cost::<K>(&step[0], &step[1])?))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_back_orders_start_to_end() {
        let (a, b, c) = ("a".to_string(), "b".to_string(), "c".to_string());
        let mut solved = BTreeMap::new();
        solved.insert(&a, (0, None));
        solved.insert(&b, (2, Some(&a)));
        solved.insert(&c, (5, Some(&b)));
        assert_eq!(trace_back(&solved, &c), vec!["a", "b", "c"]);
    }

    #[test]
    fn display_formats() {
        let found = ShortestPath::Found {
            cost: 4,
            path: vec!["A", "B", "D"],
        };
        assert_eq!(found.to_string(), "A -> B -> D (cost 4)");
        assert_eq!(ShortestPath::<&str>::Unreachable.to_string(), "unreachable");
    }
}

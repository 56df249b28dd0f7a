//! Weighted directed graph with per-vertex data.
//!
//! Vertices are identified by an ordered key (a `String` by default) and carry
//! arbitrary data. Edges are directed and weighted with a non-negative
//! [`Cost`]. The graph supports breadth-first and depth-first traversal driven
//! by a [`Visitor`], and Dijkstra shortest paths between two vertices.
//!
//! ```
//! use weighted_graph::{Graph, ShortestPath};
//!
//! let mut graph: Graph<&str> = Graph::new();
//! for id in ["A", "B", "C"] {
//!     graph.add_vertex(id.to_string(), "payload").unwrap();
//! }
//! graph.add_directed_edge("A", "B", 1).unwrap();
//! graph.add_directed_edge("B", "C", 2).unwrap();
//!
//! let mut order = Vec::new();
//! graph
//!     .breadth_first("A", &mut |id: &String, _: &&str| order.push(id.clone()))
//!     .unwrap();
//! assert_eq!(order, ["A", "B", "C"]);
//!
//! match graph.shortest_path("A", "C").unwrap() {
//!     ShortestPath::Found { cost, path } => {
//!         assert_eq!(cost, 3);
//!         assert_eq!(path, ["A", "B", "C"]);
//!     }
//!     ShortestPath::Unreachable => unreachable!(),
//! }
//! ```

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    bfs_traverse, dfs_traverse, dijkstra, Graph, GraphBuilder, ShortestPath, TraversalOrder,
    VisitOrder, Visitor,
};
pub use types::{Cost, GraphError, GraphResult, VertexId};

//! In-memory directed graph and the algorithms that run over it.

pub mod builder;
pub mod directed_graph;
pub mod shortest_path;
pub mod traversal;
pub mod visitor;

pub use builder::GraphBuilder;
pub use directed_graph::Graph;
pub use shortest_path::{dijkstra, ShortestPath};
pub use traversal::{bfs_traverse, dfs_traverse, TraversalOrder};
pub use visitor::{VisitOrder, Visitor};

//! In-memory directed attributed graph.
//!
//! Provides the vertex/edge arena, insertion-ordered edge and vertex
//! containers, lazy DFS/BFS walks, predicate-driven search strategies and
//! key-driven grouping, including grouping over multi-hop paths.
//!
//! # Example
//!
//! ```rust
//! use mgraph_core::graph::{find_first, Graph, SearchAlgorithm, VertexRef};
//!
//! let mut graph: Graph<u32, &'static str> = Graph::new();
//! let root = graph.add_vertex(0);
//! let leaf = graph.add_vertex(7);
//! graph.connect_to_with(root, leaf, "child").unwrap();
//!
//! let strategy = find_first(SearchAlgorithm::BreadthFirst, |v: VertexRef<'_, u32, &'static str>| {
//!     *v.data() == 7
//! });
//! let mut found = Vec::new();
//! graph
//!     .vertex(root)
//!     .unwrap()
//!     .traverse_with(&strategy, |v| {
//!         found.push(v.id());
//!         Ok::<(), std::convert::Infallible>(())
//!     })
//!     .unwrap();
//! assert_eq!(found, vec![leaf]);
//! ```

mod container;
mod grouping;
mod store;
mod strategy;
mod traversal;
mod types;
mod view;

#[cfg(test)]
mod container_tests;
#[cfg(test)]
mod strategy_tests;

pub use container::{EdgeSet, VertexSet};
pub use grouping::{
    edge_attribute_equals_to, go_over_edge, GroupedEdges, GroupedVertexes, PathExistence,
    PathGrouper, PathOverEdge,
};
pub use store::Graph;
pub use strategy::{find_all, find_first, find_n, FindAll, FindN, TraversingStrategy};
pub use traversal::{BreadthFirstWalk, DepthFirstWalk, GraphIterator, SearchAlgorithm, Walk};
pub use types::{Edge, EdgeId, Vertex, VertexId};
pub use view::{EdgeRef, Edges, VertexRef, Vertexes};

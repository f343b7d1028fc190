//! # mgraph Core
//!
//! In-memory, directed, attributed graph with pluggable traversal and a
//! grouping layer built on top of it.
//!
//! ## Features
//!
//! - **Attributed multi-edges**: parallel edges between the same vertices are kept
//! - **Lazy walks**: depth-first and breadth-first pull iterators
//! - **Search strategies**: first N, first, and all matches of a predicate
//! - **Grouping**: partition edges or vertices by caller-computed binary keys,
//!   directly or at the end of multi-hop attribute-filtered paths
//!
//! ## Quick Start
//!
//! ```rust
//! use mgraph_core::graph::{edge_attribute_equals_to, go_over_edge, Graph, VertexRef};
//!
//! let mut graph: Graph<&'static str, &'static str> = Graph::new();
//! let store = graph.add_vertex("store");
//! let cola = graph.add_vertex("cola");
//! let juice = graph.add_vertex("juice");
//! let drinks = graph.add_vertex("drinks");
//! graph.connect_to_with(store, cola, "sells").unwrap();
//! graph.connect_to_with(store, juice, "sells").unwrap();
//! graph.connect_to_with(cola, drinks, "category").unwrap();
//! graph.connect_to_with(juice, drinks, "category").unwrap();
//!
//! let grouper = go_over_edge(edge_attribute_equals_to("sells"))
//!     .group_vertexes_with(|product: VertexRef<'_, &'static str, &'static str>| {
//!         product
//!             .outgoing_which(edge_attribute_equals_to("category"))
//!             .vertexes()
//!             .first()
//!             .map(|category| category.data().as_bytes().to_vec())
//!             .unwrap_or_default()
//!     });
//!
//! let groups = graph.vertex(store).unwrap().group_vertexes(&grouper);
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].group_key, b"drinks".to_vec());
//! assert_eq!(groups[0].vertexes.len(), 2);
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use config::{GraphConfig, MgraphConfig, SearchConfig};
pub use error::{Error, Result};
pub use graph::{
    find_all, find_first, find_n, go_over_edge, EdgeRef, Edges, Graph, GraphIterator,
    SearchAlgorithm, TraversingStrategy, VertexId, VertexRef, Vertexes,
};

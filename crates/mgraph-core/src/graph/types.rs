//! Handles and records stored in a [`Graph`](super::Graph) arena.
//!
//! Vertices reference each other in both directions, so the graph owns every
//! record and vertices/edges are addressed by stable integer handles instead
//! of pointers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::container::{EdgeSet, VertexSet};

/// Stable handle of a vertex inside one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Stable handle of an edge record inside one graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Creates a handle from a raw arena index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A one-way edge record.
///
/// The record only knows its far endpoint: in an outgoing container that is
/// the destination, in an incoming container it is the source of the mirrored
/// connection.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<A> {
    pub(crate) vertex: VertexId,
    pub(crate) attributes: A,
}

impl<A> Edge<A> {
    /// Returns the vertex this edge points at.
    #[must_use]
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Returns the opaque attribute value carried by the edge.
    #[must_use]
    pub fn attributes(&self) -> &A {
        &self.attributes
    }
}

/// A vertex record: caller payload plus its edge and adjacency containers.
#[derive(Debug, Clone)]
pub struct Vertex<D> {
    pub(crate) data: D,
    pub(crate) outgoing: EdgeSet,
    pub(crate) incoming: EdgeSet,
    pub(crate) adjacent: VertexSet,
}

impl<D> Vertex<D> {
    pub(crate) fn with(data: D) -> Self {
        Self {
            data,
            outgoing: EdgeSet::new(),
            incoming: EdgeSet::new(),
            adjacent: VertexSet::new(),
        }
    }

    /// Returns the caller payload.
    #[must_use]
    pub fn data(&self) -> &D {
        &self.data
    }

    /// Returns the outgoing edge container.
    #[must_use]
    pub fn outgoing(&self) -> &EdgeSet {
        &self.outgoing
    }

    /// Returns the incoming edge container.
    #[must_use]
    pub fn incoming(&self) -> &EdgeSet {
        &self.incoming
    }

    /// Returns the vertices connected to this one in either direction.
    #[must_use]
    pub fn adjacent(&self) -> &VertexSet {
        &self.adjacent
    }
}

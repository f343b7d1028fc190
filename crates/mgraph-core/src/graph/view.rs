//! Borrowed, navigable views over a [`Graph`].
//!
//! A view pairs a handle (or a container of handles) with a shared borrow of
//! the graph, so predicates and key functions can walk further from the
//! element they receive. Views are `Copy`-cheap and hold no live alias into a
//! container that could change under them: the graph stays immutably
//! borrowed for as long as any view exists.

use std::borrow::Cow;
use std::fmt;
use std::ptr;

use super::container::{EdgeSet, VertexSet};
use super::store::Graph;
use super::types::{EdgeId, VertexId};

/// A vertex of a borrowed graph.
pub struct VertexRef<'g, D, A> {
    graph: &'g Graph<D, A>,
    id: VertexId,
}

impl<D, A> Clone for VertexRef<'_, D, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, A> Copy for VertexRef<'_, D, A> {}

impl<D, A> PartialEq for VertexRef<'_, D, A> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl<D, A> Eq for VertexRef<'_, D, A> {}

impl<D, A> fmt::Debug for VertexRef<'_, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("VertexRef").field(&self.id).finish()
    }
}

impl<D, A> From<VertexRef<'_, D, A>> for VertexId {
    fn from(vertex: VertexRef<'_, D, A>) -> Self {
        vertex.id
    }
}

impl<'g, D, A> VertexRef<'g, D, A> {
    pub(crate) fn new(graph: &'g Graph<D, A>, id: VertexId) -> Self {
        Self { graph, id }
    }

    /// Returns the vertex handle.
    #[must_use]
    pub fn id(self) -> VertexId {
        self.id
    }

    /// Returns the graph this vertex belongs to.
    #[must_use]
    pub fn graph(self) -> &'g Graph<D, A> {
        self.graph
    }

    /// Returns the caller payload.
    #[must_use]
    pub fn data(self) -> &'g D {
        &self.graph.record(self.id).data
    }

    /// Returns the live outgoing edge container.
    #[must_use]
    pub fn outgoing(self) -> Edges<'g, D, A> {
        Edges::borrowed(self.graph, &self.graph.record(self.id).outgoing)
    }

    /// Returns a new container with the outgoing edges matching `predicate`.
    #[must_use]
    pub fn outgoing_which<P>(self, predicate: P) -> Edges<'g, D, A>
    where
        P: FnMut(EdgeRef<'g, D, A>) -> bool,
    {
        self.outgoing().filter(predicate)
    }

    /// Returns the live incoming edge container.
    ///
    /// Each incoming edge points back at the vertex it came from.
    #[must_use]
    pub fn incoming(self) -> Edges<'g, D, A> {
        Edges::borrowed(self.graph, &self.graph.record(self.id).incoming)
    }

    /// Returns a new container with the incoming edges matching `predicate`.
    #[must_use]
    pub fn incoming_which<P>(self, predicate: P) -> Edges<'g, D, A>
    where
        P: FnMut(EdgeRef<'g, D, A>) -> bool,
    {
        self.incoming().filter(predicate)
    }

    /// Returns the vertices connected to this one in either direction.
    #[must_use]
    pub fn adjacent(self) -> Vertexes<'g, D, A> {
        Vertexes::borrowed(self.graph, &self.graph.record(self.id).adjacent)
    }

    /// Returns every outgoing edge whose destination is `to`, parallel edges
    /// included.
    #[must_use]
    pub fn edges_to(self, to: impl Into<VertexId>) -> Edges<'g, D, A> {
        let to = to.into();
        self.outgoing_which(|edge| edge.vertex().id() == to)
    }
}

/// An edge record of a borrowed graph.
pub struct EdgeRef<'g, D, A> {
    graph: &'g Graph<D, A>,
    id: EdgeId,
}

impl<D, A> Clone for EdgeRef<'_, D, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, A> Copy for EdgeRef<'_, D, A> {}

impl<D, A> PartialEq for EdgeRef<'_, D, A> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.graph, other.graph) && self.id == other.id
    }
}

impl<D, A> Eq for EdgeRef<'_, D, A> {}

impl<D, A> fmt::Debug for EdgeRef<'_, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EdgeRef")
            .field("id", &self.id)
            .field("vertex", &self.graph.edge_record(self.id).vertex)
            .finish()
    }
}

impl<'g, D, A> EdgeRef<'g, D, A> {
    pub(crate) fn new(graph: &'g Graph<D, A>, id: EdgeId) -> Self {
        Self { graph, id }
    }

    /// Returns the edge handle.
    #[must_use]
    pub fn id(self) -> EdgeId {
        self.id
    }

    /// Returns the vertex the edge points at.
    #[must_use]
    pub fn vertex(self) -> VertexRef<'g, D, A> {
        VertexRef::new(self.graph, self.graph.edge_record(self.id).vertex)
    }

    /// Returns the opaque attribute value.
    #[must_use]
    pub fn attributes(self) -> &'g A {
        &self.graph.edge_record(self.id).attributes
    }
}

/// An edge container bound to its graph.
///
/// Unfiltered vertex accessors borrow the vertex's own container; filtering,
/// merging and derived views build a new one.
pub struct Edges<'g, D, A> {
    graph: &'g Graph<D, A>,
    set: Cow<'g, EdgeSet>,
}

impl<D, A> fmt::Debug for Edges<'_, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.set.iter()).finish()
    }
}

impl<'g, D, A> Edges<'g, D, A> {
    pub(crate) fn borrowed(graph: &'g Graph<D, A>, set: &'g EdgeSet) -> Self {
        Self {
            graph,
            set: Cow::Borrowed(set),
        }
    }

    pub(crate) fn owned(graph: &'g Graph<D, A>, set: EdgeSet) -> Self {
        Self {
            graph,
            set: Cow::Owned(set),
        }
    }

    /// Returns true if this view borrows a vertex's own container.
    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self.set, Cow::Borrowed(_))
    }

    /// Returns the underlying handle container.
    #[must_use]
    pub fn as_set(&self) -> &EdgeSet {
        &self.set
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns true if the container holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Returns true if the edge is in this container.
    #[must_use]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.set.contains(edge)
    }

    /// Returns a fresh cursor over the edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = EdgeRef<'g, D, A>> + '_ {
        let graph = self.graph;
        self.set.iter().map(move |id| EdgeRef::new(graph, id))
    }

    /// Returns a new container with the edges matching `predicate`.
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(EdgeRef<'g, D, A>) -> bool,
    {
        let set = self.iter().filter(|edge| predicate(*edge)).map(EdgeRef::id).collect();
        Self::owned(self.graph, set)
    }

    /// Returns the vertex each edge points at, one entry per edge.
    #[must_use]
    pub fn vertexes(&self) -> Vec<VertexRef<'g, D, A>> {
        self.iter().map(EdgeRef::vertex).collect()
    }

    /// Returns the distinct vertices the edges point at.
    #[must_use]
    pub fn vertexes_set(&self) -> Vertexes<'g, D, A> {
        let set = self.iter().map(|edge| edge.vertex().id()).collect();
        Vertexes::owned(self.graph, set)
    }

    /// Builds a new container with `self`'s edges followed by `other`'s.
    ///
    /// Returns `None` if the containers belong to different graphs.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        ptr::eq(self.graph, other.graph)
            .then(|| Self::owned(self.graph, self.set.merge(&other.set)))
    }
}

/// A vertex container bound to its graph.
pub struct Vertexes<'g, D, A> {
    graph: &'g Graph<D, A>,
    set: Cow<'g, VertexSet>,
}

impl<D, A> fmt::Debug for Vertexes<'_, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.set.iter()).finish()
    }
}

impl<'g, D, A> Vertexes<'g, D, A> {
    pub(crate) fn borrowed(graph: &'g Graph<D, A>, set: &'g VertexSet) -> Self {
        Self {
            graph,
            set: Cow::Borrowed(set),
        }
    }

    pub(crate) fn owned(graph: &'g Graph<D, A>, set: VertexSet) -> Self {
        Self {
            graph,
            set: Cow::Owned(set),
        }
    }

    /// Returns the underlying handle container.
    #[must_use]
    pub fn as_set(&self) -> &VertexSet {
        &self.set
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// Returns true if the container holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Returns true if the vertex is in this container.
    #[must_use]
    pub fn contains(&self, vertex: impl Into<VertexId>) -> bool {
        self.set.contains(vertex.into())
    }

    /// Returns a fresh cursor over the vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = VertexRef<'g, D, A>> + '_ {
        let graph = self.graph;
        self.set.iter().map(move |id| VertexRef::new(graph, id))
    }

    /// Returns the first vertex whose payload matches `predicate`.
    pub fn contains_data<P>(&self, mut predicate: P) -> Option<VertexRef<'g, D, A>>
    where
        P: FnMut(&D) -> bool,
    {
        self.iter().find(|vertex| predicate(vertex.data()))
    }

    /// Returns the outgoing edges of every vertex that match `predicate`,
    /// grouped by vertex in container order.
    #[must_use]
    pub fn outgoing_which<P>(&self, mut predicate: P) -> Edges<'g, D, A>
    where
        P: FnMut(EdgeRef<'g, D, A>) -> bool,
    {
        let mut set = EdgeSet::new();
        for vertex in self.iter() {
            for edge in vertex.outgoing().iter() {
                if predicate(edge) {
                    set.put(edge.id());
                }
            }
        }
        Edges::owned(self.graph, set)
    }

    /// Builds a new container with `self`'s vertices followed by `other`'s.
    ///
    /// Returns `None` if the containers belong to different graphs.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Option<Self> {
        ptr::eq(self.graph, other.graph)
            .then(|| Self::owned(self.graph, self.set.merge(&other.set)))
    }
}

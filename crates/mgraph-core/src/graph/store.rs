//! Arena-backed storage for vertices and edges.
//!
//! Every connect operation writes two edge records: the forward record goes
//! into the source's outgoing container, the mirror record into the
//! destination's incoming container. Both endpoints record each other as
//! adjacent.

use crate::config::GraphConfig;
use crate::error::{Error, Result};

use super::types::{Edge, EdgeId, Vertex, VertexId};
use super::view::{EdgeRef, VertexRef};

/// In-memory directed attributed graph.
///
/// `D` is the vertex payload and `A` the edge attribute; neither is ever
/// interpreted by the graph itself. Vertices live as long as the graph.
#[derive(Debug, Clone)]
pub struct Graph<D, A> {
    vertices: Vec<Vertex<D>>,
    edges: Vec<Edge<A>>,
}

impl<D, A> Default for Graph<D, A> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<D, A> Graph<D, A> {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity.
    ///
    /// `expected_edges` counts connections; each one stores two records.
    #[must_use]
    pub fn with_capacity(expected_vertices: usize, expected_edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(expected_vertices),
            edges: Vec::with_capacity(expected_edges.saturating_mul(2)),
        }
    }

    /// Creates a graph sized by configuration.
    #[must_use]
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::with_capacity(config.expected_vertices, config.expected_edges)
    }

    // ── Vertices ───────────────────────────────────────────────────────

    /// Adds an isolated vertex holding `data`.
    pub fn add_vertex(&mut self, data: D) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::with(data));
        id
    }

    /// Returns a navigable view of a vertex.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<VertexRef<'_, D, A>> {
        self.has_vertex(id).then(|| VertexRef::new(self, id))
    }

    /// Returns a mutable reference to a vertex payload.
    #[must_use]
    pub fn data_mut(&mut self, id: VertexId) -> Option<&mut D> {
        self.vertices.get_mut(id.index()).map(|vertex| &mut vertex.data)
    }

    /// Returns true if the handle addresses a vertex of this graph.
    #[must_use]
    pub fn has_vertex(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterates over all vertices in creation order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexRef<'_, D, A>> + '_ {
        (0..self.vertices.len()).map(move |index| VertexRef::new(self, VertexId::new(index)))
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Returns a view of an edge record.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<EdgeRef<'_, D, A>> {
        (id.index() < self.edges.len()).then(|| EdgeRef::new(self, id))
    }

    /// Returns the number of edge records, mirror records included.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // ── Internal access for views ──────────────────────────────────────

    /// Handles reaching this point were produced by the graph itself.
    pub(crate) fn record(&self, id: VertexId) -> &Vertex<D> {
        &self.vertices[id.index()]
    }

    pub(crate) fn edge_record(&self, id: EdgeId) -> &Edge<A> {
        &self.edges[id.index()]
    }

    /// Snapshot of the destinations of a vertex's outgoing edges.
    pub(crate) fn destinations(&self, id: VertexId) -> Vec<VertexId> {
        self.record(id)
            .outgoing
            .iter()
            .map(|edge| self.edge_record(edge).vertex)
            .collect()
    }

    fn ensure_vertex(&self, id: VertexId) -> Result<()> {
        if self.has_vertex(id) {
            Ok(())
        } else {
            Err(Error::VertexNotFound(id))
        }
    }

    fn push_edge(&mut self, vertex: VertexId, attributes: A) -> EdgeId {
        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge { vertex, attributes });
        id
    }
}

impl<D, A: Clone> Graph<D, A> {
    /// Connects `from` to `to` with one directed edge carrying `attributes`.
    ///
    /// Repeating the call creates parallel edges; adjacency is recorded once
    /// per vertex pair.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either handle is not in this graph.
    pub fn connect_to_with(&mut self, from: VertexId, to: VertexId, attributes: A) -> Result<()> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;

        let forward = self.push_edge(to, attributes.clone());
        let mirror = self.push_edge(from, attributes);

        let source = &mut self.vertices[from.index()];
        source.outgoing.put(forward);
        source.adjacent.put(to);

        let destination = &mut self.vertices[to.index()];
        destination.incoming.put(mirror);
        destination.adjacent.put(from);

        tracing::trace!(%from, %to, %forward, %mirror, "connected vertices");
        Ok(())
    }

    /// Connects two vertices in both directions with independent edges.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either handle is not in this graph.
    pub fn connect_both_with(&mut self, one: VertexId, another: VertexId, attributes: A) -> Result<()> {
        self.ensure_vertex(one)?;
        self.ensure_vertex(another)?;
        self.connect_to_with(one, another, attributes.clone())?;
        self.connect_to_with(another, one, attributes)
    }
}

impl<D, A: Clone + Default> Graph<D, A> {
    /// Connects `from` to `to` with a default attribute.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either handle is not in this graph.
    pub fn connect_to(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.connect_to_with(from, to, A::default())
    }

    /// Connects two vertices in both directions with a default attribute.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either handle is not in this graph.
    pub fn connect_both(&mut self, one: VertexId, another: VertexId) -> Result<()> {
        self.connect_both_with(one, another, A::default())
    }
}

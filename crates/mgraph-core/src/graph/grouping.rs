//! Grouping of edge and vertex containers by caller-computed binary keys.
//!
//! Groups are gathered in a hash map from key bytes to members, so the order
//! in which groups are returned or handed to a callback is unspecified.
//! Members inside one group keep the order of the source container.
//!
//! Path grouping walks a chain of edge predicates from a start vertex. Every
//! hop follows incoming and outgoing edges alike; a predicate that should
//! only accept one direction has to tell them apart through the attribute.

use std::fmt;

use rustc_hash::FxHashMap;

use super::container::VertexSet;
use super::view::{EdgeRef, Edges, VertexRef, Vertexes};

/// Edges sharing one group key.
#[derive(Debug)]
pub struct GroupedEdges<'g, D, A> {
    /// Key bytes produced by the key function.
    pub group_key: Vec<u8>,
    /// Members in source container order.
    pub edges: Vec<EdgeRef<'g, D, A>>,
}

/// Vertices sharing one group key.
#[derive(Debug)]
pub struct GroupedVertexes<'g, D, A> {
    /// Key bytes produced by the key function.
    pub group_key: Vec<u8>,
    /// Members in source container order.
    pub vertexes: Vec<VertexRef<'g, D, A>>,
}

type Groups<T> = FxHashMap<Vec<u8>, Vec<T>>;

fn group_into<T, I, K, B>(groups: &mut Groups<T>, items: I, key: &mut K)
where
    T: Copy,
    I: IntoIterator<Item = T>,
    K: FnMut(T) -> B,
    B: Into<Vec<u8>>,
{
    for item in items {
        groups.entry(key(item).into()).or_default().push(item);
    }
}

fn apply_groups<T, F, E>(groups: Groups<T>, mut action: F) -> Result<(), E>
where
    F: FnMut(&[u8], Vec<T>) -> Result<(), E>,
{
    for (group_key, members) in groups {
        action(&group_key, members)?;
    }
    Ok(())
}

fn edge_groups<'g, D, A>(groups: Groups<EdgeRef<'g, D, A>>) -> Vec<GroupedEdges<'g, D, A>> {
    groups
        .into_iter()
        .map(|(group_key, edges)| GroupedEdges { group_key, edges })
        .collect()
}

fn vertex_groups<'g, D, A>(groups: Groups<VertexRef<'g, D, A>>) -> Vec<GroupedVertexes<'g, D, A>> {
    groups
        .into_iter()
        .map(|(group_key, vertexes)| GroupedVertexes { group_key, vertexes })
        .collect()
}

impl<'g, D, A> Edges<'g, D, A> {
    fn groups<K, B>(&self, mut key: K) -> Groups<EdgeRef<'g, D, A>>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
    {
        let mut groups = Groups::default();
        group_into(&mut groups, self.iter(), &mut key);
        groups
    }

    /// Partitions the edges by `key` and returns every group.
    #[must_use]
    pub fn grouped_by<K, B>(&self, key: K) -> Vec<GroupedEdges<'g, D, A>>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
    {
        edge_groups(self.groups(key))
    }

    /// Partitions the edges by `key` and hands each group to `action`.
    ///
    /// The first error returned by `action` stops the remaining groups and
    /// is returned unchanged.
    pub fn group_by<K, B, F, E>(&self, key: K, action: F) -> Result<(), E>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
        F: FnMut(&[u8], Vec<EdgeRef<'g, D, A>>) -> Result<(), E>,
    {
        apply_groups(self.groups(key), action)
    }
}

impl<'g, D, A> Vertexes<'g, D, A> {
    fn groups<K, B>(&self, mut key: K) -> Groups<VertexRef<'g, D, A>>
    where
        K: FnMut(VertexRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
    {
        let mut groups = Groups::default();
        group_into(&mut groups, self.iter(), &mut key);
        groups
    }

    /// Partitions the vertices by `key` and returns every group.
    #[must_use]
    pub fn grouped_by<K, B>(&self, key: K) -> Vec<GroupedVertexes<'g, D, A>>
    where
        K: FnMut(VertexRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
    {
        vertex_groups(self.groups(key))
    }

    /// Partitions the vertices by `key` and hands each group to `action`.
    ///
    /// The first error returned by `action` stops the remaining groups and
    /// is returned unchanged.
    pub fn group_by<K, B, F, E>(&self, key: K, action: F) -> Result<(), E>
    where
        K: FnMut(VertexRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
        F: FnMut(&[u8], Vec<VertexRef<'g, D, A>>) -> Result<(), E>,
    {
        apply_groups(self.groups(key), action)
    }
}

impl<'g, D, A> VertexRef<'g, D, A> {
    /// Outgoing groups extended with the incoming edges that map to the same
    /// key. Incoming edges with a key no outgoing edge produced form groups
    /// of their own.
    fn combined_groups<K, B>(self, mut key: K) -> Groups<EdgeRef<'g, D, A>>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
    {
        let mut groups = self.outgoing().groups(&mut key);
        group_into(&mut groups, self.incoming().iter(), &mut key);
        groups
    }

    /// Groups outgoing and incoming edges together under one key space.
    #[must_use]
    pub fn grouped_by<K, B>(self, key: K) -> Vec<GroupedEdges<'g, D, A>>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
    {
        edge_groups(self.combined_groups(key))
    }

    /// Callback form of [`VertexRef::grouped_by`].
    pub fn group_by<K, B, F, E>(self, key: K, action: F) -> Result<(), E>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
        F: FnMut(&[u8], Vec<EdgeRef<'g, D, A>>) -> Result<(), E>,
    {
        apply_groups(self.combined_groups(key), action)
    }

    /// Groups the outgoing edges.
    #[must_use]
    pub fn grouped_outgoing_by<K, B>(self, key: K) -> Vec<GroupedEdges<'g, D, A>>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
    {
        self.outgoing().grouped_by(key)
    }

    /// Callback form of [`VertexRef::grouped_outgoing_by`].
    pub fn group_outgoing_by<K, B, F, E>(self, key: K, action: F) -> Result<(), E>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
        F: FnMut(&[u8], Vec<EdgeRef<'g, D, A>>) -> Result<(), E>,
    {
        self.outgoing().group_by(key, action)
    }

    /// Groups the incoming edges.
    #[must_use]
    pub fn grouped_incoming_by<K, B>(self, key: K) -> Vec<GroupedEdges<'g, D, A>>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
    {
        self.incoming().grouped_by(key)
    }

    /// Callback form of [`VertexRef::grouped_incoming_by`].
    pub fn group_incoming_by<K, B, F, E>(self, key: K, action: F) -> Result<(), E>
    where
        K: FnMut(EdgeRef<'g, D, A>) -> B,
        B: Into<Vec<u8>>,
        F: FnMut(&[u8], Vec<EdgeRef<'g, D, A>>) -> Result<(), E>,
    {
        self.incoming().group_by(key, action)
    }

    /// Follows the hops of `grouper` from this vertex and groups the vertices
    /// at the end of the path.
    #[must_use]
    pub fn group_vertexes(self, grouper: &PathGrouper<'_, D, A>) -> Vec<GroupedVertexes<'g, D, A>> {
        grouper
            .path
            .follow(self)
            .grouped_by(|vertex| (grouper.key)(vertex))
    }

    /// Follows the hops of `checker` from this vertex and reports whether any
    /// vertex at the end of the path matches.
    #[must_use]
    pub fn exist_vertexes(self, checker: &PathExistence<'_, D, A>) -> bool {
        checker
            .path
            .follow(self)
            .iter()
            .any(|vertex| (checker.matches)(vertex))
    }
}

type EdgeSelector<'p, D, A> = Box<dyn Fn(EdgeRef<'_, D, A>) -> bool + 'p>;

/// A chain of edge predicates, one per hop.
pub struct PathOverEdge<'p, D, A> {
    selectors: Vec<EdgeSelector<'p, D, A>>,
}

impl<D, A> fmt::Debug for PathOverEdge<'_, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathOverEdge")
            .field("hops", &self.selectors.len())
            .finish()
    }
}

impl<D, A> Default for PathOverEdge<'_, D, A> {
    fn default() -> Self {
        Self {
            selectors: Vec::new(),
        }
    }
}

/// Starts a path whose first hop follows edges matching `selector`.
pub fn go_over_edge<'p, D, A, P>(selector: P) -> PathOverEdge<'p, D, A>
where
    P: Fn(EdgeRef<'_, D, A>) -> bool + 'p,
{
    PathOverEdge::new().go_over_edge(selector)
}

impl<'p, D, A> PathOverEdge<'p, D, A> {
    /// Creates a path with no hops; following it stays at the start vertex.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a hop following edges matching `selector`.
    #[must_use]
    pub fn go_over_edge<P>(mut self, selector: P) -> Self
    where
        P: Fn(EdgeRef<'_, D, A>) -> bool + 'p,
    {
        self.selectors.push(Box::new(selector));
        self
    }

    /// Returns the number of hops.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.selectors.len()
    }

    /// Finishes the path with a key function for the vertices it reaches.
    #[must_use]
    pub fn group_vertexes_with<K, B>(self, key: K) -> PathGrouper<'p, D, A>
    where
        K: Fn(VertexRef<'_, D, A>) -> B + 'p,
        B: Into<Vec<u8>>,
    {
        PathGrouper {
            path: self,
            key: Box::new(move |vertex: VertexRef<'_, D, A>| -> Vec<u8> { key(vertex).into() }),
        }
    }

    /// Finishes the path with a predicate for the vertices it reaches.
    #[must_use]
    pub fn exist_vertexes_with<P>(self, matches: P) -> PathExistence<'p, D, A>
    where
        P: Fn(VertexRef<'_, D, A>) -> bool + 'p,
    {
        PathExistence {
            path: self,
            matches: Box::new(matches),
        }
    }

    /// Expands the frontier one hop per selector, deduplicating vertices
    /// reached more than once within a hop.
    fn follow<'g>(&self, start: VertexRef<'g, D, A>) -> Vertexes<'g, D, A> {
        let graph = start.graph();
        let mut frontier: VertexSet = std::iter::once(start.id()).collect();

        for (hop, selector) in self.selectors.iter().enumerate() {
            let mut next = VertexSet::new();
            for id in &frontier {
                let vertex = VertexRef::new(graph, id);
                for edge in vertex.incoming().iter().chain(vertex.outgoing().iter()) {
                    if selector(edge) {
                        next.put(edge.vertex().id());
                    }
                }
            }
            tracing::debug!(hop, frontier = next.len(), "path hop expanded");
            frontier = next;
        }

        Vertexes::owned(graph, frontier)
    }
}

type VertexKey<'p, D, A> = Box<dyn Fn(VertexRef<'_, D, A>) -> Vec<u8> + 'p>;

/// A path plus the key function grouping the vertices at its end.
pub struct PathGrouper<'p, D, A> {
    path: PathOverEdge<'p, D, A>,
    key: VertexKey<'p, D, A>,
}

impl<D, A> fmt::Debug for PathGrouper<'_, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathGrouper")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

type VertexMatcher<'p, D, A> = Box<dyn Fn(VertexRef<'_, D, A>) -> bool + 'p>;

/// A path plus the predicate checked against the vertices at its end.
pub struct PathExistence<'p, D, A> {
    path: PathOverEdge<'p, D, A>,
    matches: VertexMatcher<'p, D, A>,
}

impl<D, A> fmt::Debug for PathExistence<'_, D, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathExistence")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Edge predicate accepting edges whose attribute equals `value`.
pub fn edge_attribute_equals_to<D, A>(value: A) -> impl Fn(EdgeRef<'_, D, A>) -> bool
where
    A: PartialEq,
{
    move |edge: EdgeRef<'_, D, A>| *edge.attributes() == value
}

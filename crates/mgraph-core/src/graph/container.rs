//! Insertion-ordered containers of edge and vertex handles.
//!
//! Both containers keep an element-to-position index next to the ordered
//! element list, so membership is O(1) and iteration follows insertion order.
//! Positions are contiguous from 0. [`EdgeSet::merge`] and
//! [`VertexSet::merge`] append: the second container's elements are
//! re-positioned after the first's and duplicates are kept.

use std::hash::Hash;
use std::iter::Copied;
use std::slice;

use rustc_hash::FxHashMap;

use super::types::{EdgeId, VertexId};

#[derive(Debug, Clone)]
struct OrderedSet<T> {
    /// Element -> position of its first insertion.
    positions: FxHashMap<T, usize>,
    /// Position -> element.
    order: Vec<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            positions: FxHashMap::default(),
            order: Vec::new(),
        }
    }
}

impl<T: Copy + Eq + Hash> OrderedSet<T> {
    fn append(&mut self, item: T) {
        self.positions.entry(item).or_insert(self.order.len());
        self.order.push(item);
    }

    fn insert(&mut self, item: T) -> bool {
        if self.positions.contains_key(&item) {
            return false;
        }
        self.append(item);
        true
    }

    fn contains(&self, item: T) -> bool {
        self.positions.contains_key(&item)
    }

    fn position(&self, item: T) -> Option<usize> {
        self.positions.get(&item).copied()
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn iter(&self) -> Copied<slice::Iter<'_, T>> {
        self.order.iter().copied()
    }

    fn merge(&self, other: &Self) -> Self {
        let mut merged = Self {
            positions: FxHashMap::with_capacity_and_hasher(
                self.len() + other.len(),
                Default::default(),
            ),
            order: Vec::with_capacity(self.len() + other.len()),
        };
        for item in self.iter().chain(other.iter()) {
            merged.append(item);
        }
        merged
    }
}

/// Insertion-ordered container of edge handles.
///
/// Every connect operation creates fresh edge records, so `put` never has to
/// deduplicate: parallel edges between the same vertices stay distinct.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    inner: OrderedSet<EdgeId>,
}

impl EdgeSet {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an edge handle.
    pub fn put(&mut self, edge: EdgeId) {
        self.inner.append(edge);
    }

    /// Returns true if the handle was put into this container.
    #[must_use]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.inner.contains(edge)
    }

    /// Returns the position at which the handle was first put.
    #[must_use]
    pub fn position(&self, edge: EdgeId) -> Option<usize> {
        self.inner.position(edge)
    }

    /// Returns the number of stored handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the container holds no handles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Returns a fresh cursor over the handles in insertion order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, EdgeId>> {
        self.inner.iter()
    }

    /// Builds a new container holding `self`'s handles followed by `other`'s.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            inner: self.inner.merge(&other.inner),
        }
    }
}

impl FromIterator<EdgeId> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = EdgeId>>(iter: I) -> Self {
        let mut set = Self::new();
        for edge in iter {
            set.put(edge);
        }
        set
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = EdgeId;
    type IntoIter = Copied<slice::Iter<'a, EdgeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Insertion-ordered container of vertex handles keyed by vertex identity.
///
/// `put` ignores a vertex that is already present.
#[derive(Debug, Clone, Default)]
pub struct VertexSet {
    inner: OrderedSet<VertexId>,
}

impl VertexSet {
    /// Creates an empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex handle unless it is already present.
    ///
    /// Returns true if the handle was added.
    pub fn put(&mut self, vertex: VertexId) -> bool {
        self.inner.insert(vertex)
    }

    /// Returns true if the vertex is present.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.inner.contains(vertex)
    }

    /// Returns the position at which the vertex was first added.
    #[must_use]
    pub fn position(&self, vertex: VertexId) -> Option<usize> {
        self.inner.position(vertex)
    }

    /// Returns the number of stored handles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the container holds no handles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Returns a fresh cursor over the handles in insertion order.
    pub fn iter(&self) -> Copied<slice::Iter<'_, VertexId>> {
        self.inner.iter()
    }

    /// Builds a new container holding `self`'s handles followed by `other`'s.
    ///
    /// Vertices present in both inputs appear twice in the result.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            inner: self.inner.merge(&other.inner),
        }
    }
}

impl FromIterator<VertexId> for VertexSet {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        let mut set = Self::new();
        for vertex in iter {
            set.put(vertex);
        }
        set
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = VertexId;
    type IntoIter = Copied<slice::Iter<'a, VertexId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

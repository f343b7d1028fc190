//! Lazy depth-first and breadth-first walks over the reachable graph.
//!
//! Walks keep no visited set: a vertex reachable through several paths is
//! yielded once per path, and a cycle keeps a walk going forever. Callers
//! bound cyclic walks with [`Walk::with_max_visits`], which caps how many
//! vertices the walk enters. A depth-first walk enters a vertex when it opens
//! its frame, before yielding it, so the cap also bounds descent into a cycle
//! that would otherwise never yield.
//!
//! Outgoing destinations are snapshotted when a vertex is expanded, so a walk
//! never aliases a live edge container.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use super::store::Graph;
use super::types::VertexId;
use super::view::VertexRef;

/// Walk order selector.
///
/// Unrecognized selectors map to [`SearchAlgorithm::Unknown`], whose walk is
/// empty from the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Depth-first: a vertex is yielded after all of its descendants.
    #[default]
    DepthFirst,
    /// Breadth-first: vertices are yielded in increasing hop distance.
    BreadthFirst,
    /// Any unrecognized selector.
    #[serde(other)]
    Unknown,
}

impl SearchAlgorithm {
    /// Maps a numeric selector: `0` is depth-first, `1` breadth-first.
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::DepthFirst,
            1 => Self::BreadthFirst,
            _ => Self::Unknown,
        }
    }

    /// Starts a walk at `vertex`.
    #[must_use]
    pub fn start_at<'g, D, A>(self, vertex: VertexRef<'g, D, A>) -> Walk<'g, D, A> {
        match self {
            Self::DepthFirst => Walk::DepthFirst(DepthFirstWalk::new(vertex)),
            Self::BreadthFirst => Walk::BreadthFirst(BreadthFirstWalk::new(vertex)),
            Self::Unknown => {
                tracing::warn!(start = %vertex.id(), "unknown search algorithm, walk is empty");
                Walk::Exhausted
            }
        }
    }
}

/// Pull protocol shared by all walks.
///
/// `has_next` reports whether `next_vertex` can produce a vertex.
pub trait GraphIterator: Iterator {
    /// Returns true if the walk has another vertex.
    fn has_next(&self) -> bool;

    /// Returns the next vertex.
    ///
    /// # Panics
    ///
    /// Panics if the walk is exhausted; check [`GraphIterator::has_next`] first.
    fn next_vertex(&mut self) -> Self::Item {
        match self.next() {
            Some(item) => item,
            None => panic!("next_vertex called on an exhausted walk"),
        }
    }
}

/// A walk produced by [`SearchAlgorithm::start_at`].
#[derive(Debug)]
pub enum Walk<'g, D, A> {
    /// Depth-first walk.
    DepthFirst(DepthFirstWalk<'g, D, A>),
    /// Breadth-first walk.
    BreadthFirst(BreadthFirstWalk<'g, D, A>),
    /// Walk for an unknown selector; never yields.
    Exhausted,
}

impl<D, A> Walk<'_, D, A> {
    /// Caps the number of vertices the walk enters, the start included.
    ///
    /// Once the cap is reached a depth-first walk stops descending and only
    /// yields the frames it already opened; a breadth-first walk stops
    /// yielding.
    #[must_use]
    pub fn with_max_visits(self, max_visits: usize) -> Self {
        match self {
            Self::DepthFirst(walk) => Self::DepthFirst(walk.with_max_visits(max_visits)),
            Self::BreadthFirst(walk) => Self::BreadthFirst(walk.with_max_visits(max_visits)),
            Self::Exhausted => Self::Exhausted,
        }
    }

    /// Returns the number of vertices entered so far.
    #[must_use]
    pub fn visited(&self) -> usize {
        match self {
            Self::DepthFirst(walk) => walk.visited,
            Self::BreadthFirst(walk) => walk.cursor,
            Self::Exhausted => 0,
        }
    }

    /// Returns true if the visit cap cut off part of the reachable walk.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        match self {
            Self::DepthFirst(walk) => walk.truncated,
            Self::BreadthFirst(walk) => walk.is_truncated(),
            Self::Exhausted => false,
        }
    }
}

impl<'g, D, A> Iterator for Walk<'g, D, A> {
    type Item = VertexRef<'g, D, A>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::DepthFirst(walk) => walk.next(),
            Self::BreadthFirst(walk) => walk.next(),
            Self::Exhausted => None,
        }
    }
}

impl<D, A> GraphIterator for Walk<'_, D, A> {
    fn has_next(&self) -> bool {
        match self {
            Self::DepthFirst(walk) => walk.has_next(),
            Self::BreadthFirst(walk) => walk.has_next(),
            Self::Exhausted => false,
        }
    }
}

impl<D, A> FusedIterator for Walk<'_, D, A> {}

#[derive(Debug)]
struct Frame {
    vertex: VertexId,
    children: Vec<VertexId>,
    cursor: usize,
}

impl Frame {
    fn open<D, A>(graph: &Graph<D, A>, vertex: VertexId) -> Self {
        Self {
            vertex,
            children: graph.destinations(vertex),
            cursor: 0,
        }
    }
}

/// Depth-first walk over an explicit frame stack.
///
/// Each step descends into the next unvisited child of the top frame until it
/// reaches a frame with no children left, then pops and yields that frame's
/// vertex. The start vertex is yielded last.
pub struct DepthFirstWalk<'g, D, A> {
    graph: &'g Graph<D, A>,
    stack: Vec<Frame>,
    /// Frames opened so far.
    visited: usize,
    max_visits: Option<usize>,
    truncated: bool,
}

impl<D, A> std::fmt::Debug for DepthFirstWalk<'_, D, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DepthFirstWalk")
            .field("depth", &self.stack.len())
            .field("visited", &self.visited)
            .field("max_visits", &self.max_visits)
            .finish()
    }
}

impl<'g, D, A> DepthFirstWalk<'g, D, A> {
    fn new(start: VertexRef<'g, D, A>) -> Self {
        let graph = start.graph();
        Self {
            graph,
            stack: vec![Frame::open(graph, start.id())],
            visited: 1,
            max_visits: None,
            truncated: false,
        }
    }

    fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = Some(max_visits);
        if max_visits < self.visited {
            self.stack.clear();
            self.visited = 0;
            self.truncated = true;
        }
        self
    }

    fn may_descend(&self) -> bool {
        self.max_visits.map_or(true, |limit| self.visited < limit)
    }
}

impl<'g, D, A> Iterator for DepthFirstWalk<'g, D, A> {
    type Item = VertexRef<'g, D, A>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let may_descend = self.may_descend();
            let top = self.stack.last_mut()?;
            match top.children.get(top.cursor).copied() {
                Some(child) if may_descend => {
                    top.cursor += 1;
                    let frame = Frame::open(self.graph, child);
                    self.stack.push(frame);
                    self.visited += 1;
                }
                pending => {
                    self.truncated |= pending.is_some();
                    let done = self.stack.pop()?;
                    return Some(VertexRef::new(self.graph, done.vertex));
                }
            }
        }
    }
}

impl<D, A> GraphIterator for DepthFirstWalk<'_, D, A> {
    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}

impl<D, A> FusedIterator for DepthFirstWalk<'_, D, A> {}

/// Breadth-first walk over a growing, index-addressed frontier.
///
/// Each step yields the vertex under the cursor and appends its outgoing
/// destinations to the end of the frontier.
pub struct BreadthFirstWalk<'g, D, A> {
    graph: &'g Graph<D, A>,
    frontier: Vec<VertexId>,
    /// Vertices yielded so far.
    cursor: usize,
    max_visits: Option<usize>,
}

impl<D, A> std::fmt::Debug for BreadthFirstWalk<'_, D, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BreadthFirstWalk")
            .field("cursor", &self.cursor)
            .field("frontier", &self.frontier.len())
            .field("max_visits", &self.max_visits)
            .finish()
    }
}

impl<'g, D, A> BreadthFirstWalk<'g, D, A> {
    fn new(start: VertexRef<'g, D, A>) -> Self {
        Self {
            graph: start.graph(),
            frontier: vec![start.id()],
            cursor: 0,
            max_visits: None,
        }
    }

    fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = Some(max_visits);
        self
    }

    fn within_budget(&self) -> bool {
        self.max_visits.map_or(true, |limit| self.cursor < limit)
    }

    fn is_truncated(&self) -> bool {
        !self.within_budget() && self.cursor < self.frontier.len()
    }
}

impl<'g, D, A> Iterator for BreadthFirstWalk<'g, D, A> {
    type Item = VertexRef<'g, D, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.within_budget() {
            return None;
        }
        let vertex = *self.frontier.get(self.cursor)?;
        self.cursor += 1;
        self.frontier.extend(self.graph.destinations(vertex));
        Some(VertexRef::new(self.graph, vertex))
    }
}

impl<D, A> GraphIterator for BreadthFirstWalk<'_, D, A> {
    fn has_next(&self) -> bool {
        self.within_budget() && self.cursor < self.frontier.len()
    }
}

impl<D, A> FusedIterator for BreadthFirstWalk<'_, D, A> {}

impl<'g, D, A> VertexRef<'g, D, A> {
    /// Starts a walk at this vertex.
    #[must_use]
    pub fn walk(self, algorithm: SearchAlgorithm) -> Walk<'g, D, A> {
        algorithm.start_at(self)
    }
}

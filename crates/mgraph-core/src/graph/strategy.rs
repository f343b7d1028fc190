//! Predicate-driven search strategies layered over walks.
//!
//! A strategy drives a [`Walk`](super::Walk) from a start vertex and
//! collects the vertices its predicate accepts, in discovery order.
//! [`VertexRef::traverse_with`] then hands each match to a caller action.

use std::fmt;

use super::traversal::{GraphIterator, SearchAlgorithm, Walk};
use super::view::VertexRef;

/// Rules for searching a graph from a start vertex.
pub trait TraversingStrategy<D, A> {
    /// Runs the search and returns the matches in discovery order.
    fn search<'g>(&self, start: VertexRef<'g, D, A>) -> Vec<VertexRef<'g, D, A>>;
}

/// Collects the first `number` vertices accepted by a predicate.
///
/// Stops as soon as enough matches are found or the walk is exhausted.
pub struct FindN<P> {
    algorithm: SearchAlgorithm,
    number: usize,
    is_found: P,
    max_visits: Option<usize>,
}

impl<P> fmt::Debug for FindN<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindN")
            .field("algorithm", &self.algorithm)
            .field("number", &self.number)
            .field("max_visits", &self.max_visits)
            .finish_non_exhaustive()
    }
}

impl<P> FindN<P> {
    /// Stops the search after the walk has entered `max_visits` vertices.
    ///
    /// See [`Walk::with_max_visits`]; the cap also bounds depth-first descent
    /// into cycles.
    #[must_use]
    pub fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = Some(max_visits);
        self
    }

    /// Returns the walk order used by this strategy.
    #[must_use]
    pub fn algorithm(&self) -> SearchAlgorithm {
        self.algorithm
    }
}

/// Returns the first `number` vertices matching `is_found`.
pub fn find_n<D, A, P>(algorithm: SearchAlgorithm, number: usize, is_found: P) -> FindN<P>
where
    P: Fn(VertexRef<'_, D, A>) -> bool,
{
    FindN {
        algorithm,
        number,
        is_found,
        max_visits: None,
    }
}

/// Returns the first vertex matching `is_found`.
pub fn find_first<D, A, P>(algorithm: SearchAlgorithm, is_found: P) -> FindN<P>
where
    P: Fn(VertexRef<'_, D, A>) -> bool,
{
    find_n(algorithm, 1, is_found)
}

impl<D, A, P> TraversingStrategy<D, A> for FindN<P>
where
    P: Fn(VertexRef<'_, D, A>) -> bool,
{
    fn search<'g>(&self, start: VertexRef<'g, D, A>) -> Vec<VertexRef<'g, D, A>> {
        let mut found = Vec::new();
        let mut remaining = self.number;
        let mut walk = bounded(self.algorithm.start_at(start), self.max_visits);

        while remaining != 0 && walk.has_next() {
            let vertex = walk.next_vertex();
            if (self.is_found)(vertex) {
                found.push(vertex);
                remaining -= 1;
            }
        }

        report_budget(&walk, self.max_visits, remaining != 0);
        tracing::debug!(
            algorithm = ?self.algorithm,
            start = %start.id(),
            visits = walk.visited(),
            matches = found.len(),
            "find_n finished"
        );
        found
    }
}

/// Collects every vertex accepted by a predicate over a breadth-first walk.
pub struct FindAll<P> {
    is_found: P,
    max_visits: Option<usize>,
}

impl<P> fmt::Debug for FindAll<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FindAll")
            .field("max_visits", &self.max_visits)
            .finish_non_exhaustive()
    }
}

impl<P> FindAll<P> {
    /// Stops the search after the walk has entered `max_visits` vertices.
    ///
    /// See [`Walk::with_max_visits`]; the cap also bounds depth-first descent
    /// into cycles.
    #[must_use]
    pub fn with_max_visits(mut self, max_visits: usize) -> Self {
        self.max_visits = Some(max_visits);
        self
    }
}

/// Returns every reachable vertex matching `is_found`.
///
/// The walk is always breadth-first and runs until exhausted, so on a cyclic
/// graph the search only ends once a visit budget is set.
pub fn find_all<D, A, P>(is_found: P) -> FindAll<P>
where
    P: Fn(VertexRef<'_, D, A>) -> bool,
{
    FindAll {
        is_found,
        max_visits: None,
    }
}

impl<D, A, P> TraversingStrategy<D, A> for FindAll<P>
where
    P: Fn(VertexRef<'_, D, A>) -> bool,
{
    fn search<'g>(&self, start: VertexRef<'g, D, A>) -> Vec<VertexRef<'g, D, A>> {
        let mut found = Vec::new();
        let mut walk = bounded(SearchAlgorithm::BreadthFirst.start_at(start), self.max_visits);

        for vertex in walk.by_ref() {
            if (self.is_found)(vertex) {
                found.push(vertex);
            }
        }

        report_budget(&walk, self.max_visits, true);
        tracing::debug!(
            start = %start.id(),
            visits = walk.visited(),
            matches = found.len(),
            "find_all finished"
        );
        found
    }
}

fn bounded<D, A>(walk: Walk<'_, D, A>, max_visits: Option<usize>) -> Walk<'_, D, A> {
    match max_visits {
        Some(limit) => walk.with_max_visits(limit),
        None => walk,
    }
}

/// Warns when the visit cap, not the walk or the match count, ended a search.
fn report_budget<D, A>(walk: &Walk<'_, D, A>, max_visits: Option<usize>, wanted_more: bool) {
    if let Some(limit) = max_visits {
        if wanted_more && walk.is_truncated() {
            tracing::warn!(limit, "search stopped: visit budget exhausted");
        }
    }
}

impl<'g, D, A> VertexRef<'g, D, A> {
    /// Searches from this vertex with `strategy` and applies `action` to every
    /// match in discovery order.
    ///
    /// The first error returned by `action` stops the traversal and is
    /// returned unchanged.
    pub fn traverse_with<S, F, E>(self, strategy: &S, mut action: F) -> Result<(), E>
    where
        S: TraversingStrategy<D, A> + ?Sized,
        F: FnMut(VertexRef<'g, D, A>) -> Result<(), E>,
    {
        for vertex in strategy.search(self) {
            action(vertex)?;
        }
        Ok(())
    }
}

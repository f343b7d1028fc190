//! Tests for FindN, FindAll and traverse_with.

use std::cell::Cell;
use std::convert::Infallible;

use super::store::Graph;
use super::strategy::{find_all, find_first, find_n, TraversingStrategy};
use super::traversal::SearchAlgorithm;
use super::types::VertexId;
use super::view::VertexRef;

type Vtx<'g> = VertexRef<'g, u32, ()>;

/// v0 -> v1, v0 -> v4 -> (v2, v3), v0 -> v5; payload equals the index.
fn tree() -> (Graph<u32, ()>, VertexId) {
    let mut graph = Graph::new();
    let ids: Vec<VertexId> = (0..6).map(|i| graph.add_vertex(i)).collect();
    graph.connect_to(ids[0], ids[1]).unwrap();
    graph.connect_to(ids[0], ids[4]).unwrap();
    graph.connect_to(ids[4], ids[2]).unwrap();
    graph.connect_to(ids[4], ids[3]).unwrap();
    graph.connect_to(ids[0], ids[5]).unwrap();
    (graph, ids[0])
}

fn data(found: &[Vtx<'_>]) -> Vec<u32> {
    found.iter().map(|v| *v.data()).collect()
}

#[test]
fn test_find_first_depth_first_check_count() {
    let (graph, root) = tree();
    let checks = Cell::new(0);
    let strategy = find_first(SearchAlgorithm::DepthFirst, |v: Vtx<'_>| {
        checks.set(checks.get() + 1);
        *v.data() == 3
    });

    let found = strategy.search(graph.vertex(root).unwrap());
    assert_eq!(data(&found), vec![3]);
    assert_eq!(checks.get(), 3);
}

#[test]
fn test_find_first_breadth_first_check_count() {
    let (graph, root) = tree();
    let checks = Cell::new(0);
    let strategy = find_first(SearchAlgorithm::BreadthFirst, |v: Vtx<'_>| {
        checks.set(checks.get() + 1);
        *v.data() == 2
    });

    let found = strategy.search(graph.vertex(root).unwrap());
    assert_eq!(data(&found), vec![2]);
    assert_eq!(checks.get(), 5);
}

#[test]
fn test_find_all_checks_every_vertex() {
    let (graph, root) = tree();
    let checks = Cell::new(0);
    let strategy = find_all(|v: Vtx<'_>| {
        checks.set(checks.get() + 1);
        *v.data() % 2 == 1
    });

    let found = strategy.search(graph.vertex(root).unwrap());
    assert_eq!(data(&found), vec![1, 5, 3]);
    assert_eq!(checks.get(), 6);
}

#[test]
fn test_find_n_stops_after_n_matches() {
    let (graph, root) = tree();
    let strategy = find_n(SearchAlgorithm::BreadthFirst, 2, |v: Vtx<'_>| *v.data() > 0);
    let found = strategy.search(graph.vertex(root).unwrap());
    assert_eq!(data(&found), vec![1, 4]);
}

#[test]
fn test_find_n_returns_fewer_when_walk_ends() {
    let (graph, root) = tree();
    let strategy = find_n(SearchAlgorithm::DepthFirst, 10, |v: Vtx<'_>| *v.data() >= 4);
    let found = strategy.search(graph.vertex(root).unwrap());
    assert_eq!(data(&found), vec![4, 5]);
}

#[test]
fn test_find_n_zero_checks_nothing() {
    let (graph, root) = tree();
    let checks = Cell::new(0);
    let strategy = find_n(SearchAlgorithm::DepthFirst, 0, |_: Vtx<'_>| {
        checks.set(checks.get() + 1);
        true
    });
    assert!(strategy.search(graph.vertex(root).unwrap()).is_empty());
    assert_eq!(checks.get(), 0);
}

#[test]
fn test_find_with_unknown_algorithm_finds_nothing() {
    let (graph, root) = tree();
    let strategy = find_n(SearchAlgorithm::Unknown, 3, |_: Vtx<'_>| true);
    assert!(strategy.search(graph.vertex(root).unwrap()).is_empty());
}

#[test]
fn test_strategy_is_reusable() {
    let (graph, root) = tree();
    let strategy = find_first(SearchAlgorithm::BreadthFirst, |v: Vtx<'_>| *v.data() == 4);
    let start = graph.vertex(root).unwrap();

    for _ in 0..3 {
        assert_eq!(data(&strategy.search(start)), vec![4]);
    }
}

#[test]
fn test_max_visits_bounds_cyclic_search() {
    let mut graph: Graph<u32, ()> = Graph::new();
    let a = graph.add_vertex(1);
    let b = graph.add_vertex(2);
    graph.connect_both(a, b).unwrap();
    let start = graph.vertex(a).unwrap();

    let missing = find_first(SearchAlgorithm::DepthFirst, |v: Vtx<'_>| *v.data() == 2)
        .with_max_visits(0);
    assert!(missing.search(start).is_empty());

    let all = find_all(|v: Vtx<'_>| *v.data() == 2).with_max_visits(7);
    assert_eq!(all.search(start).len(), 3);

    let none = find_n(SearchAlgorithm::BreadthFirst, 5, |v: Vtx<'_>| *v.data() == 3)
        .with_max_visits(20);
    assert!(none.search(start).is_empty());
    assert_eq!(none.algorithm(), SearchAlgorithm::BreadthFirst);
}

#[test]
fn test_max_visits_bounds_depth_first_cycle() {
    let mut graph: Graph<u32, ()> = Graph::new();
    let a = graph.add_vertex(1);
    let b = graph.add_vertex(2);
    graph.connect_both(a, b).unwrap();
    let start = graph.vertex(a).unwrap();

    let first = find_first(SearchAlgorithm::DepthFirst, |v: Vtx<'_>| *v.data() == 2)
        .with_max_visits(10);
    let found = first.search(start);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id(), b);

    let checks = Cell::new(0);
    let missing = find_n(SearchAlgorithm::DepthFirst, 3, |v: Vtx<'_>| {
        checks.set(checks.get() + 1);
        *v.data() == 3
    })
    .with_max_visits(10);
    assert!(missing.search(start).is_empty());
    assert_eq!(checks.get(), 10);
}

#[test]
fn test_traverse_with_applies_action_in_discovery_order() {
    let (graph, root) = tree();
    let strategy = find_all(|v: Vtx<'_>| *v.data() != 0);
    let mut visited = Vec::new();

    graph
        .vertex(root)
        .unwrap()
        .traverse_with(&strategy, |v| {
            visited.push(*v.data());
            Ok::<(), Infallible>(())
        })
        .unwrap();
    assert_eq!(visited, vec![1, 4, 5, 2, 3]);
}

#[derive(Debug, PartialEq)]
struct Halt(u32);

#[test]
fn test_traverse_with_stops_on_first_error() {
    let (graph, root) = tree();
    let strategy = find_all(|_: Vtx<'_>| true);
    let mut calls = 0;

    let result = graph.vertex(root).unwrap().traverse_with(&strategy, |v| {
        calls += 1;
        if *v.data() == 4 {
            return Err(Halt(4));
        }
        Ok(())
    });
    assert_eq!(result, Err(Halt(4)));
    assert_eq!(calls, 3);
}

#[test]
fn test_traverse_with_boxed_strategy() {
    let (graph, root) = tree();
    let strategies: Vec<Box<dyn TraversingStrategy<u32, ()>>> = vec![
        Box::new(find_first(SearchAlgorithm::DepthFirst, |v: Vtx<'_>| *v.data() == 5)),
        Box::new(find_all(|v: Vtx<'_>| *v.data() == 5)),
    ];

    for strategy in &strategies {
        let mut hits = 0;
        graph
            .vertex(root)
            .unwrap()
            .traverse_with(strategy.as_ref(), |_| {
                hits += 1;
                Ok::<(), Infallible>(())
            })
            .unwrap();
        assert_eq!(hits, 1);
    }
}

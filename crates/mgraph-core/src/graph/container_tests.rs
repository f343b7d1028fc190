//! Tests for the ordered edge and vertex containers.

use super::container::{EdgeSet, VertexSet};
use super::types::{EdgeId, VertexId};

fn edges(ids: &[usize]) -> EdgeSet {
    ids.iter().copied().map(EdgeId::new).collect()
}

#[test]
fn test_edge_set_put_keeps_insertion_order() {
    let set = edges(&[4, 1, 9]);
    let order: Vec<usize> = set.iter().map(EdgeId::index).collect();
    assert_eq!(order, vec![4, 1, 9]);
    assert_eq!(set.len(), 3);
    assert_eq!(set.position(EdgeId::new(9)), Some(2));
}

#[test]
fn test_edge_set_iterators_are_independent() {
    let set = edges(&[0, 1, 2]);
    let mut first = set.iter();
    first.next();
    let second: Vec<EdgeId> = set.iter().collect();
    assert_eq!(second.len(), 3);
    assert_eq!(first.next(), Some(EdgeId::new(1)));
}

#[test]
fn test_empty_containers() {
    assert!(EdgeSet::new().is_empty());
    assert!(VertexSet::new().is_empty());
    assert!(!EdgeSet::new().contains(EdgeId::new(0)));
}

#[test]
fn test_vertex_set_ignores_duplicates() {
    let mut set = VertexSet::new();
    assert!(set.put(VertexId::new(3)));
    assert!(!set.put(VertexId::new(3)));
    assert!(set.put(VertexId::new(1)));
    assert_eq!(set.len(), 2);
    assert_eq!(set.position(VertexId::new(1)), Some(1));
}

#[test]
fn test_edge_set_merge_appends_and_reindexes() {
    let a = edges(&[0, 1]);
    let b = edges(&[5, 6, 7]);
    let merged = a.merge(&b);

    assert_eq!(merged.len(), 5);
    assert_eq!(merged.position(EdgeId::new(5)), Some(2));
    assert_eq!(merged.position(EdgeId::new(7)), Some(4));
    // Inputs are untouched.
    assert_eq!(a.len(), 2);
    assert_eq!(b.len(), 3);
}

#[test]
fn test_merge_keeps_duplicates() {
    let a = edges(&[0, 1]);
    let merged = a.merge(&a);
    assert_eq!(merged.len(), 4);
    let order: Vec<usize> = merged.iter().map(EdgeId::index).collect();
    assert_eq!(order, vec![0, 1, 0, 1]);
    assert_eq!(merged.position(EdgeId::new(1)), Some(1));

    let vertexes: VertexSet = [VertexId::new(2)].into_iter().collect();
    assert_eq!(vertexes.merge(&vertexes).len(), 2);
}

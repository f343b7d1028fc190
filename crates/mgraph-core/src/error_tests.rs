//! Tests for the crate error type.

use crate::error::Error;
use crate::graph::VertexId;

#[test]
fn test_error_display_vertex_not_found() {
    let err = Error::VertexNotFound(VertexId::new(7));
    assert_eq!(err.to_string(), "Vertex not found: #7");
}

#[test]
fn test_error_display_config() {
    let err = Error::Config("missing field `search`".to_string());
    assert_eq!(err.to_string(), "Configuration error: missing field `search`");
}

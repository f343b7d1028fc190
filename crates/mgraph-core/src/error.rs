//! Error types for mgraph-core.
//!
//! Only failures that originate inside the crate are represented here.
//! Errors returned by caller-supplied actions and group callbacks are passed
//! back to the caller unchanged and never wrapped in [`Error`].

use thiserror::Error;

use crate::graph::VertexId;

/// Graph error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A vertex handle does not belong to the graph it was used with.
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// Configuration could not be loaded or extracted.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

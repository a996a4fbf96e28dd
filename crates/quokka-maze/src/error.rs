//! Error types for maze operations.
//!
//! Every expected failure of the crate (bad arguments, simple-graph
//! violations, exhausted search limits) is reported as a [`GraphError`]
//! value. Nothing in this crate panics on caller input.
//!
//! A mutation that returns an error leaves the maze exactly as it was.

use thiserror::Error;

use crate::maze::VertexId;

/// Result type alias for maze operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all maze operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    // ========== Graph Structure Errors ==========
    /// Vertex is not part of the maze.
    #[error("Vertex not found: {0}")]
    VertexNotFound(VertexId),

    /// The same vertex instance was added twice.
    #[error("Duplicate vertex: {0}")]
    DuplicateVertex(VertexId),

    /// Edge already exists (simple graphs have no parallel edges).
    #[error("Edge already exists: {0} -- {1}")]
    DuplicateEdge(VertexId, VertexId),

    /// Edge does not exist in either direction.
    #[error("Edge not found: {0} -- {1}")]
    EdgeNotFound(VertexId, VertexId),

    /// Both endpoints of an edge are the same vertex.
    #[error("Self-loop rejected at vertex {0}")]
    SelfLoop(VertexId),

    // ========== Validation Errors ==========
    /// Hop or food budget is negative.
    #[error("Invalid budget: {parameter} = {value} (must be >= 0)")]
    InvalidBudget {
        /// Name of the offending parameter (`k` or `x`).
        parameter: &'static str,
        /// The rejected value.
        value: i64,
    },

    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== Traversal Errors ==========
    /// A single query created more search frames than allowed.
    #[error("Search state limit exceeded: {0} frames")]
    SearchLimitExceeded(usize),

    /// A route failed independent verification.
    #[error("Route violation: {0}")]
    RouteViolation(String),
}

impl GraphError {
    /// Build an `InvalidBudget` error for a negative parameter.
    pub(crate) fn negative(parameter: &'static str, value: i64) -> Self {
        GraphError::InvalidBudget { parameter, value }
    }
}

// Compile-time verification that GraphError is thread-safe
static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);

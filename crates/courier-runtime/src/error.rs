//! Workflow error types.

use thiserror::Error;

use crate::graph::NodeId;
use crate::validate::ValidationError;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors that can occur while building or traversing a workflow graph.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// A node failed its structural invariants.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The workflow graph shape is invalid.
    #[error("invalid workflow definition: {0}")]
    InvalidDefinition(String),

    /// An edge targets a node that is not part of the workflow.
    #[error("dangling edge: node {from} targets missing node {missing_target}")]
    DanglingEdge {
        /// Node declaring the edge.
        from: NodeId,
        /// Declared target that does not exist as a vertex.
        missing_target: NodeId,
    },

    /// Branch resolution needs a message status but the workflow has no
    /// message node yet.
    #[error("workflow has no message node to branch on")]
    NoMessageNode,

    /// Traversal revisited a node.
    #[error("cycle detected at node {node}")]
    CycleDetected {
        /// First node visited twice.
        node: NodeId,
    },

    /// Traversal exceeded the configured hop budget.
    #[error("path exceeded the maximum of {max_hops} hops")]
    PathTooLong {
        /// Configured hop budget.
        max_hops: usize,
    },
}

//! Commonly used types, re-exported in one place.

pub use crate::engine::{Engine, EngineConfig, ExecutionPath, StatusSnapshot, StatusSource};
pub use crate::error::{WorkflowError, WorkflowResult};
pub use crate::graph::{
    BranchRule, EdgeLabel, MessageStatus, NodeData, NodeId, NodeKind, NodeRecord, WorkflowGraph,
};
pub use crate::validate::{ValidationError, validate_node};

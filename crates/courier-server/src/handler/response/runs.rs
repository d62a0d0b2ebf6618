//! Response types for workflow run endpoints.

use courier_runtime::engine::ExecutionPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The resolved execution path of one workflow run.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRun {
    /// Workflow that was executed.
    pub workflow_id: Uuid,
    /// Visited node identifiers, start to end, in order.
    pub path: Vec<Uuid>,
}

impl WorkflowRun {
    /// Creates a response from a resolved path.
    pub fn from_path(workflow_id: Uuid, path: ExecutionPath) -> Self {
        Self {
            workflow_id,
            path: path.into_steps().into_iter().map(Into::into).collect(),
        }
    }
}

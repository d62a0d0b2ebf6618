//! Response types for workflow endpoints.

use courier_postgres::model;
use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dispatch workflow.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    /// Unique workflow identifier.
    pub id: Uuid,
    /// Workflow name.
    pub name: String,
    /// Timestamp when the workflow was created.
    pub created_at: Timestamp,
    /// Timestamp when the workflow was last updated.
    pub updated_at: Timestamp,
}

impl Workflow {
    /// Creates a response from the database model.
    pub fn from_model(workflow: model::Workflow) -> Self {
        Self {
            id: workflow.id,
            name: workflow.name,
            created_at: workflow.created_at.into(),
            updated_at: workflow.updated_at.into(),
        }
    }
}

//! Workflow model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::workflows;

/// Workflow model representing a named container of dispatch nodes.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = workflows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Workflow {
    /// Unique workflow identifier.
    pub id: Uuid,
    /// Workflow name.
    pub name: String,
    /// Timestamp when the workflow was created.
    pub created_at: Timestamp,
    /// Timestamp when the workflow was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the workflow was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for creating a new workflow.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = workflows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewWorkflow {
    /// Workflow ID (caller-assigned or freshly generated).
    pub id: Uuid,
    /// Workflow name.
    pub name: String,
}

/// Data for updating a workflow.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = workflows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateWorkflow {
    /// Workflow name.
    pub name: Option<String>,
    /// Soft delete timestamp.
    pub deleted_at: Option<Option<Timestamp>>,
}

impl Workflow {
    /// Returns whether the workflow is deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

//! Workflows repository for managing dispatch workflow containers.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewWorkflow, UpdateWorkflow, Workflow};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for workflow database operations.
///
/// Handles workflow lifecycle management: creation, renames, and soft
/// deletion. All reads filter out soft-deleted rows.
pub trait WorkflowRepository {
    /// Creates a new workflow record.
    fn create_workflow(
        &mut self,
        new_workflow: NewWorkflow,
    ) -> impl Future<Output = PgResult<Workflow>> + Send;

    /// Finds a workflow by its unique identifier.
    fn find_workflow_by_id(
        &mut self,
        workflow_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Workflow>>> + Send;

    /// Updates a workflow with new data.
    fn update_workflow(
        &mut self,
        workflow_id: Uuid,
        updates: UpdateWorkflow,
    ) -> impl Future<Output = PgResult<Workflow>> + Send;

    /// Soft deletes a workflow by setting the deletion timestamp.
    fn delete_workflow(&mut self, workflow_id: Uuid)
    -> impl Future<Output = PgResult<()>> + Send;
}

impl WorkflowRepository for PgConnection {
    async fn create_workflow(&mut self, new_workflow: NewWorkflow) -> PgResult<Workflow> {
        use schema::workflows;

        let workflow = diesel::insert_into(workflows::table)
            .values(&new_workflow)
            .returning(Workflow::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(workflow)
    }

    async fn find_workflow_by_id(&mut self, workflow_id: Uuid) -> PgResult<Option<Workflow>> {
        use schema::workflows::{self, dsl};

        let workflow = workflows::table
            .filter(dsl::id.eq(workflow_id))
            .filter(dsl::deleted_at.is_null())
            .select(Workflow::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(workflow)
    }

    async fn update_workflow(
        &mut self,
        workflow_id: Uuid,
        updates: UpdateWorkflow,
    ) -> PgResult<Workflow> {
        use schema::workflows::{self, dsl};

        let workflow = diesel::update(workflows::table.filter(dsl::id.eq(workflow_id)))
            .set(&updates)
            .returning(Workflow::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(workflow)
    }

    async fn delete_workflow(&mut self, workflow_id: Uuid) -> PgResult<()> {
        use diesel::dsl::now;
        use schema::workflows::{self, dsl};

        diesel::update(workflows::table.filter(dsl::id.eq(workflow_id)))
            .set(dsl::deleted_at.eq(now))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(())
    }
}

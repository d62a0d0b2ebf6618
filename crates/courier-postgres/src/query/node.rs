//! Nodes repository for managing workflow graph vertices.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewNode, Node, UpdateNode};
use crate::types::NodeKind;
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for node database operations.
///
/// Handles node lifecycle management and the latest-message lookup that
/// feeds condition branching. All reads filter out soft-deleted rows.
pub trait NodeRepository {
    /// Creates a new node record.
    fn create_node(&mut self, new_node: NewNode) -> impl Future<Output = PgResult<Node>> + Send;

    /// Finds a node by its unique identifier.
    fn find_node_by_id(
        &mut self,
        node_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Node>>> + Send;

    /// Lists all nodes of a workflow in creation order.
    fn list_workflow_nodes(
        &mut self,
        workflow_id: Uuid,
    ) -> impl Future<Output = PgResult<Vec<Node>>> + Send;

    /// Finds the most recently created message node of a workflow.
    ///
    /// This is the branching input for condition nodes: read-only, and
    /// `None` when the workflow has no message node yet.
    fn find_latest_message_node(
        &mut self,
        workflow_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Node>>> + Send;

    /// Updates a node with new data.
    fn update_node(
        &mut self,
        node_id: Uuid,
        updates: UpdateNode,
    ) -> impl Future<Output = PgResult<Node>> + Send;

    /// Soft deletes a node by setting the deletion timestamp.
    fn delete_node(&mut self, node_id: Uuid) -> impl Future<Output = PgResult<()>> + Send;
}

impl NodeRepository for PgConnection {
    async fn create_node(&mut self, new_node: NewNode) -> PgResult<Node> {
        use schema::nodes;

        let node = diesel::insert_into(nodes::table)
            .values(&new_node)
            .returning(Node::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(node)
    }

    async fn find_node_by_id(&mut self, node_id: Uuid) -> PgResult<Option<Node>> {
        use schema::nodes::{self, dsl};

        let node = nodes::table
            .filter(dsl::id.eq(node_id))
            .filter(dsl::deleted_at.is_null())
            .select(Node::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(node)
    }

    async fn list_workflow_nodes(&mut self, workflow_id: Uuid) -> PgResult<Vec<Node>> {
        use schema::nodes::{self, dsl};

        let nodes = nodes::table
            .filter(dsl::workflow_id.eq(workflow_id))
            .filter(dsl::deleted_at.is_null())
            .order((dsl::created_at.asc(), dsl::id.asc()))
            .select(Node::as_select())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(nodes)
    }

    async fn find_latest_message_node(&mut self, workflow_id: Uuid) -> PgResult<Option<Node>> {
        use schema::nodes::{self, dsl};

        // Creation order: ids are time-ordered v7 UUIDs, so the timestamp
        // tiebreak on id keeps the ordering stable within one instant.
        let node = nodes::table
            .filter(dsl::workflow_id.eq(workflow_id))
            .filter(dsl::kind.eq(NodeKind::Message))
            .filter(dsl::deleted_at.is_null())
            .order((dsl::created_at.desc(), dsl::id.desc()))
            .select(Node::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(node)
    }

    async fn update_node(&mut self, node_id: Uuid, updates: UpdateNode) -> PgResult<Node> {
        use schema::nodes::{self, dsl};

        let node = diesel::update(nodes::table.filter(dsl::id.eq(node_id)))
            .set(&updates)
            .returning(Node::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(node)
    }

    async fn delete_node(&mut self, node_id: Uuid) -> PgResult<()> {
        use diesel::dsl::now;
        use schema::nodes::{self, dsl};

        diesel::update(nodes::table.filter(dsl::id.eq(node_id)))
            .set(dsl::deleted_at.eq(now))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(())
    }
}

//! Node management handlers.
//!
//! This module provides node lifecycle management. Every create and update
//! runs the core validator first, so the specific violated invariant is
//! reported before anything reaches the database.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use courier_postgres::PgClient;
use courier_postgres::query::NodeRepository;
use courier_runtime::validate_node;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extract::{Json, Path};
use crate::handler::request::{CreateNode, UpdateNode};
use crate::handler::response::{ErrorResponse, Node};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for node operations.
const TRACING_TARGET: &str = "courier_server::handler::nodes";

/// Path parameters for node operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodePathParams {
    /// The unique identifier of the node.
    pub node_id: Uuid,
}

/// Creates a new node.
#[tracing::instrument(skip(pg_client, request))]
async fn create_node(
    State(pg_client): State<PgClient>,
    Json(request): Json<CreateNode>,
) -> Result<(StatusCode, Json<Node>)> {
    let new_node = request.into_model();
    validate_node(&new_node.to_record())?;

    let mut conn = pg_client.get_connection().await?;
    let node = conn.create_node(new_node).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        node_id = %node.id,
        workflow_id = %node.workflow_id,
        kind = %node.kind,
        "node created"
    );

    Ok((StatusCode::CREATED, Json(Node::from_model(node))))
}

fn create_node_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create node")
        .description(
            "Creates a new workflow node. The node must satisfy the \
             structural invariants of its kind; violations name the broken \
             rule.",
        )
        .response::<201, Json<Node>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Gets a node by ID.
#[tracing::instrument(skip(pg_client))]
async fn get_node(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<NodePathParams>,
) -> Result<(StatusCode, Json<Node>)> {
    let mut conn = pg_client.get_connection().await?;

    let node = conn
        .find_node_by_id(path_params.node_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("node"))?;

    Ok((StatusCode::OK, Json(Node::from_model(node))))
}

fn get_node_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get node")
        .description("Returns a single node by its identifier.")
        .response::<200, Json<Node>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Updates a node.
#[tracing::instrument(skip(pg_client, request))]
async fn update_node(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<NodePathParams>,
    Json(request): Json<UpdateNode>,
) -> Result<(StatusCode, Json<Node>)> {
    let mut conn = pg_client.get_connection().await?;

    let existing = conn
        .find_node_by_id(path_params.node_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("node"))?;

    // Validate the merged result before any mutation is applied.
    let updates = request.into_model();
    validate_node(&updates.merged_record(&existing))?;

    let node = conn.update_node(path_params.node_id, updates).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        node_id = %node.id,
        kind = %node.kind,
        "node updated"
    );

    Ok((StatusCode::OK, Json(Node::from_model(node))))
}

fn update_node_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update node")
        .description(
            "Applies a partial update to a node. The merged node must still \
             satisfy the structural invariants of its kind.",
        )
        .response::<200, Json<Node>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a node.
#[tracing::instrument(skip(pg_client))]
async fn delete_node(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<NodePathParams>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    conn.find_node_by_id(path_params.node_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("node"))?;

    conn.delete_node(path_params.node_id).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        node_id = %path_params.node_id,
        "node deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

fn delete_node_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete node")
        .description("Deletes a node from its workflow.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns routes for node management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/nodes", post_with(create_node, create_node_docs))
        .api_route("/nodes/{node_id}", get_with(get_node, get_node_docs))
        .api_route("/nodes/{node_id}", patch_with(update_node, update_node_docs))
        .api_route(
            "/nodes/{node_id}",
            delete_with(delete_node, delete_node_docs),
        )
        .with_path_items(|item| item.tag("Nodes"))
}

//! Workflow management handlers.
//!
//! This module provides workflow lifecycle management (creation, renames,
//! deletion), node listing, and the run endpoint that resolves a
//! workflow's execution path.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use courier_postgres::PgClient;
use courier_postgres::query::{NodeRepository, WorkflowRepository};
use courier_runtime::engine::{Engine, StatusSnapshot};
use courier_runtime::graph::WorkflowGraph;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::extract::{Json, Path};
use crate::handler::request::{CreateWorkflow, UpdateWorkflow};
use crate::handler::response::{ErrorResponse, Node, Workflow, WorkflowNodes, WorkflowRun};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for workflow operations.
const TRACING_TARGET: &str = "courier_server::handler::workflows";

/// Path parameters for workflow operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowPathParams {
    /// The unique identifier of the workflow.
    pub workflow_id: Uuid,
}

/// Creates a new workflow.
#[tracing::instrument(skip(pg_client, request))]
async fn create_workflow(
    State(pg_client): State<PgClient>,
    Json(request): Json<CreateWorkflow>,
) -> Result<(StatusCode, Json<Workflow>)> {
    let mut conn = pg_client.get_connection().await?;

    let workflow = conn.create_workflow(request.into_model()).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        workflow_id = %workflow.id,
        "workflow created"
    );

    Ok((StatusCode::CREATED, Json(Workflow::from_model(workflow))))
}

fn create_workflow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create workflow")
        .description("Creates a new dispatch workflow.")
        .response::<201, Json<Workflow>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Gets a workflow by ID.
#[tracing::instrument(skip(pg_client))]
async fn get_workflow(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<WorkflowPathParams>,
) -> Result<(StatusCode, Json<Workflow>)> {
    let mut conn = pg_client.get_connection().await?;

    let workflow = conn
        .find_workflow_by_id(path_params.workflow_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("workflow"))?;

    Ok((StatusCode::OK, Json(Workflow::from_model(workflow))))
}

fn get_workflow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get workflow")
        .description("Returns a single workflow by its identifier.")
        .response::<200, Json<Workflow>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Renames a workflow.
#[tracing::instrument(skip(pg_client, request))]
async fn update_workflow(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<WorkflowPathParams>,
    Json(request): Json<UpdateWorkflow>,
) -> Result<(StatusCode, Json<Workflow>)> {
    let mut conn = pg_client.get_connection().await?;

    conn.find_workflow_by_id(path_params.workflow_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("workflow"))?;

    let workflow = conn
        .update_workflow(path_params.workflow_id, request.into_model())
        .await?;

    tracing::debug!(
        target: TRACING_TARGET,
        workflow_id = %workflow.id,
        "workflow updated"
    );

    Ok((StatusCode::OK, Json(Workflow::from_model(workflow))))
}

fn update_workflow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Rename workflow")
        .description("Renames an existing workflow.")
        .response::<200, Json<Workflow>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a workflow.
#[tracing::instrument(skip(pg_client))]
async fn delete_workflow(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<WorkflowPathParams>,
) -> Result<StatusCode> {
    let mut conn = pg_client.get_connection().await?;

    conn.find_workflow_by_id(path_params.workflow_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("workflow"))?;

    conn.delete_workflow(path_params.workflow_id).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        workflow_id = %path_params.workflow_id,
        "workflow deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}

fn delete_workflow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete workflow")
        .description("Deletes a workflow. Its nodes become unreachable through the API.")
        .response::<204, ()>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists all nodes of a workflow.
#[tracing::instrument(skip(pg_client))]
async fn list_workflow_nodes(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<WorkflowPathParams>,
) -> Result<(StatusCode, Json<WorkflowNodes>)> {
    let mut conn = pg_client.get_connection().await?;

    conn.find_workflow_by_id(path_params.workflow_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("workflow"))?;

    let nodes = conn.list_workflow_nodes(path_params.workflow_id).await?;

    tracing::debug!(
        target: TRACING_TARGET,
        workflow_id = %path_params.workflow_id,
        count = nodes.len(),
        "workflow nodes listed"
    );

    let response = WorkflowNodes {
        workflow_id: path_params.workflow_id,
        nodes: nodes.into_iter().map(Node::from_model).collect(),
    };

    Ok((StatusCode::OK, Json(response)))
}

fn list_workflow_nodes_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List workflow nodes")
        .description("Returns all nodes of a workflow in creation order.")
        .response::<200, Json<WorkflowNodes>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Runs a workflow and returns the resolved execution path.
///
/// All needed state (workflow, nodes, latest message status) is read once
/// before the traversal, so the whole path is computed from one consistent
/// snapshot.
#[tracing::instrument(skip(pg_client, engine))]
async fn run_workflow(
    State(pg_client): State<PgClient>,
    State(engine): State<Engine>,
    Path(path_params): Path<WorkflowPathParams>,
) -> Result<(StatusCode, Json<WorkflowRun>)> {
    let mut conn = pg_client.get_connection().await?;

    conn.find_workflow_by_id(path_params.workflow_id)
        .await?
        .ok_or_else(|| ErrorKind::NotFound.with_resource("workflow"))?;

    let nodes = conn.list_workflow_nodes(path_params.workflow_id).await?;
    let latest_message = conn
        .find_latest_message_node(path_params.workflow_id)
        .await?;
    drop(conn);

    let graph = WorkflowGraph::from_records(nodes.iter().map(|node| node.to_record()))?;
    let snapshot = StatusSnapshot(latest_message.and_then(|node| node.status).map(Into::into));

    let path = engine.run(&graph, &snapshot)?;

    tracing::info!(
        target: TRACING_TARGET,
        workflow_id = %path_params.workflow_id,
        hops = path.len(),
        "workflow executed"
    );

    Ok((
        StatusCode::OK,
        Json(WorkflowRun::from_path(path_params.workflow_id, path)),
    ))
}

fn run_workflow_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Run workflow")
        .description(
            "Walks the workflow graph from start to end, resolving condition \
             branches from the latest message status, and returns the ordered \
             path of visited node identifiers.",
        )
        .response::<200, Json<WorkflowRun>>()
        .response::<404, Json<ErrorResponse>>()
        .response::<409, Json<ErrorResponse>>()
}

/// Returns routes for workflow management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/workflows", post_with(create_workflow, create_workflow_docs))
        .api_route(
            "/workflows/{workflow_id}",
            get_with(get_workflow, get_workflow_docs),
        )
        .api_route(
            "/workflows/{workflow_id}",
            patch_with(update_workflow, update_workflow_docs),
        )
        .api_route(
            "/workflows/{workflow_id}",
            delete_with(delete_workflow, delete_workflow_docs),
        )
        .api_route(
            "/workflows/{workflow_id}/nodes",
            get_with(list_workflow_nodes, list_workflow_nodes_docs),
        )
        .api_route(
            "/workflows/{workflow_id}/run",
            post_with(run_workflow, run_workflow_docs),
        )
        .with_path_items(|item| item.tag("Workflows"))
}

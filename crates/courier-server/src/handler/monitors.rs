//! System health monitoring handlers.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use courier_postgres::PgClient;

use crate::extract::Json;
use crate::handler::Result;
use crate::handler::response::HealthStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "courier_server::handler::monitors";

/// Returns the health of the server and its database.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(pg_client): State<PgClient>,
) -> Result<(StatusCode, Json<HealthStatus>)> {
    let is_healthy = pg_client.get_connection().await.is_ok();

    tracing::debug!(
        target: TRACING_TARGET,
        is_healthy,
        "health status checked"
    );

    let status_code = if is_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((status_code, Json(HealthStatus { is_healthy })))
}

fn health_status_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get health status")
        .description("Returns whether the server and its database are reachable.")
        .response::<200, Json<HealthStatus>>()
        .response::<503, Json<HealthStatus>>()
}

/// Returns routes for health monitoring.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/monitors/health", get_with(health_status, health_status_docs))
        .with_path_items(|item| item.tag("Monitors"))
}

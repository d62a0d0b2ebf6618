//! Response types for monitoring endpoints.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// System health status.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    /// Whether the server and its dependencies are healthy.
    pub is_healthy: bool,
}

//! Workflow error to HTTP error conversion handlers.
//!
//! Validation and traversal failures carry the specific violated rule;
//! the conversions below keep that rule text in the response message
//! instead of collapsing everything into a generic "bad request".

use courier_runtime::{ValidationError, WorkflowError};

use crate::handler::{Error, ErrorKind};

/// Tracing target for workflow error conversion.
const TRACING_TARGET: &str = "courier_server::workflow_errors";

impl From<ValidationError> for Error<'static> {
    fn from(error: ValidationError) -> Self {
        ErrorKind::BadRequest
            .with_message(error.to_string())
            .with_resource("node")
    }
}

impl From<WorkflowError> for Error<'static> {
    fn from(error: WorkflowError) -> Self {
        match error {
            WorkflowError::Validation(validation) => validation.into(),
            WorkflowError::NoMessageNode => ErrorKind::NotFound
                .with_message(error.to_string())
                .with_resource("node"),
            WorkflowError::InvalidDefinition(_)
            | WorkflowError::DanglingEdge { .. }
            | WorkflowError::CycleDetected { .. }
            | WorkflowError::PathTooLong { .. } => {
                // The stored graph cannot be executed as requested; the
                // caller must fix the workflow first.
                tracing::warn!(
                    target: TRACING_TARGET,
                    error = %error,
                    "workflow graph rejected by the engine"
                );
                ErrorKind::Conflict
                    .with_message(error.to_string())
                    .with_resource("workflow")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use courier_runtime::graph::NodeId;

    use super::*;

    #[test]
    fn validation_errors_keep_the_rule_text() {
        let error: Error = ValidationError::ConditionMissingNoEdge.into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(
            error.message(),
            Some("condition node must declare a no edge")
        );
    }

    #[test]
    fn missing_message_node_maps_to_not_found() {
        let error: Error = WorkflowError::NoMessageNode.into();
        assert_eq!(error.kind().status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn structural_run_failures_map_to_conflict() {
        let error: Error = WorkflowError::CycleDetected { node: NodeId::new() }.into();
        assert_eq!(error.kind().status_code(), StatusCode::CONFLICT);

        let error: Error = WorkflowError::PathTooLong { max_hops: 64 }.into();
        assert_eq!(error.kind().status_code(), StatusCode::CONFLICT);
    }
}

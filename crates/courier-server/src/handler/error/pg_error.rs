//! Database error to HTTP error conversion handlers.
//!
//! This module converts [`PgError`]s and known constraint violations into
//! appropriate HTTP error responses. All conversions are implemented via
//! the `From` trait for ergonomic usage with `?`.

use courier_postgres::PgError;
use courier_postgres::types::{ConstraintViolation, NodeConstraint, WorkflowConstraint};

use crate::handler::{Error, ErrorKind};

/// Tracing target for database error conversion.
const TRACING_TARGET: &str = "courier_server::postgres_errors";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        match constraint {
            ConstraintViolation::Workflow(c) => c.into(),
            ConstraintViolation::Node(c) => c.into(),
        }
    }
}

impl From<WorkflowConstraint> for Error<'static> {
    fn from(constraint: WorkflowConstraint) -> Self {
        match constraint {
            WorkflowConstraint::PrimaryKey => ErrorKind::Conflict
                .with_message("A workflow with this ID already exists")
                .with_resource("workflow"),
            WorkflowConstraint::NameLength => ErrorKind::BadRequest
                .with_message("Workflow name exceeds the maximum length")
                .with_resource("workflow"),
        }
    }
}

impl From<NodeConstraint> for Error<'static> {
    fn from(constraint: NodeConstraint) -> Self {
        match constraint {
            NodeConstraint::PrimaryKey => ErrorKind::Conflict
                .with_message("A node with this ID already exists")
                .with_resource("node"),
            NodeConstraint::WorkflowFk => ErrorKind::NotFound
                .with_message("The referenced workflow does not exist")
                .with_resource("workflow"),
            NodeConstraint::MessageTextLength => ErrorKind::BadRequest
                .with_message("Message text exceeds the maximum length")
                .with_resource("node"),
        }
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                // Try to extract constraint violation
                if let Some(constraint_name) = error.constraint()
                    && let Some(constraint) = ConstraintViolation::new(constraint_name)
                {
                    tracing::error!(
                        target: TRACING_TARGET,
                        constraint = constraint_name,
                        error = %query_error,
                        "query error (constraint violation)"
                    );
                    return constraint.into();
                }

                // Generic query error without constraint
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(message) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %message,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

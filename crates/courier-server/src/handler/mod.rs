//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! Handlers are thin glue: they fetch state through the repository traits,
//! hand plain records to `courier-runtime`, and shape the result into JSON
//! responses. All error mapping goes through [`Error`] and [`ErrorKind`].
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod error;
mod monitors;
mod nodes;
pub mod request;
pub mod response;
mod workflows;

use aide::axum::ApiRouter;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
use crate::service::ServiceState;

#[inline]
async fn fallback() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns an [`ApiRouter`] with all routes.
pub fn routes() -> ApiRouter<ServiceState> {
    ApiRouter::new()
        .merge(workflows::routes())
        .merge(nodes::routes())
        .merge(monitors::routes())
        .fallback(fallback)
}

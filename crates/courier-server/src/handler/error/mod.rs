//! HTTP error types and conversions.
//!
//! [`Error`] and [`ErrorKind`] are the handler-facing error surface;
//! submodules convert database and workflow errors into them while
//! preserving the specific violated rule in the response message.

mod http_error;
mod pg_error;
mod workflow_error;

pub use http_error::{Error, ErrorKind, Result};

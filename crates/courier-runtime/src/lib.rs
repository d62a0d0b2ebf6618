#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod engine;
mod error;
pub mod graph;
mod validate;

#[doc(hidden)]
pub mod prelude;

pub use error::{WorkflowError, WorkflowResult};
pub use validate::{ValidationError, validate_node};

/// Tracing target for runtime operations.
pub const TRACING_TARGET: &str = "courier_runtime";

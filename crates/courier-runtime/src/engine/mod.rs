//! Workflow execution engine.
//!
//! This module provides the runtime for resolving execution paths:
//! - [`Engine`]: the traversal engine
//! - [`EngineConfig`]: configuration options
//! - [`StatusSource`] and [`StatusSnapshot`]: the branching-input seam
//! - [`ExecutionPath`]: the resolved start-to-end path

mod config;
mod executor;

pub use config::EngineConfig;
pub use executor::{Engine, ExecutionPath, StatusSnapshot, StatusSource};

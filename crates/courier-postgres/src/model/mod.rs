//! Typed models for database tables.
//!
//! Each table gets a query model, an insert change set (`NewX`), and an
//! update change set (`UpdateX`) that enumerates the permitted fields.

mod node;
mod workflow;

pub use node::{NewNode, Node, UpdateNode};
pub use workflow::{NewWorkflow, UpdateWorkflow, Workflow};

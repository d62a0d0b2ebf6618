//! Database enums and helper types.

mod constraint;
mod message_status;
mod node_kind;

pub use constraint::{ConstraintViolation, NodeConstraint, WorkflowConstraint};
pub use message_status::MessageStatus;
pub use node_kind::NodeKind;

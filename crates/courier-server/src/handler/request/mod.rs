//! Request types for HTTP handlers.

mod nodes;
mod workflows;

pub use nodes::*;
pub use workflows::*;

//! Application state, configuration, and service-level errors.

mod config;
mod error;
mod state;

pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use error::{Result, ServiceError};
pub use state::ServiceState;

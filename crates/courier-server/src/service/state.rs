//! Application state and dependency injection.

use courier_postgres::PgClient;
use courier_runtime::engine::Engine;

use crate::service::{Result, ServiceConfig};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    engine: Engine,
}

impl ServiceState {
    /// Initializes application state from configuration.
    ///
    /// Builds the database connection pool and the workflow engine.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let service_state = Self {
            pg_client: config.connect_postgres()?,
            engine: config.create_engine(),
        };

        Ok(service_state)
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(engine: Engine);

//! Engine configuration.

use derive_builder::Builder;

/// Configuration for the workflow execution engine.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct EngineConfig {
    /// Maximum number of nodes a single traversal may visit.
    ///
    /// The visited set already catches revisits; the hop budget bounds
    /// pathological acyclic graphs as well.
    #[builder(default = "64")]
    pub max_hops: usize,
}

impl EngineConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

impl EngineConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(0) = self.max_hops {
            return Err("max_hops must be at least 1".into());
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { max_hops: 64 }
    }
}

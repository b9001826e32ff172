//! Application state shared across all handlers.

use crate::scheme::{ForwardedProto, SchemePolicy};
use crate::templates::Templates;
use std::sync::Arc;
use svgg_core::{SvgPipeline, SvggConfig};

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SvggConfig>,
    pub pipeline: SvgPipeline,
    pub templates: Arc<Templates>,
    pub scheme_policy: Arc<dyn SchemePolicy>,
}

impl AppState {
    pub fn new(config: SvggConfig) -> Result<Self, minijinja::Error> {
        let policy = ForwardedProto::new(config.server.trust_forwarded_proto);
        Self::with_policy(config, policy)
    }

    pub fn with_policy(config: SvggConfig, policy: impl SchemePolicy) -> Result<Self, minijinja::Error> {
        Ok(Self {
            pipeline: SvgPipeline::new(&config.limits),
            templates: Arc::new(Templates::new()?),
            scheme_policy: Arc::new(policy),
            config: Arc::new(config),
        })
    }
}

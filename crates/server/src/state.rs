//! Application state shared across handlers.

use std::sync::Arc;
use webwrap_core::config::AppConfig;
use webwrap_generator::ProjectGenerator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Project generation pipeline.
    pub generator: Arc<ProjectGenerator>,
}

impl AppState {
    pub fn new(config: AppConfig, generator: ProjectGenerator) -> Self {
        Self {
            config: Arc::new(config),
            generator: Arc::new(generator),
        }
    }
}

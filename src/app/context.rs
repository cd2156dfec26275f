use std::sync::Arc;

use crate::app::error::Result;
use crate::client::{HttpBackend, RecipeBackend};
use crate::config::Config;

pub struct AppContext {
    pub config: Arc<Config>,
    pub backend: Arc<dyn RecipeBackend + Send + Sync>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let backend: Arc<dyn RecipeBackend + Send + Sync> =
            Arc::new(HttpBackend::new(&config.server)?);

        Ok(Self {
            config: Arc::new(config),
            backend,
        })
    }

    /// Build a context around an existing backend, e.g. a stub in tests.
    pub fn with_backend(config: Config, backend: Arc<dyn RecipeBackend + Send + Sync>) -> Self {
        Self {
            config: Arc::new(config),
            backend,
        }
    }
}

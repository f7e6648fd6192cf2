//! Shared handler state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::query::RouteQueryService;

/// Cheap to clone; all tables are `'static` and read-only.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<InnerState>,
}

struct InnerState {
    service: RouteQueryService<'static>,
    config: ServerConfig,
}

impl AppState {
    /// State over the compiled-in tables, with query options from `config`.
    pub fn new(config: ServerConfig) -> Self {
        let service = RouteQueryService::builtin().with_options(config.query);
        Self::with_service(service, config)
    }

    pub fn with_service(service: RouteQueryService<'static>, config: ServerConfig) -> Self {
        Self {
            inner: Arc::new(InnerState { service, config }),
        }
    }

    pub fn service(&self) -> &RouteQueryService<'static> {
        &self.inner.service
    }

    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

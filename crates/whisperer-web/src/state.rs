//! Shared application state for the web server.

use std::sync::Arc;

use whisperer_common::ServerConfig;

/// Shared state injected into every Axum handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

pub type SharedState = Arc<AppState>;

use std::sync::Arc;

use widget_core::store::WidgetStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory widget store.
    pub store: Arc<WidgetStore>,
    /// Server configuration (pagination limits are read by handlers).
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Fresh state with an empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(WidgetStore::new()),
            config: Arc::new(config),
        }
    }
}

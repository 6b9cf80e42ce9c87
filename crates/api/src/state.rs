use std::sync::Arc;

use inventory_db::catalog::Catalog;

use crate::config::ServerConfig;
use crate::session::SessionStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything lives behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The catalog service (owns the connection pool).
    pub catalog: Arc<Catalog>,
    /// Open login sessions keyed by bearer token.
    pub sessions: Arc<SessionStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(SessionStore::new()),
            config: Arc::new(config),
        }
    }
}

use std::sync::Arc;

use donations_db::DonationStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store handle, opened once at startup and passed down.
    pub store: Arc<dyn DonationStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

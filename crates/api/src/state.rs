use std::sync::Arc;

use atelier_gallery::GalleryService;

use crate::auth::session::SessionStore;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Gallery data-access layer (configured or fallback mode).
    pub gallery: Arc<GalleryService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// In-memory admin sessions; discarded on process restart.
    pub sessions: Arc<SessionStore>,
}

//! Route definitions for static site content.

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// Site content routes mounted at `/site`.
///
/// ```text
/// GET /services     -> list_services
/// GET /testimonials -> list_testimonials
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(site::list_services))
        .route("/testimonials", get(site::list_testimonials))
}

//! Route definitions for artwork and category resources.

use axum::routing::{delete, get, patch, put};
use axum::Router;

use crate::handlers::{categories, gallery};
use crate::state::AppState;

/// Gallery routes mounted at `/gallery`.
///
/// ```text
/// GET    /artworks           -> list_artworks
/// POST   /artworks           -> upload_artwork (admin, multipart)
/// GET    /artworks/featured  -> featured_artworks
/// PUT    /artworks/order     -> reorder_artworks (admin)
/// PATCH  /artworks/{id}      -> update_artwork (admin)
/// DELETE /artworks/{id}      -> delete_artwork (admin)
/// GET    /categories         -> list_categories
/// POST   /categories         -> create_category (admin)
/// DELETE /categories/{name}  -> delete_category (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/artworks",
            get(gallery::list_artworks).post(gallery::upload_artwork),
        )
        .route("/artworks/featured", get(gallery::featured_artworks))
        .route("/artworks/order", put(gallery::reorder_artworks))
        .route(
            "/artworks/{id}",
            patch(gallery::update_artwork).delete(gallery::delete_artwork),
        )
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/categories/{name}", delete(categories::delete_category))
}

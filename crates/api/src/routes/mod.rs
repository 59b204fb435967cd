pub mod auth;
pub mod gallery;
pub mod health;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                         login (public)
/// /auth/logout                        logout (admin)
/// /auth/session                       session info (admin)
///
/// /gallery/artworks                   list (public), upload (admin, multipart)
/// /gallery/artworks/featured          featured strip (public)
/// /gallery/artworks/order             reorder (admin, PUT)
/// /gallery/artworks/{id}              edit (PATCH), delete (admin)
/// /gallery/categories                 list (public), create (admin)
/// /gallery/categories/{name}          remove (admin)
///
/// /site/services                      bundled services (public)
/// /site/testimonials                  bundled testimonials (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Admin session gate (login, logout, session info).
        .nest("/auth", auth::router())
        // Artwork and category resources.
        .nest("/gallery", gallery::router())
        // Static site content.
        .nest("/site", site::router())
}

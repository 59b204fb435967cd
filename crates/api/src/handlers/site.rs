//! Handlers for static site content (services, testimonials).

use axum::Json;

use atelier_core::catalog::{Service, Testimonial, SERVICES, TESTIMONIALS};

use crate::response::DataResponse;

/// GET /api/v1/site/services
pub async fn list_services() -> Json<DataResponse<&'static [Service]>> {
    Json(DataResponse::new(SERVICES))
}

/// GET /api/v1/site/testimonials
pub async fn list_testimonials() -> Json<DataResponse<&'static [Testimonial]>> {
    Json(DataResponse::new(TESTIMONIALS))
}

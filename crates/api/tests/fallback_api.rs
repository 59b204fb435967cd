//! Integration tests for the gallery API in fallback mode (no backend
//! configured): reads serve the bundled catalog, writes fail fast.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, login, multipart_upload_body, post_json, request};

use atelier_core::catalog;

// ---------------------------------------------------------------------------
// Reads
// ---------------------------------------------------------------------------

#[tokio::test]
async fn artworks_are_the_exact_bundled_list() {
    let app = common::build_fallback_app();
    let response = get(&app, "/api/v1/gallery/artworks").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    // No degraded-read error in fallback mode.
    assert!(json.get("error").is_none());

    let expected = catalog::fallback_artworks();
    let data = json["data"].as_array().expect("data is an array");
    assert_eq!(data.len(), expected.len());
    for (entry, artwork) in data.iter().zip(&expected) {
        assert_eq!(entry["id"], artwork.id);
        assert_eq!(entry["title"], artwork.title);
        assert_eq!(entry["category"], artwork.category);
        assert_eq!(entry["image_url"], artwork.image_url);
        assert_eq!(entry["display_order"], artwork.display_order);
    }
}

#[tokio::test]
async fn categories_are_the_default_list() {
    let app = common::build_fallback_app();
    let response = get(&app, "/api/v1/gallery/categories").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"],
        serde_json::json!(["All", "Mehendi", "Bridal", "Cultural", "Sketch", "Mandala"])
    );
}

#[tokio::test]
async fn featured_strip_is_first_four_bridal_or_cultural() {
    let app = common::build_fallback_app();
    let response = get(&app, "/api/v1/gallery/artworks/featured").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let data = json["data"].as_array().expect("data is an array");
    let ids: Vec<i64> = data.iter().map(|a| a["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 4, 8]);
    for entry in data {
        let category = entry["category"].as_str().unwrap();
        assert!(category == "Bridal" || category == "Cultural");
    }
}

#[tokio::test]
async fn site_content_is_served() {
    let app = common::build_fallback_app();

    let services = body_json(get(&app, "/api/v1/site/services").await).await;
    assert_eq!(services["data"].as_array().unwrap().len(), 4);
    assert_eq!(services["data"][0]["title"], "Bridal Mehendi");

    let testimonials = body_json(get(&app, "/api/v1/site/testimonials").await).await;
    assert_eq!(testimonials["data"].as_array().unwrap().len(), 6);
    assert_eq!(testimonials["data"][0]["name"], "Priya Sharma");
}

// ---------------------------------------------------------------------------
// Writes: authentication still gates them
// ---------------------------------------------------------------------------

#[tokio::test]
async fn write_without_session_is_unauthorized() {
    let app = common::build_fallback_app();

    let response = post_json(
        &app,
        "/api/v1/gallery/categories",
        serde_json::json!({ "name": "Arabic" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Writes: not-configured short circuit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_fails_fast_and_leaves_artworks_unchanged() {
    let app = common::build_fallback_app();
    let token = login(&app).await;

    let boundary = "atelier-test-boundary";
    let body = multipart_upload_body(boundary, "new.png", "New Artwork", "Bridal");

    let response = request(
        &app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/gallery/artworks")
            .header("authorization", format!("Bearer {token}"))
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_CONFIGURED");
    assert_eq!(json["error"], "Gallery backend not configured");

    // The artwork list is unchanged.
    let artworks = body_json(get(&app, "/api/v1/gallery/artworks").await).await;
    assert_eq!(
        artworks["data"].as_array().unwrap().len(),
        catalog::fallback_artworks().len()
    );
}

#[tokio::test]
async fn other_writes_fail_fast_when_not_configured() {
    let app = common::build_fallback_app();
    let token = login(&app).await;
    let bearer = format!("Bearer {token}");

    // Edit.
    let response = request(
        &app,
        Request::builder()
            .method(Method::PATCH)
            .uri("/api/v1/gallery/artworks/1")
            .header("authorization", &bearer)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"title":"Renamed"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // Delete.
    let response = request(
        &app,
        Request::builder()
            .method(Method::DELETE)
            .uri("/api/v1/gallery/artworks/1")
            .header("authorization", &bearer)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // Reorder.
    let response = request(
        &app,
        Request::builder()
            .method(Method::PUT)
            .uri("/api/v1/gallery/artworks/order")
            .header("authorization", &bearer)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"order":[3,2,1]}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // Category create.
    let response = request(
        &app,
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/gallery/categories")
            .header("authorization", &bearer)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Arabic"}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    // Category remove.
    let response = request(
        &app,
        Request::builder()
            .method(Method::DELETE)
            .uri("/api/v1/gallery/categories/Bridal")
            .header("authorization", &bearer)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

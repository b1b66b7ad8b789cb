//! Integration tests for the logo HTTP API.
//!
//! Drives a real server through the shared TestServer harness.

mod common;

use std::collections::HashSet;

use base64::Engine as _;
use common::TestServer;
use logo_server::routes::GenerateLogosResponse;
use serde_json::{json, Value};

// ==========================================================================
// POST /api/logos
// ==========================================================================

#[tokio::test]
async fn test_generate_returns_requested_number_of_pngs() {
    let server = TestServer::start().await;

    let resp = server
        .generate(json!({
            "company_name": "Rose Garden",
            "industry": "floral bouquet shop",
            "colors": ["#EC4899", "#10B981", "#A855F7"],
            "num_variations": 3
        }))
        .await;
    assert_eq!(resp.status(), 200);

    let body: GenerateLogosResponse = resp.json().await.expect("json body");
    assert_eq!(body.images.len(), 3);
    assert_eq!(body.variations.len(), 3);
    assert!(!body.generation_id.is_empty());

    for image in &body.images {
        assert!(!image.starts_with("data:"));
        let png = base64::engine::general_purpose::STANDARD
            .decode(image)
            .expect("base64");
        let decoded = image::load_from_memory(&png).expect("png");
        assert_eq!(decoded.width(), common::TEST_CANVAS_SIZE);
    }

    let designs: HashSet<&str> = body.variations.iter().map(|v| v.design.as_str()).collect();
    assert_eq!(designs.len(), 3, "variations should use distinct categories");
    assert!(body.variations.iter().all(|v| !v.fallback));

    server.shutdown().await;
}

#[tokio::test]
async fn test_generate_defaults_to_three_variations() {
    let server = TestServer::start().await;

    let resp = server.generate(json!({ "company_name": "Acme" })).await;
    assert_eq!(resp.status(), 200);
    let body: GenerateLogosResponse = resp.json().await.expect("json body");
    assert_eq!(body.images.len(), 3);

    server.shutdown().await;
}

#[tokio::test]
async fn test_generate_honours_engine() {
    let server = TestServer::start().await;

    let resp = server
        .generate(json!({
            "company_name": "Northwind Capital",
            "industry": "fintech",
            "num_variations": 2,
            "engine": "premium"
        }))
        .await;
    assert_eq!(resp.status(), 200);
    let body: GenerateLogosResponse = resp.json().await.expect("json body");
    assert_eq!(body.variations[0].design, "financial_trust");
    assert!(body
        .variations
        .iter()
        .all(|v| v.engine == logo_core::Engine::Premium));

    server.shutdown().await;
}

#[tokio::test]
async fn test_repeat_request_is_served_from_cache() {
    let server = TestServer::start().await;
    let request = json!({ "company_name": "Acme", "industry": "saas", "num_variations": 2 });

    let first: GenerateLogosResponse =
        server.generate(request.clone()).await.json().await.expect("json");
    let second: GenerateLogosResponse = server.generate(request).await.json().await.expect("json");

    assert!(first.variations.iter().all(|v| !v.cached));
    assert!(second.variations.iter().all(|v| v.cached));
    assert_eq!(first.images, second.images);
    assert_ne!(first.generation_id, second.generation_id);

    server.shutdown().await;
}

#[tokio::test]
async fn test_malformed_colors_are_not_an_error() {
    let server = TestServer::start().await;

    let resp = server
        .generate(json!({ "company_name": "Acme", "colors": ["nope", "#12"], "num_variations": 1 }))
        .await;
    assert_eq!(resp.status(), 200);

    server.shutdown().await;
}

// ==========================================================================
// Validation
// ==========================================================================

#[tokio::test]
async fn test_validation_failures_return_422() {
    let server = TestServer::start().await;

    let cases = [
        (json!({ "company_name": "   " }), "company_name"),
        (json!({ "company_name": "a".repeat(101) }), "company_name"),
        (json!({ "company_name": "Acme", "num_variations": 0 }), "num_variations"),
        (json!({ "company_name": "Acme", "num_variations": 11 }), "num_variations"),
        (json!({ "company_name": "Acme", "colors": ["#1", "#2", "#3", "#4"] }), "colors"),
        (json!({ "company_name": "Acme", "engine": "ultra" }), "engine"),
    ];

    for (body, field) in cases {
        let resp = server.generate(body.clone()).await;
        assert_eq!(resp.status(), 422, "{body}");
        let error: Value = resp.json().await.expect("json error");
        let message = error["error"].as_str().expect("error string");
        assert!(message.contains(field), "{message} should mention {field}");
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let server = TestServer::start().await;

    let resp = server
        .client()
        .post(server.url("/api/logos"))
        .header("content-type", "application/json")
        .body("{\"company_name\": ")
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), 400);
    let error: Value = resp.json().await.expect("json error");
    assert!(error["error"].is_string());

    server.shutdown().await;
}

// ==========================================================================
// Catalogue and health
// ==========================================================================

#[tokio::test]
async fn test_industries_are_listed() {
    let server = TestServer::start().await;

    let resp = server
        .client()
        .get(server.url("/api/industries"))
        .send()
        .await
        .expect("request");
    assert_eq!(resp.status(), 200);
    let industries: Vec<Value> = resp.json().await.expect("json");
    assert_eq!(industries.len(), logo_core::IndustryCategory::ALL.len());
    assert!(industries.iter().any(|i| i["key"] == "healthtech"));
    assert!(industries.iter().all(|i| i["pattern"]["keywords"].is_array()));

    server.shutdown().await;
}

#[tokio::test]
async fn test_health_endpoints() {
    let server = TestServer::start().await;

    let live = server
        .client()
        .get(server.url("/health/live"))
        .send()
        .await
        .expect("request");
    assert_eq!(live.status(), 200);

    let ready = server
        .client()
        .get(server.url("/health/ready"))
        .send()
        .await
        .expect("request");
    assert_eq!(ready.status(), 200);
    let body: Value = ready.json().await.expect("json");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["font_faces"], 0);

    server.shutdown().await;
}

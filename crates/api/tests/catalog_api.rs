//! HTTP-level tests for the front page, health check and catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, build_test_app, get};

// ---------------------------------------------------------------------------
// Test: GET / serves the HTML page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_serves_html() {
    let response = get(build_test_app(), "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.contains("text/html"), "got {content_type}");

    let body = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(body.contains("AkiyaVision"));
}

// ---------------------------------------------------------------------------
// Test: GET /health reports mock mode without a token
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_mock_mode() {
    let response = get(build_test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["generation_mode"], "mock");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let response = get(build_test_app(), "/health").await;
    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: GET /api/houses returns the fixed catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn houses_returns_fixed_catalog() {
    let response = get(build_test_app(), "/api/houses").await;
    assert_eq!(response.status(), StatusCode::OK);

    let houses = body_json(response).await;
    let houses = houses.as_array().expect("houses should be an array");
    assert_eq!(houses.len(), 2);

    let house1 = &houses[0];
    assert_eq!(house1["id"], "house1");
    assert_eq!(house1["name"], "世田谷区 - 古民家");
    assert_eq!(house1["address"], "東京都世田谷区");
    assert_eq!(house1["price"], "3,800万円");
    assert_eq!(house1["area"], "180㎡");
    assert_eq!(house1["age"], "築80年");
    assert_eq!(house1["images"], serde_json::json!([]));

    let house2 = &houses[1];
    assert_eq!(house2["id"], "house2");
    assert_eq!(house2["name"], "杉並区 - 一戸建て");
    assert_eq!(house2["price"], "5,200万円");
    assert_eq!(house2["area"], "120㎡");
    assert_eq!(house2["age"], "築50年");
}

// ---------------------------------------------------------------------------
// Test: GET /api/demo-images/{house_type}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn demo_images_for_house1_is_kominka_set() {
    let response = get(build_test_app(), "/api/demo-images/house1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let images = body_json(response).await;
    let ids: Vec<_> = images
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, ["demo1", "demo2", "demo3"]);
    assert_eq!(images[0]["name"], "台所");
    assert_eq!(images[0]["url"], "/static/demo-images/demo1.jpg");
    assert_eq!(images[0]["description"], "Kitchen");
}

#[tokio::test]
async fn demo_images_for_house2_is_ikkodate_set() {
    let response = get(build_test_app(), "/api/demo-images/house2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let images = body_json(response).await;
    assert_eq!(images.as_array().unwrap().len(), 3);
    assert_eq!(images[0]["id"], "demo4");
    assert_eq!(images[2]["url"], "/static/demo-images/demo6.jpg");
}

#[tokio::test]
async fn demo_images_for_unknown_type_is_404() {
    let response = get(build_test_app(), "/api/demo-images/kominka").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert!(json["error"].as_str().unwrap().contains("House type not found"));
}

// ---------------------------------------------------------------------------
// Test: GET /api/styles lists ids and labels only
// ---------------------------------------------------------------------------

#[tokio::test]
async fn styles_list_hides_prompts() {
    let response = get(build_test_app(), "/api/styles").await;
    assert_eq!(response.status(), StatusCode::OK);

    let styles = body_json(response).await;
    let styles = styles.as_array().unwrap();
    assert_eq!(styles.len(), 12);
    assert_eq!(styles[0]["id"], "modern");
    assert_eq!(styles[0]["label"], "モダン");
    assert!(styles[0].get("prompt").is_none());
}

mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use subdomain_creator::routes::app_router;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_get() {
    let app = app_router(common::create_test_state(1.0));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/domains/extensions/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["extensions"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn test_trailing_slash_post() {
    let app = app_router(common::create_test_state(1.0));

    let body = json!({ "subdomain": "myshop", "extension": ".io" });

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/domains/validate/")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["domain"], "myshop.io");
    assert_eq!(json["available"], true);
}

#[tokio::test]
async fn test_health_through_app_router() {
    let app = app_router(common::create_test_state(1.0));

    let response = app
        .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
}

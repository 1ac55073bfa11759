mod common;

use serde_json::{Value, json};

#[tokio::test]
async fn test_validate_available() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": "myshop", "extension": ".io" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(
        json,
        json!({
            "valid": true,
            "available": true,
            "domain": "myshop.io",
            "message": "Domain is available"
        })
    );
}

#[tokio::test]
async fn test_validate_taken() {
    let server = common::taken_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": "myshop", "extension": ".io" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["valid"], true);
    assert_eq!(json["available"], false);
    assert_eq!(json["message"], "Domain may be taken");
}

#[tokio::test]
async fn test_validate_too_short() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": "ab", "extension": ".dev" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(
        json,
        json!({
            "valid": false,
            "errors": ["Subdomain must be at least 3 characters long"]
        })
    );
}

#[tokio::test]
async fn test_validate_leading_hyphen() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": "-abc", "extension": ".dev" }))
        .await;

    let json = response.json::<Value>();
    assert_eq!(json["valid"], false);
    assert_eq!(
        json["errors"],
        json!(["Subdomain cannot start or end with a hyphen"])
    );
}

#[tokio::test]
async fn test_validate_unsupported_extension() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": "abc", "extension": ".zz" }))
        .await;

    let json = response.json::<Value>();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"], json!(["Unsupported domain extension"]));
}

#[tokio::test]
async fn test_validate_reports_every_violation() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": "-a_", "extension": ".zz" }))
        .await;

    let json = response.json::<Value>();
    assert_eq!(
        json["errors"],
        json!([
            "Subdomain can only contain letters, numbers, and hyphens",
            "Subdomain cannot start or end with a hyphen",
            "Unsupported domain extension"
        ])
    );
}

#[tokio::test]
async fn test_validate_missing_fields() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": "myshop" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "missing_input");
    assert_eq!(json["error"]["details"]["missing"], json!(["extension"]));
}

#[tokio::test]
async fn test_validate_blank_subdomain_is_missing_input() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": "   ", "extension": ".dev" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "missing_input");
    assert_eq!(json["error"]["details"]["missing"], json!(["subdomain"]));
}

#[tokio::test]
async fn test_validate_is_idempotent() {
    let server = common::available_server();
    let body = json!({ "subdomain": "bad_name-", "extension": ".io" });

    let first = server.post("/api/domains/validate").json(&body).await;
    let second = server.post("/api/domains/validate").json(&body).await;

    assert_eq!(first.json::<Value>(), second.json::<Value>());
}

#[tokio::test]
async fn test_validate_wrong_field_type() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .json(&json!({ "subdomain": 12345, "extension": ".io" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Invalid JSON body");
    assert!(json["error"]["details"]["reason"].is_string());
}

#[tokio::test]
async fn test_validate_body_not_json() {
    let server = common::available_server();

    let response = server
        .post("/api/domains/validate")
        .text("subdomain=myshop")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

mod common;

use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = common::available_server();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_timestamp_is_rfc3339() {
    let server = common::available_server();

    let json = server.get("/health").await.json::<Value>();

    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

//! Streaming fulfillment tests.
//!
//! Tests verify:
//! - Object bytes are returned with 200 and download headers
//! - Content-Length matches the body exactly
//! - Content-Disposition carries the last key segment
//! - Store failures surface as 500 with the underlying message

use std::sync::Arc;

use axum::http::StatusCode;

use s3_gateway::FulfillmentMode;

use super::test_utils::{
    body_bytes, body_json, get, router_for, test_bytes, MockObjectStore, NO_SUCH_KEY_MESSAGE,
};

// =============================================================================
// Successful Downloads
// =============================================================================

#[tokio::test]
async fn test_stream_object_success() {
    let data = test_bytes(1024);
    let store = Arc::new(
        MockObjectStore::new().with_object("my-bucket", "reports/q1.pdf", data.clone()),
    );
    let router = router_for(FulfillmentMode::Stream, store.clone());

    let response = get(router, "/my-bucket/reports/q1.pdf").await;

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(headers.get("content-length").unwrap(), "1024");
    assert_eq!(
        headers.get("content-disposition").unwrap(),
        "attachment; filename=q1.pdf"
    );
    assert_eq!(
        headers.get("content-type").unwrap(),
        "application/octet-stream"
    );
    assert_eq!(headers.get("content-description").unwrap(), "File Transfer");
    assert_eq!(headers.get("content-transfer-encoding").unwrap(), "binary");

    let body = body_bytes(response).await;
    assert_eq!(body.as_ref(), data.as_slice());
    assert_eq!(store.get_count(), 1);
}

#[tokio::test]
async fn test_content_length_matches_body() {
    for len in [0usize, 1, 17, 4096, 100_000] {
        let store = Arc::new(MockObjectStore::new().with_object("b", "blob.bin", test_bytes(len)));
        let router = router_for(FulfillmentMode::Stream, store);

        let response = get(router, "/b/blob.bin").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_length: usize = response
            .headers()
            .get("content-length")
            .unwrap()
            .to_str()
            .unwrap()
            .parse()
            .unwrap();

        let body = body_bytes(response).await;
        assert_eq!(content_length, body.len());
        assert_eq!(body.len(), len);
    }
}

#[tokio::test]
async fn test_filename_without_slash_is_full_key() {
    let store = Arc::new(MockObjectStore::new().with_object("b", "archive.tar.gz", test_bytes(8)));
    let router = router_for(FulfillmentMode::Stream, store);

    let response = get(router, "/b/archive.tar.gz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=archive.tar.gz"
    );
}

#[tokio::test]
async fn test_filename_deeply_nested_key() {
    let store = Arc::new(MockObjectStore::new().with_object("b", "a/b/c/d/e.txt", test_bytes(3)));
    let router = router_for(FulfillmentMode::Stream, store);

    let response = get(router, "/b/a/b/c/d/e.txt").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=e.txt"
    );
}

#[tokio::test]
async fn test_percent_encoded_key() {
    let store = Arc::new(
        MockObjectStore::new().with_object("b", "docs/annual report.pdf", test_bytes(5)),
    );
    let router = router_for(FulfillmentMode::Stream, store);

    let response = get(router, "/b/docs/annual%20report.pdf").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-disposition").unwrap(),
        "attachment; filename=annual report.pdf"
    );
}

#[tokio::test]
async fn test_bucket_named_health_with_key() {
    let store = Arc::new(
        MockObjectStore::new().with_object("health", "status.json", test_bytes(2)),
    );
    let router = router_for(FulfillmentMode::Stream, store);

    let response = get(router, "/health/status.json").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Store Failures
// =============================================================================

#[tokio::test]
async fn test_missing_object_is_server_error() {
    let store = Arc::new(MockObjectStore::new());
    let router = router_for(FulfillmentMode::Stream, store);

    let response = get(router, "/my-bucket/missing.txt").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let error = body_json(response).await;
    assert_eq!(error["error"], "not_found");
    let message = error["message"].as_str().unwrap();
    assert!(message.contains("s3://my-bucket/missing.txt"));
    assert!(message.contains(NO_SUCH_KEY_MESSAGE));
}

#[tokio::test]
async fn test_store_failure_message_passed_through() {
    let store = Arc::new(
        MockObjectStore::new()
            .with_object("b", "k.bin", test_bytes(4))
            .failing("AccessDenied: not authorized to read this object"),
    );
    let router = router_for(FulfillmentMode::Stream, store);

    let response = get(router, "/b/k.bin").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );

    let error = body_json(response).await;
    assert_eq!(error["error"], "s3_error");
    assert_eq!(error["status"], 500);
    assert!(error["message"]
        .as_str()
        .unwrap()
        .contains("AccessDenied: not authorized to read this object"));
}

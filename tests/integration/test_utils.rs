//! Test utilities for integration tests.
//!
//! Provides an in-memory [`ObjectStore`] and helpers for building routers and
//! reading responses.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use bytes::Bytes;
use http_body_util::BodyExt;
use tower::ServiceExt;

use s3_gateway::{
    build_fulfiller, create_router, FulfillmentMode, ObjectPayload, ObjectReference, ObjectStore,
    PresignedUrl, RouterConfig, StoreError,
};

/// Message the mock store reports for missing keys, as S3 words it.
pub const NO_SUCH_KEY_MESSAGE: &str = "NoSuchKey: The specified key does not exist.";

// =============================================================================
// Mock Object Store
// =============================================================================

/// An object store that serves pre-configured objects from memory.
///
/// A failure message can be injected to make every call fail.
pub struct MockObjectStore {
    objects: HashMap<(String, String), Bytes>,
    failure: Option<String>,
    get_count: AtomicUsize,
    presign_count: AtomicUsize,
}

impl MockObjectStore {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            failure: None,
            get_count: AtomicUsize::new(0),
            presign_count: AtomicUsize::new(0),
        }
    }

    pub fn with_object(mut self, bucket: &str, key: &str, data: impl Into<Bytes>) -> Self {
        self.objects
            .insert((bucket.to_string(), key.to_string()), data.into());
        self
    }

    /// Make every store call fail with `message`.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn get_count(&self) -> usize {
        self.get_count.load(Ordering::SeqCst)
    }

    pub fn presign_count(&self) -> usize {
        self.presign_count.load(Ordering::SeqCst)
    }
}

impl Default for MockObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MockObjectStore {
    async fn get_object(&self, object: &ObjectReference) -> Result<ObjectPayload, StoreError> {
        self.get_count.fetch_add(1, Ordering::SeqCst);

        if let Some(ref message) = self.failure {
            return Err(StoreError::S3(message.clone()));
        }

        self.objects
            .get(&(object.bucket().to_string(), object.key().to_string()))
            .map(|data| ObjectPayload::new(data.clone()))
            .ok_or_else(|| StoreError::NotFound {
                uri: object.uri(),
                message: NO_SUCH_KEY_MESSAGE.to_string(),
            })
    }

    async fn presign_get(
        &self,
        object: &ObjectReference,
        expires_in: Duration,
    ) -> Result<PresignedUrl, StoreError> {
        self.presign_count.fetch_add(1, Ordering::SeqCst);

        if let Some(ref message) = self.failure {
            return Err(StoreError::Presign(message.clone()));
        }

        Ok(PresignedUrl {
            url: format!(
                "https://{}.mock-s3.local/{}?X-Amz-Expires={}&X-Amz-Signature=deadbeef",
                object.bucket(),
                object.key(),
                expires_in.as_secs()
            ),
            expires_in,
        })
    }
}

// =============================================================================
// Router Helpers
// =============================================================================

/// Build a router for `mode` backed by `store`.
pub fn router_for(mode: FulfillmentMode, store: Arc<MockObjectStore>) -> Router {
    let fulfiller = build_fulfiller(mode, store);
    create_router(fulfiller, RouterConfig::new().with_tracing(false))
}

/// Send a GET request for `uri` through `router`.
pub async fn get(router: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.oneshot(request).await.unwrap()
}

/// Collect a response body into bytes.
pub async fn body_bytes(response: Response<Body>) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = body_bytes(response).await;
    serde_json::from_slice(&body).unwrap()
}

/// Deterministic test content of the given length.
pub fn test_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

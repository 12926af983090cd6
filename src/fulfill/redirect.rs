use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::response::{IntoResponse, Response};
use http::{header, HeaderValue, StatusCode};
use tracing::debug;

use super::ObjectFulfiller;
use crate::config::FulfillmentMode;
use crate::error::{GatewayError, StoreError};
use crate::object::ObjectReference;
use crate::store::{ObjectStore, DEFAULT_PRESIGN_TTL};

/// Redirects the caller to a presigned download URL (307).
///
/// Object existence is not checked; a missing object surfaces as an error
/// when the caller follows the signed URL.
pub struct RedirectFulfiller<S: ObjectStore> {
    store: Arc<S>,
    ttl: Duration,
}

impl<S: ObjectStore> RedirectFulfiller<S> {
    /// Create a fulfiller issuing URLs valid for [`DEFAULT_PRESIGN_TTL`].
    pub fn new(store: Arc<S>) -> Self {
        Self::with_ttl(store, DEFAULT_PRESIGN_TTL)
    }

    pub fn with_ttl(store: Arc<S>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    /// Validity window of issued URLs.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[async_trait]
impl<S: ObjectStore> ObjectFulfiller for RedirectFulfiller<S> {
    async fn fulfill(&self, object: &ObjectReference) -> Result<Response, GatewayError> {
        let presigned = self.store.presign_get(object, self.ttl).await?;

        debug!(
            bucket = object.bucket(),
            key = object.key(),
            expires_in_secs = presigned.expires_in.as_secs(),
            "Redirecting to presigned URL"
        );

        let location = HeaderValue::from_str(&presigned.url).map_err(|e| {
            StoreError::Presign(format!("presigned URL is not a valid header: {}", e))
        })?;

        Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
    }

    fn mode(&self) -> FulfillmentMode {
        FulfillmentMode::Redirect
    }
}

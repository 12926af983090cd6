//! HTTP request handlers for the S3 gateway.
//!
//! # Endpoints
//!
//! - `GET /{bucket}/{*key}` - Serve an object (stream or redirect)
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::error::{GatewayError, RequestError, StoreError};
use crate::fulfill::ObjectFulfiller;
use crate::object::ObjectReference;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state holding the configured fulfiller.
///
/// The fulfiller owns the long-lived object store client, so cloning the
/// state per request only bumps a reference count.
#[derive(Clone)]
pub struct AppState {
    pub fulfiller: Arc<dyn ObjectFulfiller>,
}

impl AppState {
    pub fn new(fulfiller: Arc<dyn ObjectFulfiller>) -> Self {
        Self { fulfiller }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "missing_bucket", "s3_error")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    pub status: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: status.as_u16(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert GatewayError to HTTP response.
///
/// Request errors are 400 and logged at WARN; every store failure is 500,
/// logged at ERROR, with the underlying message passed through.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            GatewayError::Request(RequestError::MissingBucket) => {
                (StatusCode::BAD_REQUEST, "missing_bucket")
            }
            GatewayError::Request(RequestError::MissingKey) => {
                (StatusCode::BAD_REQUEST, "missing_key")
            }
            GatewayError::Request(RequestError::InvalidPath(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_path")
            }
            GatewayError::Store(StoreError::NotFound { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "not_found")
            }
            GatewayError::Store(StoreError::S3(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "s3_error")
            }
            GatewayError::Store(StoreError::Body(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "body_error")
            }
            GatewayError::Store(StoreError::Presign(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "presign_error")
            }
        };
        let message = self.to_string();

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                message
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        let error_response = ErrorResponse::new(error_type, message, status);

        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle object requests.
///
/// The bucket and key are parsed from the raw request path rather than a
/// typed `Path` extractor so that an empty bucket segment reaches this
/// handler and is answered with 400 instead of a routing 404.
pub async fn object_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, GatewayError> {
    let object = ObjectReference::from_path(uri.path())?;

    debug!(
        bucket = object.bucket(),
        key = object.key(),
        mode = %state.fulfiller.mode(),
        "Fulfilling object request"
    );

    state.fulfiller.fulfill(&object).await
}

/// Health check endpoint.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

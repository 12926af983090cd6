//! Router configuration for the S3 gateway.
//!
//! # Route Structure
//!
//! ```text
//! /health              - Health check
//! /                    - Object request with empty bucket (400)
//! /{bucket}/{*key}     - Object request, answered by the configured fulfiller
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use s3_gateway::{build_fulfiller, create_router, FulfillmentMode, RouterConfig, S3ObjectStore};
//!
//! let store = Arc::new(S3ObjectStore::new(client));
//! let fulfiller = build_fulfiller(FulfillmentMode::Redirect, store);
//! let router = create_router(fulfiller, RouterConfig::default());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:4041").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, object_handler, AppState};
use crate::fulfill::ObjectFulfiller;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    pub fn new() -> Self {
        Self {
            enable_tracing: true,
        }
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// Object routes match any path, so `/health` shadows a bucket named
/// `health` only when no key follows it.
pub fn create_router(fulfiller: Arc<dyn ObjectFulfiller>, config: RouterConfig) -> Router {
    let app_state = AppState::new(fulfiller);

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/", get(object_handler))
        .route("/{*path}", get(object_handler))
        .with_state(app_state);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

// =============================================================================
// Tests
// =============================================================================

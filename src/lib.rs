//! # S3 Gateway
//!
//! A minimal HTTP gateway exposing objects in S3-compatible storage over
//! plain `GET /<bucket>/<key>` requests.
//!
//! Each request is answered by one of two strategies, selected at startup:
//!
//! - **Stream**: download the object and return its bytes as an attachment
//! - **Redirect**: respond 307 to a presigned URL valid for five minutes
//!
//! ## Architecture
//!
//! - [`object`] - Request path parsing into bucket/key references
//! - [`store`] - Object store boundary and the S3 implementation
//! - [`fulfill`] - Streaming and redirect fulfillment strategies
//! - [`server`] - Axum handlers and router
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use s3_gateway::{
//!     build_fulfiller, create_router, create_s3_client, FulfillmentMode, RouterConfig,
//!     S3ObjectStore,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = create_s3_client(None, "us-east-1").await;
//!     let store = Arc::new(S3ObjectStore::new(client));
//!     let fulfiller = build_fulfiller(FulfillmentMode::Stream, store);
//!     let router = create_router(fulfiller, RouterConfig::default());
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:4041").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod config;
pub mod error;
pub mod fulfill;
pub mod object;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::{Config, FulfillmentMode};
pub use error::{GatewayError, RequestError, StoreError};
pub use fulfill::{build_fulfiller, ObjectFulfiller, RedirectFulfiller, StreamingFulfiller};
pub use object::{ObjectPayload, ObjectReference};
pub use server::{
    create_router, health_handler, object_handler, AppState, ErrorResponse, HealthResponse,
    RouterConfig,
};
pub use store::{
    create_s3_client, ObjectStore, PresignedUrl, S3ObjectStore, DEFAULT_PRESIGN_TTL,
};

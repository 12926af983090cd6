//! Fulfillment strategies for object requests.
//!
//! ```text
//!            ObjectReference
//!                   │
//!                   ▼
//!        ┌─────────────────────┐
//!        │  ObjectFulfiller    │
//!        └──────────┬──────────┘
//!          ┌────────┴─────────┐
//!          ▼                  ▼
//! ┌──────────────────┐ ┌──────────────────┐
//! │StreamingFulfiller│ │RedirectFulfiller │
//! │ 200 + file bytes │ │ 307 → signed URL │
//! └──────────────────┘ └──────────────────┘
//! ```
//!
//! The strategy is chosen once at startup from [`FulfillmentMode`].

mod redirect;
mod streaming;

use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;

use crate::config::FulfillmentMode;
use crate::error::GatewayError;
use crate::object::ObjectReference;
use crate::store::ObjectStore;

pub use redirect::RedirectFulfiller;
pub use streaming::{content_disposition, StreamingFulfiller};

/// Turns a parsed object reference into an HTTP response.
#[async_trait]
pub trait ObjectFulfiller: Send + Sync {
    /// Answer a request for `object`.
    async fn fulfill(&self, object: &ObjectReference) -> Result<Response, GatewayError>;

    /// The strategy this fulfiller implements.
    fn mode(&self) -> FulfillmentMode;
}

/// Build the fulfiller for `mode` on top of a shared store.
pub fn build_fulfiller<S>(mode: FulfillmentMode, store: Arc<S>) -> Arc<dyn ObjectFulfiller>
where
    S: ObjectStore + 'static,
{
    match mode {
        FulfillmentMode::Stream => Arc::new(StreamingFulfiller::new(store)),
        FulfillmentMode::Redirect => Arc::new(RedirectFulfiller::new(store)),
    }
}

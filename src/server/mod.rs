//! HTTP server layer for the S3 gateway.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                      HTTP Layer                         │
//! │                GET /{bucket}/{*key}                     │
//! │                                                         │
//! │  ┌──────────────────────┐   ┌────────────────────────┐  │
//! │  │      handlers        │   │         routes         │  │
//! │  │ (parse, errors)      │   │    (router config)     │  │
//! │  └──────────────────────┘   └────────────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{health_handler, object_handler, AppState, ErrorResponse, HealthResponse};
pub use routes::{create_router, RouterConfig};

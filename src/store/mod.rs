//! Object store client boundary.
//!
//! The gateway talks to storage only through [`ObjectStore`], so handlers can
//! run against S3 in production and an in-memory fake in tests.

mod s3;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::object::{ObjectPayload, ObjectReference};

pub use s3::{create_s3_client, S3ObjectStore};

/// Validity window of presigned download URLs (5 minutes).
pub const DEFAULT_PRESIGN_TTL: Duration = Duration::from_secs(300);

/// A time-limited signed URL for a single object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresignedUrl {
    /// The signed URL
    pub url: String,

    /// How long the URL stays valid after issuance
    pub expires_in: Duration,
}

/// Trait for fetching objects from a bucket/key addressed store.
///
/// Implementations are shared across all requests and must be thread-safe.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read the full object into memory.
    async fn get_object(&self, object: &ObjectReference) -> Result<ObjectPayload, StoreError>;

    /// Build a signed GET URL for the object, valid for `expires_in`.
    ///
    /// Does not check that the object exists.
    async fn presign_get(
        &self,
        object: &ObjectReference,
        expires_in: Duration,
    ) -> Result<PresignedUrl, StoreError>;
}

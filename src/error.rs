use thiserror::Error;

/// Errors caused by a malformed client request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The bucket segment of the path is empty
    #[error("S3 File must be specified")]
    MissingBucket,

    /// The key portion of the path is empty
    #[error("S3 key must be specified")]
    MissingKey,

    /// The path could not be percent-decoded as UTF-8
    #[error("Invalid request path: {0}")]
    InvalidPath(String),
}

/// Errors returned by the object store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Object does not exist; `message` is the store's own error text
    #[error("Object not found: {uri}: {message}")]
    NotFound { uri: String, message: String },

    /// Error from S3 or S3-compatible storage
    #[error("S3 error: {0}")]
    S3(String),

    /// The object body could not be read to completion
    #[error("Failed to read object body: {0}")]
    Body(String),

    /// A presigned request could not be built
    #[error("Failed to presign request: {0}")]
    Presign(String),
}

/// Top-level error for a single gateway request.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// Malformed request path (HTTP 400)
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Object store failure (HTTP 500)
    #[error(transparent)]
    Store(#[from] StoreError),
}

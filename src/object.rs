//! Request-scoped object values.
//!
//! An [`ObjectReference`] is parsed from the request path of every gateway
//! call; an [`ObjectPayload`] only exists while a streamed response is being
//! built.

use std::fmt;

use bytes::Bytes;

use crate::error::RequestError;

/// A bucket/key pair addressing a single object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectReference {
    bucket: String,
    key: String,
}

impl ObjectReference {
    /// Create a reference from an already-decoded bucket and key.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Result<Self, RequestError> {
        let bucket = bucket.into();
        let key = key.into();

        if bucket.is_empty() {
            return Err(RequestError::MissingBucket);
        }
        if key.is_empty() {
            return Err(RequestError::MissingKey);
        }

        Ok(Self { bucket, key })
    }

    /// Parse a raw request path of the form `/<bucket>/<key...>`.
    ///
    /// One leading slash is stripped, the bucket ends at the next slash and
    /// everything after it is the key, taken verbatim after percent-decoding.
    /// An empty bucket is checked before the key so that `/` and `//key`
    /// both report a missing bucket.
    pub fn from_path(path: &str) -> Result<Self, RequestError> {
        let path = path.strip_prefix('/').unwrap_or(path);
        let (bucket, key) = path.split_once('/').unwrap_or((path, ""));

        if bucket.is_empty() {
            return Err(RequestError::MissingBucket);
        }

        Self::new(decode(bucket)?, decode(key)?)
    }

    /// Get the bucket name.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Get the object key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The final `/`-delimited segment of the key.
    ///
    /// Returns the whole key when it contains no slash, and an empty string
    /// when the key ends with one.
    pub fn file_name(&self) -> &str {
        self.key.rsplit('/').next().unwrap_or(&self.key)
    }

    /// `s3://bucket/key` form used in logs and error messages.
    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

fn decode(segment: &str) -> Result<String, RequestError> {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .map_err(|e| RequestError::InvalidPath(e.to_string()))
}

/// Full contents of an object, buffered in memory.
#[derive(Debug, Clone)]
pub struct ObjectPayload {
    pub bytes: Bytes,
}

impl ObjectPayload {
    pub fn new(bytes: impl Into<Bytes>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Number of bytes in the object.
    pub fn byte_length(&self) -> u64 {
        self.bytes.len() as u64
    }
}

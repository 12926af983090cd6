use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use http::{header, HeaderValue, StatusCode};
use tracing::debug;

use super::ObjectFulfiller;
use crate::config::FulfillmentMode;
use crate::error::GatewayError;
use crate::object::ObjectReference;
use crate::store::ObjectStore;

/// Downloads the whole object and returns it as an attachment.
///
/// The object is buffered in memory before the first byte is sent, so memory
/// use is proportional to object size.
pub struct StreamingFulfiller<S: ObjectStore> {
    store: Arc<S>,
}

impl<S: ObjectStore> StreamingFulfiller<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: ObjectStore> ObjectFulfiller for StreamingFulfiller<S> {
    async fn fulfill(&self, object: &ObjectReference) -> Result<Response, GatewayError> {
        let payload = self.store.get_object(object).await?;

        let file_name = object.file_name();
        let num_bytes = payload.byte_length();
        debug!(file_name, num_bytes, "Returning file");

        let headers = [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/octet-stream"),
            ),
            (
                header::HeaderName::from_static("content-description"),
                HeaderValue::from_static("File Transfer"),
            ),
            (
                header::HeaderName::from_static("content-transfer-encoding"),
                HeaderValue::from_static("binary"),
            ),
            (header::CONTENT_DISPOSITION, content_disposition(file_name)),
            (header::CONTENT_LENGTH, HeaderValue::from(num_bytes)),
        ];

        Ok((StatusCode::OK, headers, Body::from(payload.bytes)).into_response())
    }

    fn mode(&self) -> FulfillmentMode {
        FulfillmentMode::Stream
    }
}

/// Build an `attachment` Content-Disposition value for `file_name`.
///
/// Names that are not valid header text (control characters, non-ASCII) are
/// sent in the RFC 5987 `filename*` form instead.
pub fn content_disposition(file_name: &str) -> HeaderValue {
    let plain = format!("attachment; filename={}", file_name);
    if file_name.is_ascii() {
        if let Ok(value) = HeaderValue::from_str(&plain) {
            return value;
        }
    }

    let encoded = format!(
        "attachment; filename*=UTF-8''{}",
        urlencoding::encode(file_name)
    );
    // Percent-encoded output is always visible ASCII
    HeaderValue::from_str(&encoded).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}

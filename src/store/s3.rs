use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client;
use tracing::debug;

use super::{ObjectStore, PresignedUrl};
use crate::error::StoreError;
use crate::object::{ObjectPayload, ObjectReference};

/// S3-backed implementation of [`ObjectStore`].
///
/// Holds one client for the lifetime of the process. `Client` is an `Arc`
/// internally, so clones share the same connection pool.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, object: &ObjectReference) -> Result<ObjectPayload, StoreError> {
        debug!(bucket = object.bucket(), key = object.key(), "Downloading S3 file");

        let resp = self
            .client
            .get_object()
            .bucket(object.bucket())
            .key(object.key())
            .send()
            .await
            .map_err(|e| {
                let is_not_found = e
                    .as_service_error()
                    .map(|se| se.is_no_such_key())
                    .unwrap_or(false);
                let message = DisplayErrorContext(&e).to_string();

                if is_not_found {
                    return StoreError::NotFound {
                        uri: object.uri(),
                        message,
                    };
                }

                StoreError::S3(message)
            })?;

        let data = resp
            .body
            .collect()
            .await
            .map_err(|e| StoreError::Body(e.to_string()))?
            .into_bytes();

        Ok(ObjectPayload::new(data))
    }

    async fn presign_get(
        &self,
        object: &ObjectReference,
        expires_in: Duration,
    ) -> Result<PresignedUrl, StoreError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| StoreError::Presign(e.to_string()))?;

        let request = self
            .client
            .get_object()
            .bucket(object.bucket())
            .key(object.key())
            .presigned(presigning)
            .await
            .map_err(|e| StoreError::Presign(DisplayErrorContext(&e).to_string()))?;

        Ok(PresignedUrl {
            url: request.uri().to_string(),
            expires_in,
        })
    }
}

/// Create an S3 client with optional custom endpoint and region.
///
/// Credentials come from the default AWS provider chain. Use a custom
/// endpoint for S3-compatible services like MinIO:
/// ```ignore
/// let client = create_s3_client(Some("http://localhost:9000"), "us-east-1").await;
/// ```
pub async fn create_s3_client(endpoint_url: Option<&str>, region: &str) -> Client {
    let region = aws_config::Region::new(region.to_string());
    let mut config_loader =
        aws_config::defaults(aws_config::BehaviorVersion::latest()).region(region);

    if let Some(endpoint) = endpoint_url {
        config_loader = config_loader.endpoint_url(endpoint);
    }

    let sdk_config = config_loader.load().await;

    // S3-compatible services generally need path-style addressing
    let s3_config = if endpoint_url.is_some() {
        aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(true)
            .build()
    } else {
        aws_sdk_s3::config::Builder::from(&sdk_config).build()
    };

    Client::from_conf(s3_config)
}

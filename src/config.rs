//! Configuration management for the S3 gateway.
//!
//! Configuration is parsed once at startup from command-line arguments, with
//! every option also readable from an `S3GW_`-prefixed environment variable,
//! and then passed explicitly to the components that need it.
//!
//! # Environment Variables
//!
//! - `S3GW_HOST` - Server bind address (default: 0.0.0.0)
//! - `S3GW_PORT` - Server port (default: 4041)
//! - `S3GW_MODE` - Fulfillment strategy, `stream` or `redirect` (default: stream)
//! - `S3GW_S3_REGION` - AWS region (default: us-east-1)
//! - `S3GW_S3_ENDPOINT` - Custom S3 endpoint for S3-compatible services
//!
//! AWS credentials are resolved by the SDK's default provider chain.

use std::fmt;

use clap::{Parser, ValueEnum};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 4041;

/// Default AWS region.
pub const DEFAULT_REGION: &str = "us-east-1";

// =============================================================================
// Fulfillment Mode
// =============================================================================

/// How object requests are answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FulfillmentMode {
    /// Download the object and return its bytes in the response body
    #[default]
    Stream,

    /// Redirect the caller to a presigned download URL
    Redirect,
}

impl fmt::Display for FulfillmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FulfillmentMode::Stream => write!(f, "stream"),
            FulfillmentMode::Redirect => write!(f, "redirect"),
        }
    }
}

// =============================================================================
// CLI Arguments
// =============================================================================

/// S3 Gateway - serve S3 objects over plain HTTP GET.
///
/// Requests to `/<bucket>/<key>` are answered either with the object bytes
/// or with a redirect to a short-lived presigned URL.
#[derive(Parser, Debug, Clone)]
#[command(name = "s3-gateway")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "S3GW_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "S3GW_PORT")]
    pub port: u16,

    /// Enable debug logs.
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// Fulfillment strategy for object requests.
    #[arg(long, value_enum, default_value_t = FulfillmentMode::Stream, env = "S3GW_MODE")]
    pub mode: FulfillmentMode,

    /// AWS region for S3.
    #[arg(long, default_value = DEFAULT_REGION, env = "S3GW_S3_REGION")]
    pub s3_region: String,

    /// Custom S3 endpoint URL for S3-compatible services (MinIO, etc.).
    ///
    /// If not specified, uses the default AWS S3 endpoint.
    #[arg(long, env = "S3GW_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host must not be empty. Set --host or S3GW_HOST".to_string());
        }

        if self.port == 0 {
            return Err("port must be greater than 0".to_string());
        }

        if self.s3_region.is_empty() {
            return Err(
                "S3 region must not be empty. Set --s3-region or S3GW_S3_REGION".to_string(),
            );
        }

        if let Some(ref endpoint) = self.s3_endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(format!(
                    "S3 endpoint must start with http:// or https://, got '{}'",
                    endpoint
                ));
            }
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================

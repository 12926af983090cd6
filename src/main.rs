//! S3 Gateway - serve S3 objects over plain HTTP GET.
//!
//! This binary parses configuration, builds the shared S3 client and the
//! selected fulfiller, and starts the HTTP server.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use s3_gateway::{
    build_fulfiller, create_router, create_s3_client, Config, RouterConfig, S3ObjectStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.debug);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting S3 gateway v{}", env!("CARGO_PKG_VERSION"));
    info!("  Mode: {}", config.mode);
    info!("  S3 region: {}", config.s3_region);
    if let Some(ref endpoint) = config.s3_endpoint {
        info!("  S3 endpoint: {}", endpoint);
    }

    // One client for the whole process, shared by every request
    let s3_client = create_s3_client(config.s3_endpoint.as_deref(), &config.s3_region).await;
    let store = Arc::new(S3ObjectStore::new(s3_client));
    let fulfiller = build_fulfiller(config.mode, store);

    let router_config = RouterConfig::new().with_tracing(!config.no_tracing);
    let router = create_router(fulfiller, router_config);

    let addr = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            return ExitCode::FAILURE;
        }
    };

    info!("Server listening on: http://{}", addr);
    info!("  Try: curl -OJ http://{}/<bucket>/<key>", addr);

    if let Err(e) = axum::serve(listener, router).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(debug: bool) {
    let env_filter = if debug {
        "s3_gateway=debug,tower_http=debug"
    } else {
        "s3_gateway=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

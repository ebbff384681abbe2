//! ai-service entry point.
//!
//! Initializes tracing, builds the single-route router, and starts the HTTP
//! server on the fixed port. The serve call blocks forever; if the listener
//! cannot be established the error is logged and the process exits non-zero.

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ai_service::{create_router, start_server, DEFAULT_LOG_FILTER, PORT};

#[tokio::main]
async fn main() {
    // Initialize tracing; RUST_LOG overrides the default filter
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app = create_router();
    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));

    if let Err(e) = start_server(app, addr).await {
        tracing::error!(error = %e, "Could not start server");
        std::process::exit(1);
    }
}

//! HTTP server startup logic.
//!
//! Binds the listener and runs the serve loop. The serve call parks the
//! calling task until an unrecoverable error occurs; the caller's only
//! responsibility is to log the error and terminate.

use std::net::SocketAddr;

use axum::Router;

/// Server startup error.
///
/// There is exactly one failure class: the listener could not be
/// established or the serve loop died. Port-in-use, permission-denied, and
/// every other accept-path failure all land here.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind or serve: {0}")]
    Listener(#[from] std::io::Error),
}

/// Start the HTTP server on the given address.
///
/// This function blocks until the server fails; it does not return under
/// normal operation. There is no graceful shutdown - the process runs until
/// killed externally.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    tracing::info!(%addr, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

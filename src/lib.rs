//! ai-service: a liveness endpoint HTTP server.
//!
//! The service exposes a single `/healthcheck` route and nothing else.
//! External monitors and orchestrators probe it to verify the process is
//! alive and accepting connections.

pub mod routes;
pub mod server;

pub use routes::create_router;
pub use server::{start_server, ServerError};

/// TCP port the service listens on, bound on all interfaces.
pub const PORT: u16 = 8080;

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "ai_service=info";

//! HTTP route handlers.
//!
//! The service registers exactly one route, the `/healthcheck` liveness
//! probe. The response Content-Type is pinned at the router level so the
//! wire contract does not depend on what the handler happens to return.
//! Every other path falls through to the framework's default 404.

pub mod health;

use axum::{routing::any, Router};
use http::header::{HeaderValue, CONTENT_TYPE};
use tower_http::set_header::SetResponseHeaderLayer;

/// Content-Type sent with every health check response.
pub const HEALTHCHECK_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Creates the Axum router with the liveness route.
pub fn create_router() -> Router {
    // Health check - any method, fixed plaintext body
    let health_routes = Router::new()
        .route("/healthcheck", any(health::healthcheck))
        .layer(SetResponseHeaderLayer::overriding(
            CONTENT_TYPE,
            HeaderValue::from_static(HEALTHCHECK_CONTENT_TYPE),
        ));

    Router::new().merge(health_routes)
}

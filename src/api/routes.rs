//! HTTP API route definitions.

use axum::{middleware, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{handle_panic, health, not_found, service_info, AppState};
use crate::metrics::track_http;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .fallback(not_found);

    with_middleware(routes).with_state(state)
}

/// Wrap routes in the shared stack: request metrics, tracing, and
/// panic-to-500 outermost.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn(track_http))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

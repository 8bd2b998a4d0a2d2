pub mod availabilities;
pub mod middleware;

pub use middleware::*;

use axum::{http::StatusCode, middleware::from_fn_with_state, routing::get, Router};
use tower_http::trace::TraceLayer;

async fn health() -> StatusCode {
    StatusCode::OK
}

// Preflights are answered by the CORS middleware; this keeps the method
// registered so they route instead of hitting a 405.
async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub fn build_router(state: AppState) -> Router {
    let storefront = Router::new()
        .route(
            "/availabilities",
            get(availabilities::list_availabilities).options(preflight),
        )
        .layer(from_fn_with_state(state.clone(), storefront_cors));

    let operator = Router::new()
        .route(
            "/schedule-template",
            get(availabilities::get_schedule_template),
        )
        .route_layer(from_fn_with_state(state.clone(), require_operator));

    Router::new()
        .route("/health", get(health))
        .merge(storefront)
        .merge(operator)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

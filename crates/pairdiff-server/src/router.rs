use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use pairdiff_protocol::endpoints;

use crate::handler::{self, AppState};

/// Build the axum router with all pairdiff endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(handler::root_handler))
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::COMPARE, get(handler::compare_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

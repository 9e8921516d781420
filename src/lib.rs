use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

use domain::vibes::VibeSet;

#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub vibes: VibeSet,
}

impl AppState {
    pub fn new(vibes: VibeSet) -> Self {
        Self { vibes }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::home))
        .route("/api/vibe", get(http::handlers::vibe_check))
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub mod auth;
pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::{middleware, routing::{get, post}, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::corpus::Corpus;
use crate::models::Threshold;

#[derive(Clone)]
pub struct AppState {
    /// Shared read-only corpus
    pub corpus: Arc<Corpus>,
    /// Used when a request omits its threshold
    pub default_threshold: Threshold,
    /// Used when a request omits its candidate limit
    pub default_limit: usize,
}

impl AppState {
    pub fn new(corpus: Arc<Corpus>, default_threshold: Threshold, default_limit: usize) -> Self {
        Self {
            corpus,
            default_threshold,
            default_limit,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/match", post(routes::matches::match_query))
        .route("/api/corpus/stats", get(routes::corpus::get_stats))
        .route("/api/corpus/entries", get(routes::corpus::list_entries))
        .route_layer(middleware::from_fn(auth::api_auth_middleware));

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

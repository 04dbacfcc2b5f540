use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "quizsolver",
        "version": env!("CARGO_PKG_VERSION"),
        "entries": state.corpus.len(),
        "time": chrono::Utc::now().to_rfc3339(),
    }))
}

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use crate::api::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "stats": state.corpus.stats(),
        "duplicates": state.corpus.duplicates().len(),
    }))
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let limit = query.limit.unwrap_or(20);
    let offset = query.offset.unwrap_or(0);

    let entries: Vec<_> = state.corpus.iter().skip(offset).take(limit).collect();

    Json(json!({
        "entries": entries,
        "offset": offset,
        "total": state.corpus.len(),
    }))
}

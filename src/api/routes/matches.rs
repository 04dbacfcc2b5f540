use axum::{extract::State, Json};
use tracing::info;

use crate::api::models::{MatchRequest, MatchResponse, MatchView, MAX_QUERY_CHARS};
use crate::api::AppState;
use crate::errors::SolverError;
use crate::matching::rank_matches;
use crate::models::Threshold;

pub async fn match_query(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, SolverError> {
    let request_id = uuid::Uuid::new_v4().to_string();
    let query_chars = req.query.chars().count();
    if query_chars > MAX_QUERY_CHARS {
        return Err(SolverError::InvalidQuery(format!(
            "query has {} chars, the limit is {}",
            query_chars, MAX_QUERY_CHARS
        )));
    }
    let threshold = match req.threshold {
        Some(t) => Threshold::new(t)?,
        None => state.default_threshold,
    };
    let limit = req.limit.unwrap_or(state.default_limit).max(1);

    let candidates = rank_matches(&req.query, &state.corpus, threshold, limit);
    // The ranked head is the best match: ties stay in corpus order.
    let best = candidates.first().map(MatchView::from);

    info!(
        request_id = %request_id,
        threshold = threshold.value(),
        matched = best.is_some(),
        confidence = best.as_ref().map(|b| b.confidence),
        "Match request"
    );

    Ok(Json(MatchResponse {
        request_id,
        query: req.query,
        threshold: threshold.value(),
        best,
        candidates: candidates.iter().map(MatchView::from).collect(),
    }))
}

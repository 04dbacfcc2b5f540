use serde::{Deserialize, Serialize};
use crate::models::Match;

/// Longest query `POST /api/match` will score, in chars.
pub const MAX_QUERY_CHARS: usize = 4096;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub query: String,
    pub threshold: Option<f64>,
    pub limit: Option<usize>,
}

/// Wire form of a selected entry.
#[derive(Debug, Serialize)]
pub struct MatchView {
    pub question: String,
    pub answer: bool,
    pub explanation: Option<String>,
    pub ratio: f64,
    pub confidence: f64,
}

impl From<&Match<'_>> for MatchView {
    fn from(m: &Match<'_>) -> Self {
        Self {
            question: m.entry.key.clone(),
            answer: m.entry.answer,
            explanation: m.entry.explanation.clone(),
            ratio: m.ratio,
            confidence: m.confidence,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub request_id: String,
    pub query: String,
    pub threshold: f64,
    pub best: Option<MatchView>,
    pub candidates: Vec<MatchView>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

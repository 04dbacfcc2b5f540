use serde::Serialize;
use super::entry::CorpusEntry;

/// The corpus entry selected for a query, with its similarity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Match<'a> {
    pub entry: &'a CorpusEntry,
    /// Raw similarity ratio in `[0.0, 1.0]`.
    pub ratio: f64,
    /// `ratio` on a 0-100 scale, rounded to two decimals.
    pub confidence: f64,
}

impl<'a> Match<'a> {
    pub fn new(entry: &'a CorpusEntry, ratio: f64) -> Self {
        Self {
            entry,
            ratio,
            confidence: confidence_percent(ratio),
        }
    }
}

/// `round(ratio * 10000) / 100`.
pub fn confidence_percent(ratio: f64) -> f64 {
    (ratio * 10_000.0).round() / 100.0
}

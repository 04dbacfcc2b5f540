use serde::{Deserialize, Serialize};

/// A recorded question together with its known answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Question text as it appears in the corpus document; unique per corpus.
    pub key: String,
    /// Whether the statement is true.
    pub answer: bool,
    /// Optional justification of the answer.
    pub explanation: Option<String>,
}

impl CorpusEntry {
    pub fn new(key: impl Into<String>, answer: bool, explanation: Option<String>) -> Self {
        Self {
            key: key.into(),
            answer,
            explanation,
        }
    }

    pub fn has_explanation(&self) -> bool {
        self.explanation.as_ref().map_or(false, |e| !e.trim().is_empty())
    }
}

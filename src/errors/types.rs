use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SolverError {
    /// Process exit code used by the binary.
    pub fn exit_code(&self) -> i32 {
        match self {
            SolverError::Config(_) | SolverError::Yaml(_) => 2,
            SolverError::Corpus(_) => 3,
            SolverError::Ocr(_) | SolverError::Timeout(_) => 4,
            SolverError::InvalidThreshold(_) | SolverError::InvalidQuery(_) => 5,
            _ => 1,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::Threshold;

pub const DEFAULT_CORPUS_PATH: &str = "databases/questions.json";
pub const DEFAULT_LIMIT: usize = 5;
pub const DEFAULT_OCR_BINARY: &str = "tesseract";
pub const DEFAULT_OCR_LANGUAGE: &str = "spa";
pub const DEFAULT_OCR_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_OCR_CONCURRENCY: usize = 4;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SolverConfig {
    pub corpus: Option<CorpusConfig>,
    pub matching: Option<MatchingConfig>,
    pub ocr: Option<OcrConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CorpusConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct MatchingConfig {
    pub threshold: Option<Threshold>,
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OcrConfig {
    pub binary: Option<String>,
    pub language: Option<String>,
    pub timeout_secs: Option<u64>,
    pub concurrency: Option<usize>,
    /// Fold runs of whitespace (including line breaks) into single spaces.
    pub collapse_whitespace: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl SolverConfig {
    pub fn corpus_path(&self) -> String {
        self.corpus
            .as_ref()
            .and_then(|c| c.path.clone())
            .unwrap_or_else(|| DEFAULT_CORPUS_PATH.to_string())
    }

    pub fn threshold(&self) -> Threshold {
        self.matching
            .as_ref()
            .and_then(|m| m.threshold)
            .unwrap_or_default()
    }

    pub fn limit(&self) -> usize {
        self.matching
            .as_ref()
            .and_then(|m| m.limit)
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub fn ocr(&self) -> OcrSettings {
        let ocr = self.ocr.clone().unwrap_or_default();
        OcrSettings {
            binary: ocr.binary.unwrap_or_else(|| DEFAULT_OCR_BINARY.to_string()),
            language: ocr.language.unwrap_or_else(|| DEFAULT_OCR_LANGUAGE.to_string()),
            timeout_secs: ocr.timeout_secs.unwrap_or(DEFAULT_OCR_TIMEOUT_SECS),
            concurrency: ocr.concurrency.unwrap_or(DEFAULT_OCR_CONCURRENCY),
            collapse_whitespace: ocr.collapse_whitespace.unwrap_or(false),
        }
    }

    pub fn host(&self) -> String {
        self.server
            .as_ref()
            .and_then(|s| s.host.clone())
            .unwrap_or_else(|| DEFAULT_HOST.to_string())
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(DEFAULT_PORT)
    }
}

/// OCR options with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcrSettings {
    pub binary: String,
    pub language: String,
    pub timeout_secs: u64,
    pub concurrency: usize,
    pub collapse_whitespace: bool,
}

impl Default for OcrSettings {
    fn default() -> Self {
        SolverConfig::default().ocr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config_default() {
        let config = SolverConfig::default();
        assert!(config.corpus.is_none());
        assert!(config.matching.is_none());
        assert_eq!(config.corpus_path(), DEFAULT_CORPUS_PATH);
        assert_eq!(config.threshold().value(), 0.0);
        assert_eq!(config.limit(), DEFAULT_LIMIT);
        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
    }

    #[test]
    fn test_ocr_defaults() {
        let ocr = OcrSettings::default();
        assert_eq!(ocr.binary, "tesseract");
        assert_eq!(ocr.language, "spa");
        assert_eq!(ocr.timeout_secs, 60);
        assert_eq!(ocr.concurrency, 4);
        assert!(!ocr.collapse_whitespace);
    }

    #[test]
    fn test_partial_sections_fill_defaults() {
        let config: SolverConfig = serde_yaml::from_str(
            "matching:\n  threshold: 65\nocr:\n  language: eng\n",
        )
        .unwrap();
        assert_eq!(config.threshold().value(), 65.0);
        assert_eq!(config.limit(), DEFAULT_LIMIT);
        let ocr = config.ocr();
        assert_eq!(ocr.language, "eng");
        assert_eq!(ocr.binary, "tesseract");
    }

    #[test]
    fn test_threshold_out_of_range_fails_to_parse() {
        let parsed: Result<SolverConfig, _> = serde_yaml::from_str("matching:\n  threshold: 140\n");
        assert!(parsed.is_err());
    }
}

use std::path::Path;
use crate::errors::SolverError;
use super::types::SolverConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::{debug, warn};

pub async fn parse_config(path: &Path) -> Result<SolverConfig, SolverError> {
    if !path.exists() {
        return Err(SolverError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(SolverError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

/// Parse the config named on the command line, or fall back to defaults.
pub async fn load_or_default(path: Option<&str>) -> Result<SolverConfig, SolverError> {
    match path {
        Some(p) => parse_config(Path::new(p)).await,
        None => {
            debug!("No config file given, using defaults");
            Ok(SolverConfig::default())
        }
    }
}

pub fn parse_config_str(content: &str) -> Result<SolverConfig, SolverError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // An empty file parses to null
    if yaml.is_null() {
        return Ok(SolverConfig::default());
    }

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: SolverConfig = serde_yaml::from_value(yaml)
        .map_err(|e| SolverError::Config(format!("Invalid config: {}", e)))?;

    // Semantic conflict detection
    validate_conflicts(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), SolverError> {
    // Convert YAML value to JSON for schema validation
    let json_value: serde_json::Value = serde_json::to_value(yaml)
        .map_err(|e| SolverError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| SolverError::Config(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(&json_value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();
        // Advisory only; typed parsing and conflict checks reject real problems.
        for msg in &messages {
            warn!(validation_error = %msg, "Config schema warning");
        }
    }

    Ok(())
}

/// Detect semantic conflicts in the parsed configuration.
fn validate_conflicts(config: &SolverConfig) -> Result<(), SolverError> {
    if let Some(matching) = &config.matching {
        if matching.limit == Some(0) {
            return Err(SolverError::Config("matching.limit must be at least 1".into()));
        }
    }

    if let Some(ocr) = &config.ocr {
        if ocr.concurrency == Some(0) {
            return Err(SolverError::Config("ocr.concurrency must be at least 1".into()));
        }
        if ocr.timeout_secs == Some(0) {
            return Err(SolverError::Config("ocr.timeout_secs must be at least 1".into()));
        }
        if ocr.language.as_ref().map_or(false, |l| l.trim().is_empty()) {
            return Err(SolverError::Config("ocr.language must not be empty".into()));
        }
    }

    if let Some(corpus) = &config.corpus {
        if corpus.path.as_ref().map_or(false, |p| p.trim().is_empty()) {
            warn!("corpus.path is empty, the default corpus location will be used");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MatchingConfig, OcrConfig};

    #[test]
    fn test_validate_conflicts_zero_limit() {
        let config = SolverConfig {
            matching: Some(MatchingConfig { threshold: None, limit: Some(0) }),
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_zero_concurrency() {
        let config = SolverConfig {
            ocr: Some(OcrConfig { concurrency: Some(0), ..Default::default() }),
            ..Default::default()
        };
        assert!(validate_conflicts(&config).is_err());
    }

    #[test]
    fn test_validate_conflicts_empty_config() {
        let config = SolverConfig::default();
        assert!(validate_conflicts(&config).is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config_str(
            r#"
corpus:
  path: data/questions.json
matching:
  threshold: 70
  limit: 3
ocr:
  binary: /usr/bin/tesseract
  language: spa+eng
  timeout_secs: 30
  concurrency: 2
  collapse_whitespace: true
server:
  host: 0.0.0.0
  port: 9000
"#,
        )
        .unwrap();
        assert_eq!(config.corpus_path(), "data/questions.json");
        assert_eq!(config.threshold().value(), 70.0);
        assert_eq!(config.limit(), 3);
        assert!(config.ocr().collapse_whitespace);
        assert_eq!(config.port(), 9000);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = parse_config_str("").unwrap();
        assert_eq!(config.limit(), crate::config::DEFAULT_LIMIT);
    }

    #[test]
    fn test_bad_threshold_is_config_error() {
        let err = parse_config_str("matching:\n  threshold: -3\n").unwrap_err();
        assert!(matches!(err, SolverError::Config(_)));
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let err = parse_config(Path::new("/no/such/quizsolver.yaml")).await.unwrap_err();
        assert!(matches!(err, SolverError::Config(_)));
    }

    #[tokio::test]
    async fn test_load_or_default_without_path() {
        let config = load_or_default(None).await.unwrap();
        assert!(config.server.is_none());
    }
}

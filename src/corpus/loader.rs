use std::fmt;
use std::path::Path;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::errors::SolverError;
use crate::models::CorpusEntry;
use super::schema::CORPUS_SCHEMA;
use super::types::Corpus;

const MAX_CORPUS_BYTES: u64 = 64 * 1_048_576;

/// Value side of a corpus document entry. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct EntryRecord {
    answer: bool,
    #[serde(default)]
    explanation: Option<String>,
}

/// Every `(key, record)` pair in document order, repeated keys included.
struct RawCorpus(Vec<(String, EntryRecord)>);

impl<'de> Deserialize<'de> for RawCorpus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawCorpus;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by question text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawCorpus, A::Error> {
                let mut pairs = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, record)) = map.next_entry::<String, EntryRecord>()? {
                    pairs.push((key, record));
                }
                Ok(RawCorpus(pairs))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

/// Load a corpus document from disk.
pub async fn load_corpus(path: &Path) -> Result<Corpus, SolverError> {
    if !path.exists() {
        return Err(SolverError::Corpus(format!("Corpus file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CORPUS_BYTES {
        return Err(SolverError::Corpus("Corpus file exceeds 64MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let corpus = parse_corpus(&content)?;

    for key in corpus.duplicates() {
        warn!(question = %key, "Repeated question in corpus, keeping the last answer");
    }
    info!(
        path = %path.display(),
        entries = corpus.len(),
        duplicates = corpus.duplicates().len(),
        "Loaded corpus"
    );

    Ok(corpus)
}

/// Parse a corpus document, validating its shape first.
pub fn parse_corpus(content: &str) -> Result<Corpus, SolverError> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| SolverError::Corpus(format!("Invalid JSON: {}", e)))?;

    validate_schema(&value)?;

    let raw: RawCorpus = serde_json::from_str(content)
        .map_err(|e| SolverError::Corpus(format!("Malformed entry: {}", e)))?;
    debug!(records = raw.0.len(), "Parsed corpus records");

    Ok(raw
        .0
        .into_iter()
        .map(|(key, record)| CorpusEntry::new(key, record.answer, record.explanation))
        .collect())
}

fn validate_schema(value: &serde_json::Value) -> Result<(), SolverError> {
    let compiled = jsonschema::JSONSchema::compile(&CORPUS_SCHEMA)
        .map_err(|e| SolverError::Internal(format!("Schema compilation error: {}", e)))?;

    let result = compiled.validate(value);
    if let Err(errors) = result {
        let messages: Vec<String> = errors
            .map(|e| format!("{} at {}", e, e.instance_path))
            .collect();
        if !messages.is_empty() {
            return Err(SolverError::Corpus(messages.join("; ")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_document_order() {
        let corpus = parse_corpus(
            r#"{
                "La Tierra es redonda": {"answer": true, "explanation": null},
                "El Sol gira alrededor de la Tierra": {"answer": false, "explanation": "Es al revés"},
                "El agua hierve a 100 grados": {"answer": true}
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = corpus.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "La Tierra es redonda",
                "El Sol gira alrededor de la Tierra",
                "El agua hierve a 100 grados",
            ]
        );
        assert_eq!(corpus.entries()[1].explanation.as_deref(), Some("Es al revés"));
        assert_eq!(corpus.entries()[2].explanation, None);
    }

    #[test]
    fn test_repeated_keys_are_reported() {
        let corpus = parse_corpus(
            r#"{"a": {"answer": true}, "b": {"answer": true}, "a": {"answer": false}}"#,
        )
        .unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.entries()[0].key, "a");
        assert!(!corpus.entries()[0].answer);
        assert_eq!(corpus.duplicates().len(), 1);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let corpus = parse_corpus(r#"{"q": {"answer": false, "text": "q", "id": 7}}"#).unwrap();
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_empty_document_is_empty_corpus() {
        assert!(parse_corpus("{}").unwrap().is_empty());
    }

    #[test]
    fn test_schema_rejects_non_boolean_answer() {
        let err = parse_corpus(r#"{"q": {"answer": "yes"}}"#).unwrap_err();
        assert!(matches!(err, SolverError::Corpus(_)));
    }

    #[test]
    fn test_schema_rejects_missing_answer() {
        assert!(parse_corpus(r#"{"q": {"explanation": "x"}}"#).is_err());
    }

    #[test]
    fn test_rejects_array_document() {
        assert!(parse_corpus(r#"[{"answer": true}]"#).is_err());
    }

    #[test]
    fn test_rejects_invalid_json() {
        assert!(matches!(parse_corpus("{not json"), Err(SolverError::Corpus(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_corpus(Path::new("/definitely/not/here.json")).await.unwrap_err();
        assert!(matches!(err, SolverError::Corpus(_)));
    }
}

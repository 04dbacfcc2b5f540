use serde_json::{json, Value};
use std::sync::LazyLock;

/// Shape of a corpus document: an object keyed by question text.
pub static CORPUS_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": { "$ref": "#/definitions/entry" },
        "definitions": {
            "entry": {
                "type": "object",
                "required": ["answer"],
                "properties": {
                    "answer": { "type": "boolean" },
                    "explanation": { "type": ["string", "null"] }
                }
            }
        }
    })
});

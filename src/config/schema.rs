use serde_json::{json, Value};
use std::sync::LazyLock;

pub static CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": {
            "corpus": {
                "type": "object",
                "properties": {
                    "path": { "type": "string" }
                }
            },
            "matching": {
                "type": "object",
                "properties": {
                    "threshold": { "type": "number", "minimum": 0, "maximum": 100 },
                    "limit": { "type": "integer", "minimum": 1 }
                }
            },
            "ocr": {
                "type": "object",
                "properties": {
                    "binary": { "type": "string" },
                    "language": { "type": "string" },
                    "timeout_secs": { "type": "integer", "minimum": 1 },
                    "concurrency": { "type": "integer", "minimum": 1 },
                    "collapse_whitespace": { "type": "boolean" }
                }
            },
            "server": {
                "type": "object",
                "properties": {
                    "host": { "type": "string" },
                    "port": { "type": "integer", "minimum": 1, "maximum": 65535 }
                }
            }
        },
        "additionalProperties": false
    })
});

use serde_json::{json, Value};

/// JSON Schema for a reseller dataset document
pub fn reseller_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "reseller-directory/resellers",
        "title": "Reseller Dataset",
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "company": {"type": "string"},
                "email": {"type": "string"},
                "international": {"type": "boolean"},
                "countries": {
                    "type": "array",
                    "items": {"type": "string"}
                },
                "resellerLevel": {"type": "string"},
                "url": {"type": "string"}
            },
            "required": ["company", "countries", "resellerLevel"]
        }
    })
}

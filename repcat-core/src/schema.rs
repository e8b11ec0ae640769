use serde_json::{json, Value};

/// JSON Schema for the reports document (an array of reports)
pub fn reports_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "repcat-reports",
        "title": "Report Catalog",
        "type": "array",
        "items": {
            "type": "object",
            "required": [
                "id",
                "name",
                "reportingDomain",
                "processOwner",
                "reportingFrequency",
                "shortDescription"
            ],
            "properties": {
                "id": {"type": "string", "minLength": 1},
                "name": {"type": "string", "minLength": 1},
                "reportingDomain": {"type": "string"},
                "processOwner": {"type": "string"},
                "team": {"type": "string"},
                "category": {"type": "string"},
                "reportingFrequency": {
                    "type": "string",
                    "enum": ["Daily", "Weekly", "Monthly", "Quarterly", "Annual"]
                },
                "shortDescription": {"type": "string"},
                "detailedDescription": {"type": "string"},
                "sourceTables": {"type": "array", "items": {"type": "string"}},
                "features": {"type": "array", "items": {"type": "string"}},
                "destinationLink": {"type": "string"},
                "accessNeeded": {"type": "string"},
                "accessInstructions": {"type": "string"},
                "contactEmail": {"type": "string"},
                "lastUpdated": {"type": "string", "pattern": "^[0-9]{4}-[0-9]{2}-[0-9]{2}$"},
                "businessDays": {
                    "type": "array",
                    "items": {"type": "integer", "minimum": 0, "maximum": 7}
                },
                "teamTags": {"type": "array", "items": {"type": "string"}}
            }
        }
    })
}

/// JSON Schema for the baseline configuration document
pub fn config_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "$id": "repcat-config",
        "title": "Report Catalog Configuration",
        "type": "object",
        "additionalProperties": {
            "type": "array",
            "items": {
                "anyOf": [
                    {"type": "string"},
                    {"type": "object", "required": ["name"], "properties": {"name": {"type": "string"}}}
                ]
            }
        }
    })
}

use crate::error::{CatalogError, CatalogResult};
use serde_json::Value;
use std::path::Path;

/// Validate data against JSON Schema
/// Returns Ok(()) if valid, Err with every violation (message and instance location) if invalid
pub fn validate_against_schema(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let compiled = jsonschema::validator_for(schema)
        .map_err(|e| vec![format!("Schema compilation error: {}", e)])?;

    let errors: Vec<String> = compiled
        .iter_errors(data)
        .map(|error| {
            let path_str = error.instance_path.to_string();
            let location = if path_str.is_empty() {
                "root".to_string()
            } else {
                path_str
            };
            format!("{} at {}", error, location)
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check a loaded document, attributing violations to the file it came from
pub fn check_document(schema: &Value, data: &Value, path: &Path) -> CatalogResult<()> {
    validate_against_schema(schema, data).map_err(|errors| CatalogError::Schema {
        path: path.to_path_buf(),
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_data_passes() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "businessDays": {"type": "array", "items": {"type": "integer"}}
            },
            "required": ["name"]
        });

        let data = json!({
            "name": "Weekly Operations Report",
            "businessDays": [1, 2, 3]
        });

        assert!(validate_against_schema(&schema, &data).is_ok());
    }

    #[test]
    fn test_missing_required_reports_location() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "array",
            "items": {
                "type": "object",
                "required": ["id"]
            }
        });

        let data = json!([{"id": "a"}, {"name": "no id"}]);

        let errors = validate_against_schema(&schema, &data).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].ends_with("at /1"));
    }

    #[test]
    fn test_wrong_type_fails() {
        let schema = json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {
                "teamTags": {"type": "array"}
            }
        });

        let data = json!({"teamTags": "Urgent"});

        assert!(validate_against_schema(&schema, &data).is_err());
    }

    #[test]
    fn test_check_document_names_the_file() {
        let schema = json!({"type": "array"});
        let err = check_document(&schema, &json!({}), Path::new("data/reports.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { ref path, .. } if path == Path::new("data/reports.json")));
    }
}

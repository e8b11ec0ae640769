use repcat_core::CatalogError;
use std::io::ErrorKind;

/// Map catalog loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &CatalogError) -> (String, String, String) {
    match error {
        CatalogError::Io { path, source } if source.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPass --reports/--config or set REPCAT_REPORTS/REPCAT_CONFIG.",
                path.display()
            ),
        ),
        CatalogError::Io { path, source } if source.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", path.display()),
        ),
        CatalogError::Parse { path, source } => (
            "Invalid JSON".to_string(),
            format!("'{}' is not valid catalog JSON.", path.display()),
            source.to_string(),
        ),
        CatalogError::Schema { path, errors } => (
            "Schema Error".to_string(),
            format!("'{}' does not match the catalog schema.", path.display()),
            errors.join("\n"),
        ),
        CatalogError::Validation { errors } => (
            "Validation Error".to_string(),
            "The catalog data has validation errors.".to_string(),
            errors
                .iter()
                .enumerate()
                .map(|(i, e)| format!("{}. {}", i + 1, e))
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        CatalogError::Registry { .. } => (
            "Configuration Error".to_string(),
            "The filter configuration is invalid.".to_string(),
            error.to_string(),
        ),
        other => (
            "Error Loading Catalog".to_string(),
            "Failed to load the report catalog.".to_string(),
            other.to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_file() {
        let error = CatalogError::io("data/reports.json", io::Error::from(ErrorKind::NotFound));
        let (title, _, details) = map_load_error(&error);
        assert_eq!(title, "File Not Found");
        assert!(details.contains("data/reports.json"));
    }

    #[test]
    fn test_validation_errors_are_numbered() {
        let error = CatalogError::Validation {
            errors: vec!["first".to_string(), "second".to_string()],
        };
        let (title, _, details) = map_load_error(&error);
        assert_eq!(title, "Validation Error");
        assert_eq!(details, "1. first\n2. second");
    }

    #[test]
    fn test_other_io_errors_fall_through() {
        let error = CatalogError::io("x.json", io::Error::new(ErrorKind::Other, "disk on fire"));
        let (title, _, details) = map_load_error(&error);
        assert_eq!(title, "Error Loading Catalog");
        assert!(details.contains("disk on fire"));
    }
}

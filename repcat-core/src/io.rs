use crate::error::{CatalogError, CatalogResult};
use crate::models::{BaselineConfig, CatalogData, Report};
use crate::schema::{config_schema, reports_schema};
use crate::schema_validation::check_document;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read a JSON document without interpreting it
pub fn load_json<P: AsRef<Path>>(path: P) -> CatalogResult<Value> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::parse(path, e))
}

fn decode<T: DeserializeOwned>(value: Value, path: &Path) -> CatalogResult<T> {
    serde_json::from_value(value).map_err(|e| CatalogError::parse(path, e))
}

/// Load the report collection from a JSON array file
pub fn load_reports<P: AsRef<Path>>(path: P) -> CatalogResult<Vec<Report>> {
    let path = path.as_ref();
    decode(load_json(path)?, path)
}

/// Load the baseline configuration from a JSON object file
pub fn load_config<P: AsRef<Path>>(path: P) -> CatalogResult<BaselineConfig> {
    let path = path.as_ref();
    decode(load_json(path)?, path)
}

/// Load reports and configuration, optionally checking both against the bundled schemas
pub fn load_catalog<P: AsRef<Path>, Q: AsRef<Path>>(
    reports_path: P,
    config_path: Q,
    check_schema: bool,
) -> CatalogResult<CatalogData> {
    let reports_path = reports_path.as_ref();
    let config_path = config_path.as_ref();

    let reports_doc = load_json(reports_path)?;
    let config_doc = load_json(config_path)?;

    if check_schema {
        check_document(&reports_schema(), &reports_doc, reports_path)?;
        check_document(&config_schema(), &config_doc, config_path)?;
    }

    let data = CatalogData {
        reports: decode(reports_doc, reports_path)?,
        config: decode(config_doc, config_path)?,
    };
    log::debug!(
        "loaded {} reports from {}",
        data.reports.len(),
        reports_path.display()
    );

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    const REPORTS: &str = r#"[
        {"id": "r1", "name": "Daily Financial Report", "reportingDomain": "Finance",
         "processOwner": "John Doe", "reportingFrequency": "Daily",
         "shortDescription": "Daily metrics", "teamTags": ["Urgent"]}
    ]"#;

    const CONFIG: &str = r#"{"reportingDomains": ["Finance", "Risk"]}"#;

    #[test]
    fn test_load_catalog() {
        let reports = write_temp(REPORTS);
        let config = write_temp(CONFIG);

        let data = load_catalog(reports.path(), config.path(), true).unwrap();
        assert_eq!(data.reports.len(), 1);
        assert_eq!(data.config.entries("reportingDomains").len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_reports("/definitely/not/here/reports.json");
        assert!(matches!(result, Err(CatalogError::Io { .. })));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let file = write_temp("[{");
        assert!(matches!(load_reports(file.path()), Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn test_schema_check_runs_only_when_asked() {
        let reports = write_temp(
            r#"[{"id": "r1", "name": "N", "reportingDomain": "D", "processOwner": "P",
                 "reportingFrequency": "Hourly", "shortDescription": ""}]"#,
        );
        let config = write_temp("{}");

        assert!(matches!(
            load_catalog(reports.path(), config.path(), true),
            Err(CatalogError::Schema { .. })
        ));
        assert!(load_catalog(reports.path(), config.path(), false).is_ok());
    }
}

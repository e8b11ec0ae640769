use crate::models::{BaselineConfig, CatalogData, Frequency, ProcessOwner, Report};
use crate::registry::FilterRegistry;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Validate loaded catalog data
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_catalog(
    data: &CatalogData,
    registry: &FilterRegistry<Report>,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    validate_reports(&data.reports, &mut errors);
    validate_baseline(&data.config, registry, &mut errors);
    validate_owners(&data.config.process_owners(), &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

pub fn validate_reports(reports: &[Report], errors: &mut Vec<String>) {
    let mut ids = HashSet::new();

    for (idx, report) in reports.iter().enumerate() {
        let report_ref = format!("Report #{} ('{}')", idx + 1, report.id);

        if report.id.trim().is_empty() {
            errors.push(format!("{}: id cannot be empty", report_ref));
        } else if !ids.insert(&report.id) {
            errors.push(format!("{}: duplicate report id", report_ref));
        }

        if report.name.trim().is_empty() {
            errors.push(format!("{}: name cannot be empty", report_ref));
        }

        if report.frequency().is_none() {
            errors.push(format!(
                "{}: unknown reporting frequency '{}' (expected one of {})",
                report_ref,
                report.reporting_frequency,
                Frequency::ALL
                    .iter()
                    .map(|f| f.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            ));
        }

        if !report.last_updated.is_empty()
            && NaiveDate::parse_from_str(&report.last_updated, "%Y-%m-%d").is_err()
        {
            errors.push(format!(
                "{}: lastUpdated '{}' is not a YYYY-MM-DD date",
                report_ref, report.last_updated
            ));
        }

        if let Some(tags) = &report.team_tags {
            if tags.iter().any(|t| t.trim().is_empty()) {
                errors.push(format!("{}: teamTags contains empty value", report_ref));
            }
        }
    }
}

pub fn validate_baseline(
    config: &BaselineConfig,
    registry: &FilterRegistry<Report>,
    errors: &mut Vec<String>,
) {
    for filter in registry.iter() {
        let Some(source) = config.sources.get(&filter.source_key) else {
            continue;
        };

        let Some(values) = source.as_array() else {
            errors.push(format!(
                "Config '{}' must be a list of strings or named records",
                filter.source_key
            ));
            continue;
        };

        // Check for duplicate values within a source
        let mut seen = HashSet::new();
        for value in values {
            let name = value
                .as_str()
                .or_else(|| value.get("name").and_then(|n| n.as_str()));

            match name {
                Some(name) if name.trim().is_empty() => {
                    errors.push(format!("Config '{}' contains empty value", filter.source_key));
                }
                Some(name) => {
                    if !seen.insert(name) {
                        errors.push(format!(
                            "Config '{}' has duplicate value: '{}'",
                            filter.source_key, name
                        ));
                    }
                }
                None => errors.push(format!(
                    "Config '{}' contains an entry without a name",
                    filter.source_key
                )),
            }
        }
    }
}

pub fn validate_owners(owners: &[ProcessOwner], errors: &mut Vec<String>) {
    let mut eids = HashSet::new();

    for owner in owners {
        if owner.name.trim().is_empty() {
            errors.push(format!("Contact '{}': name cannot be empty", owner.eid));
        }
        if !eids.insert(&owner.eid) {
            errors.push(format!("Contact '{}': duplicate eid", owner.eid));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(reports: serde_json::Value, config: serde_json::Value) -> CatalogData {
        CatalogData {
            reports: serde_json::from_value(reports).unwrap(),
            config: serde_json::from_value(config).unwrap(),
        }
    }

    #[test]
    fn test_valid_catalog_passes() {
        let data = catalog(
            json!([{"id": "r1", "name": "Daily", "reportingDomain": "Finance", "processOwner": "P",
                    "reportingFrequency": "Daily", "shortDescription": "", "lastUpdated": "2024-01-15"}]),
            json!({"reportingDomains": ["Finance"], "processOwners": [{"eid": "E1", "name": "P"}]}),
        );

        assert!(validate_catalog(&data, &FilterRegistry::default_reports()).is_ok());
    }

    #[test]
    fn test_report_errors_are_collected() {
        let data = catalog(
            json!([
                {"id": "r1", "name": "", "reportingDomain": "Finance", "processOwner": "P",
                 "reportingFrequency": "Hourly", "shortDescription": "", "lastUpdated": "15/01/2024"},
                {"id": "r1", "name": "Dup", "reportingDomain": "Finance", "processOwner": "P",
                 "reportingFrequency": "daily", "shortDescription": "", "teamTags": [" "]}
            ]),
            json!({}),
        );

        let errors = validate_catalog(&data, &FilterRegistry::default_reports()).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert!(errors.iter().any(|e| e.contains("duplicate report id")));
        assert!(errors.iter().any(|e| e.contains("'Hourly'")));
    }

    #[test]
    fn test_baseline_errors() {
        let data = catalog(
            json!([]),
            json!({
                "teams": "Ops",
                "reportingDomains": ["Finance", "Finance", ""],
                "processOwners": [{"eid": "E1", "name": "A"}, {"eid": "E1", "title": "no name"}]
            }),
        );

        let errors = validate_catalog(&data, &FilterRegistry::default_reports()).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("'teams' must be a list")));
        assert!(errors.iter().any(|e| e.contains("duplicate value: 'Finance'")));
        assert!(errors.iter().any(|e| e.contains("'reportingDomains' contains empty value")));
        assert!(errors.iter().any(|e| e.contains("entry without a name")));
    }
}

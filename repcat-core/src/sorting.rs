use crate::models::Searchable;
use crate::registry::FilterDefinition;
use regex::Regex;
use std::cmp::Ordering;
use std::sync::OnceLock;
use unicode_normalization::UnicodeNormalization;

/// How to order filtered records
pub enum SortKey<'a, R> {
    Name,
    Field(&'a FilterDefinition<R>),
}

impl<R> Clone for SortKey<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for SortKey<'_, R> {}

/// Sort records by name or by a filter's field value
/// Stable: records that compare equal keep their filtered order
pub fn sort_records<R: Searchable>(records: &mut [&R], key: SortKey<'_, R>) {
    records.sort_by(|a, b| match key {
        SortKey::Name => {
            // Library science sorting: strip articles, normalize unicode, handle numbers
            let a_key = normalize_for_sorting(a.name());
            let b_key = normalize_for_sorting(b.name());

            // Secondary sort: original name for ties
            a_key.cmp(&b_key).then_with(|| a.name().cmp(b.name()))
        }
        SortKey::Field(filter) => {
            let a_val = field_sort_value(*a, filter);
            let b_val = field_sort_value(*b, filter);

            // Primary sort by normalized field, secondary by name
            match normalize_for_sorting(&a_val).cmp(&normalize_for_sorting(&b_val)) {
                Ordering::Equal => {
                    normalize_for_sorting(a.name()).cmp(&normalize_for_sorting(b.name()))
                }
                other => other,
            }
        }
    });
}

fn field_sort_value<R>(record: &R, filter: &FilterDefinition<R>) -> String {
    filter
        .field
        .read(record)
        .map(|v| v.values().join(", "))
        .unwrap_or_default()
}

/// Normalize string for library science sorting
/// - Strip leading articles (a, an, the)
/// - Normalize unicode (NFD then lowercase)
/// - Collapse whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let without_articles = strip_leading_articles(s);

    let normalized: String = without_articles.nfd().collect::<String>().to_lowercase();

    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip leading articles following library science conventions
/// Supports: a, an, the (English) and common articles in other languages
pub fn strip_leading_articles(s: &str) -> String {
    static ARTICLES: OnceLock<Regex> = OnceLock::new();
    let re = ARTICLES.get_or_init(|| {
        Regex::new(r"^(?i)(the|a|an|der|die|das|le|la|les|el|los|las|il|lo|i|gli|un|une|een)\s+")
            .expect("article pattern is valid")
    });
    re.replace(s, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Report;
    use crate::registry::{FilterId, FilterRegistry};
    use serde_json::json;

    fn reports() -> Vec<Report> {
        serde_json::from_value(json!([
            {"id": "1", "name": "The Weekly Digest", "reportingDomain": "Risk", "processOwner": "P",
             "reportingFrequency": "Weekly", "shortDescription": ""},
            {"id": "2", "name": "Annual Summary", "reportingDomain": "Finance", "processOwner": "P",
             "reportingFrequency": "Annual", "shortDescription": ""},
            {"id": "3", "name": "a  Monthly   Close", "reportingDomain": "Finance", "processOwner": "P",
             "reportingFrequency": "Monthly", "shortDescription": ""}
        ]))
        .unwrap()
    }

    #[test]
    fn test_strip_leading_articles() {
        assert_eq!(strip_leading_articles("The Weekly Digest"), "Weekly Digest");
        assert_eq!(strip_leading_articles("an Overview"), "Overview");
        assert_eq!(strip_leading_articles("Theory"), "Theory");
    }

    #[test]
    fn test_normalize_for_sorting() {
        assert_eq!(normalize_for_sorting("a  Monthly   Close"), "monthly close");
        assert_eq!(normalize_for_sorting("Ébauche"), normalize_for_sorting("E\u{301}bauche"));
    }

    #[test]
    fn test_sort_by_name() {
        let reports = reports();
        let mut refs: Vec<&Report> = reports.iter().collect();
        sort_records(&mut refs, SortKey::Name);

        let ids: Vec<&str> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_by_field_then_name() {
        let reports = reports();
        let registry = FilterRegistry::default_reports();
        let domain = registry.get(FilterId::ReportingDomains).unwrap();
        let mut refs: Vec<&Report> = reports.iter().collect();
        sort_records(&mut refs, SortKey::Field(domain));

        let ids: Vec<&str> = refs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
    }
}

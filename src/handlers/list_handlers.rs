use anyhow::Result;
use colored::Colorize;
use repcat_core::{
    get_sorted_group_names, group_records_by_filter, sort_records, FilterRegistry, FilterState,
    Report,
};

use crate::operations::{parse_filter_field, parse_sort_key};
use crate::state::{BrowserState, UiState};
use crate::ui::format_report_card;

const EMPTY_RESULTS: &str = "No reports found matching your criteria.";

/// Describe the active search and selections, one line each
fn active_filter_lines(registry: &FilterRegistry<Report>, filters: &FilterState) -> Vec<String> {
    let mut lines = Vec::new();

    if !filters.search_query().is_empty() {
        lines.push(format!("- {} \"{}\"", "Search:".bold(), filters.search_query()));
    }

    for filter in registry.iter() {
        let selected = filters.selected(filter.id);
        if selected.is_empty() {
            continue;
        }
        let values: Vec<&str> = selected.iter().map(String::as_str).collect();
        lines.push(format!(
            "- {} {}",
            format!("{}:", filter.label).bold(),
            values.join(" OR ")
        ));
    }

    lines
}

/// Render the report results for the current filter state
pub fn render_list(state: &BrowserState, ui: &UiState) -> Result<String> {
    let registry = state.registry();
    let view = state.view();
    let mut out = Vec::new();

    out.push(format!("# {}", state.get_title()).bold().to_string());
    out.push(String::new());

    let active = active_filter_lines(registry, &state.filters);
    if !active.is_empty() {
        out.push("## Active Filters".bold().to_string());
        out.extend(active);
        out.push(String::new());
    }

    out.push(view.summary("reports"));
    out.push(String::new());

    if view.is_empty() {
        out.push(EMPTY_RESULTS.italic().to_string());
        return Ok(out.join("\n"));
    }

    let mut records = view.filtered_records;
    if let Some(sort_by) = &ui.sort_by {
        let key = parse_sort_key(registry, sort_by)?;
        sort_records(&mut records, key);
    }

    match &ui.group_by {
        Some(group_by) => {
            let filter = parse_filter_field(registry, "group-by", group_by)?;
            let groups = group_records_by_filter(&records, filter);

            for name in get_sorted_group_names(&groups) {
                let Some(members) = groups.get(&name) else {
                    continue;
                };
                out.push(format!("## {}: {}", filter.label, name).bold().to_string());
                out.push(String::new());
                out.extend(members.iter().map(|r| format_report_card(r, ui.view_mode)));
            }
        }
        None => out.extend(records.iter().map(|r| format_report_card(r, ui.view_mode))),
    }

    Ok(out.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ViewMode;
    use repcat_core::{BaselineConfig, CatalogData, FilterId};
    use serde_json::json;
    use std::path::PathBuf;

    fn state() -> BrowserState {
        colored::control::set_override(false);
        let data = CatalogData {
            reports: serde_json::from_value(json!([
                {"id": "r1", "name": "Weekly Operations Report", "reportingDomain": "Operations",
                 "processOwner": "Jane Smith", "reportingFrequency": "Weekly",
                 "shortDescription": "Weekly KPIs"},
                {"id": "r2", "name": "Daily Financial Report", "reportingDomain": "Finance",
                 "processOwner": "John Doe", "reportingFrequency": "Daily",
                 "shortDescription": "Daily metrics", "teamTags": ["Urgent", "Q1 Goal"]}
            ]))
            .unwrap(),
            config: BaselineConfig::new(),
        };
        BrowserState::new(data, PathBuf::from("reports.json"), PathBuf::from("config.json"))
    }

    fn list_ui() -> UiState {
        UiState {
            view_mode: ViewMode::List,
            ..UiState::default()
        }
    }

    #[test]
    fn test_summary_and_active_filters() {
        let mut state = state();
        state.toggle(FilterId::ReportingDomains, "Finance");
        state.search("daily");

        let text = render_list(&state, &list_ui()).unwrap();
        assert!(text.contains("- Search: \"daily\""));
        assert!(text.contains("- Reporting Domain: Finance"));
        assert!(text.contains("Showing 1 of 2 reports"));
        assert!(text.contains("Daily Financial Report"));
        assert!(!text.contains("Weekly Operations Report"));
    }

    #[test]
    fn test_empty_results_message() {
        let mut state = state();
        state.search("quarterly");

        let text = render_list(&state, &list_ui()).unwrap();
        assert!(text.contains("Showing 0 of 2 reports"));
        assert!(text.contains(EMPTY_RESULTS));
    }

    #[test]
    fn test_sorted_by_name() {
        let ui = UiState {
            sort_by: Some("name".to_string()),
            ..list_ui()
        };
        let text = render_list(&state(), &ui).unwrap();

        let daily = text.find("Daily Financial Report").unwrap();
        let weekly = text.find("Weekly Operations Report").unwrap();
        assert!(daily < weekly);
    }

    #[test]
    fn test_grouped_by_tags() {
        let ui = UiState {
            group_by: Some("teamTags".to_string()),
            ..list_ui()
        };
        let text = render_list(&state(), &ui).unwrap();

        assert!(text.contains("## Team Tags: Q1 Goal"));
        assert!(text.contains("## Team Tags: Urgent"));
        assert!(text.contains("## Team Tags: _unspecified_"));
        assert_eq!(text.matches("Daily Financial Report").count(), 2);
    }

    #[test]
    fn test_unknown_sort_field_is_an_error() {
        let ui = UiState {
            sort_by: Some("colour".to_string()),
            ..list_ui()
        };
        assert!(render_list(&state(), &ui).is_err());
    }
}

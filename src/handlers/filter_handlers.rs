use colored::Colorize;

use crate::state::BrowserState;
use crate::ui::format_sidebar_filter;

/// Render the filter sidebar: every filter in registry order
pub fn render_filters(state: &BrowserState) -> String {
    let view = state.view();
    let mut sections = vec![format!("# Filters ({})", view.summary("reports"))
        .bold()
        .to_string()];

    for filter in state.registry().iter() {
        let options = view
            .available_options
            .get(&filter.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let enabled = view.enabled.get(&filter.id).copied().unwrap_or(true);
        let helper = view.helper_text.get(&filter.id).map(String::as_str);

        sections.push(format_sidebar_filter(
            filter,
            options,
            &state.filters,
            enabled,
            helper,
        ));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use repcat_core::{BaselineConfig, CatalogData, FilterId};
    use serde_json::json;
    use std::path::PathBuf;

    fn state() -> BrowserState {
        colored::control::set_override(false);
        let data = CatalogData {
            reports: serde_json::from_value(json!([
                {"id": "r1", "name": "A", "reportingDomain": "Finance", "processOwner": "John Doe",
                 "reportingFrequency": "Daily", "shortDescription": "", "teamTags": ["Urgent"]},
                {"id": "r2", "name": "B", "reportingDomain": "Operations", "processOwner": "Jane Smith",
                 "reportingFrequency": "Weekly", "shortDescription": "", "teamTags": ["Q1 Goal"]}
            ]))
            .unwrap(),
            config: BaselineConfig::new().with_values("teams", ["FDM Analytics"]),
        };
        BrowserState::new(data, PathBuf::from("reports.json"), PathBuf::from("config.json"))
    }

    #[test]
    fn test_disabled_filter_shows_helper() {
        let text = render_filters(&state());
        assert!(text.starts_with("# Filters (Showing 2 of 2 reports)"));
        assert!(text.contains("Team Tags\n  [ ] Q1 Goal\n  [ ] Urgent\n  * Select a Reporting Domain to enable"));
        assert!(text.contains("Team\n  [ ] FDM Analytics"));
    }

    #[test]
    fn test_parent_selection_scopes_child_options() {
        let mut state = state();
        state.toggle(FilterId::ReportingDomains, "Finance");

        let text = render_filters(&state);
        assert!(text.contains("Reporting Domain\n  [x] Finance\n  [ ] Operations"));
        assert!(text.contains("Team Tags\n  [ ] Urgent\n\n"));
    }
}

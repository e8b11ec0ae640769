use repcat_core::*;
use std::path::PathBuf;

/// Application state management - Domain state only
/// Holds the loaded catalog, the engine built over it, and the single
/// filter state, which is only ever replaced as a whole
#[derive(Debug)]
pub struct BrowserState {
    /// Registry and baseline configuration
    pub engine: CatalogEngine<Report>,
    /// Loaded reports and configuration
    pub data: CatalogData,
    /// Active filters and search query
    pub filters: FilterState,
    /// Path the reports were loaded from
    pub reports_file: PathBuf,
    /// Path the baseline configuration was loaded from
    pub config_file: PathBuf,
}

impl BrowserState {
    pub fn new(data: CatalogData, reports_file: PathBuf, config_file: PathBuf) -> Self {
        let engine = CatalogEngine::new(FilterRegistry::default_reports(), data.config.clone());
        let filters = engine.empty_state();

        Self {
            engine,
            data,
            filters,
            reports_file,
            config_file,
        }
    }

    /// Get a reference to reports
    pub fn reports(&self) -> &[Report] {
        &self.data.reports
    }

    /// Contact directory from the configuration
    pub fn owners(&self) -> Vec<ProcessOwner> {
        self.data.config.process_owners()
    }

    pub fn registry(&self) -> &FilterRegistry<Report> {
        self.engine.registry()
    }

    /// Replace the filter state wholesale
    pub fn set_filters(&mut self, next: FilterState) {
        log::debug!("filter state replaced: {:?}", next);
        self.filters = next;
    }

    /// Toggle one filter value
    pub fn toggle(&mut self, id: FilterId, value: &str) {
        let next = self.filters.toggle_value(id, value);
        self.set_filters(next);
    }

    /// Set the free-text search query
    pub fn search(&mut self, text: &str) {
        let next = self.filters.set_search_query(text);
        self.set_filters(next);
    }

    /// Clear every filter selection but keep the search text
    pub fn reset_selections(&mut self) {
        let next = self.filters.reset_selections();
        self.set_filters(next);
    }

    /// Select every value given as "id=value"; returns warnings for ignored arguments
    pub fn apply_filter_args(&mut self, args: &[String]) -> Vec<String> {
        let (selections, warnings) = parse_filter_args(args);

        for (id, values) in selections {
            for value in values {
                if !self.filters.is_selected(id, &value) {
                    self.toggle(id, &value);
                }
            }
        }

        warnings
    }

    /// Options, enablement, helper text and filtered reports for the current state
    pub fn view(&self) -> CatalogView<'_, Report> {
        self.engine.view(&self.data.reports, &self.filters)
    }

    /// Title line naming the loaded file
    pub fn get_title(&self) -> String {
        let file_name = self
            .reports_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("reports");

        format!("Report Catalog - {}", file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state() -> BrowserState {
        let data = CatalogData {
            reports: serde_json::from_value(json!([
                {"id": "r1", "name": "Daily Financial Report", "reportingDomain": "Finance",
                 "processOwner": "John Doe", "reportingFrequency": "Daily",
                 "shortDescription": "Daily metrics", "teamTags": ["Urgent"]},
                {"id": "r2", "name": "Weekly Operations Report", "reportingDomain": "Operations",
                 "processOwner": "Jane Smith", "reportingFrequency": "Weekly",
                 "shortDescription": "Weekly KPIs"}
            ]))
            .unwrap(),
            config: BaselineConfig::new().with_values("reportingDomains", ["Finance", "Risk"]),
        };
        BrowserState::new(data, PathBuf::from("data/reports.json"), PathBuf::from("data/config.json"))
    }

    #[test]
    fn test_apply_filter_args_selects_values() {
        let mut state = state();
        let warnings = state.apply_filter_args(&[
            "reportingDomains=Finance".to_string(),
            "reportingDomains=Finance".to_string(),
            "bogus".to_string(),
        ]);

        assert_eq!(warnings.len(), 1);
        assert!(state.filters.is_selected(FilterId::ReportingDomains, "Finance"));
        assert_eq!(state.view().filtered_records.len(), 1);
    }

    #[test]
    fn test_reset_clears_search_and_selections() {
        let mut state = state();
        state.toggle(FilterId::ReportingFrequencies, "Weekly");
        state.search("weekly");
        assert_eq!(state.view().filtered_records.len(), 1);

        state.set_filters(FilterState::reset(state.registry()));
        assert!(state.filters.is_empty());
        assert_eq!(state.view().filtered_records.len(), 2);
    }

    #[test]
    fn test_reset_selections_keeps_search() {
        let mut state = state();
        state.toggle(FilterId::ReportingDomains, "Operations");
        state.search("report");
        assert_eq!(state.view().filtered_records.len(), 1);

        state.reset_selections();
        assert_eq!(state.filters.search_query(), "report");
        assert!(state.filters.selected(FilterId::ReportingDomains).is_empty());
        assert_eq!(state.view().filtered_records.len(), 2);
    }

    #[test]
    fn test_title_names_reports_file() {
        assert_eq!(state().get_title(), "Report Catalog - reports.json");
    }
}

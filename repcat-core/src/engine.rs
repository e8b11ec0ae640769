//! The catalog engine: registry and baseline bundled with the derived views
//!
//! Everything here is recomputed from scratch on each call; the engine holds
//! no state of its own beyond its configuration.

use crate::dependency::{helper_text, is_enabled};
use crate::error::{CatalogError, CatalogResult};
use crate::filtering::apply_filters;
use crate::models::{BaselineConfig, Searchable};
use crate::options::available_options;
use crate::registry::{FilterId, FilterRegistry, RegistryIssue};
use crate::state::FilterState;
use std::collections::BTreeMap;

/// What the presentation layer renders for one state
#[derive(Debug, Clone)]
pub struct CatalogView<'a, R> {
    pub available_options: BTreeMap<FilterId, Vec<String>>,
    pub enabled: BTreeMap<FilterId, bool>,
    /// Present only for filters that are currently disabled
    pub helper_text: BTreeMap<FilterId, String>,
    pub filtered_records: Vec<&'a R>,
    pub total_records: usize,
}

impl<R> CatalogView<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.filtered_records.is_empty()
    }

    /// "Showing N of M reports"
    pub fn summary(&self, noun: &str) -> String {
        format!(
            "Showing {} of {} {}",
            self.filtered_records.len(),
            self.total_records,
            noun
        )
    }
}

#[derive(Debug, Clone)]
pub struct CatalogEngine<R> {
    registry: FilterRegistry<R>,
    baseline: BaselineConfig,
    issues: Vec<RegistryIssue>,
}

impl<R: Searchable> CatalogEngine<R> {
    /// Build an engine, logging registry defects instead of failing
    ///
    /// Filters whose parent is unknown behave as independent filters.
    pub fn new(registry: FilterRegistry<R>, baseline: BaselineConfig) -> Self {
        let issues = registry.validate().err().unwrap_or_default();
        for issue in &issues {
            log::warn!("filter registry: {}", issue);
        }

        Self {
            registry,
            baseline,
            issues,
        }
    }

    /// Build an engine, rejecting a registry with any defect
    pub fn try_new(registry: FilterRegistry<R>, baseline: BaselineConfig) -> CatalogResult<Self> {
        registry
            .validate()
            .map_err(|issues| CatalogError::Registry { issues })?;

        Ok(Self {
            registry,
            baseline,
            issues: Vec::new(),
        })
    }

    pub fn registry(&self) -> &FilterRegistry<R> {
        &self.registry
    }

    pub fn baseline(&self) -> &BaselineConfig {
        &self.baseline
    }

    /// Defects found when the engine was built
    pub fn issues(&self) -> &[RegistryIssue] {
        &self.issues
    }

    pub fn empty_state(&self) -> FilterState {
        FilterState::empty(&self.registry)
    }

    pub fn replace_state(&self, new_state: FilterState) -> CatalogResult<FilterState> {
        FilterState::replace_all(&self.registry, new_state)
    }

    pub fn is_enabled(&self, id: FilterId, state: &FilterState) -> bool {
        is_enabled(&self.registry, id, state)
    }

    pub fn filtered<'a>(&self, records: &'a [R], state: &FilterState) -> Vec<&'a R> {
        apply_filters(records, &self.registry, state)
    }

    pub fn available_options(
        &self,
        records: &[R],
        state: &FilterState,
    ) -> BTreeMap<FilterId, Vec<String>> {
        available_options(&self.registry, &self.baseline, state, records)
    }

    /// Everything derived from `records` and `state`
    pub fn view<'a>(&self, records: &'a [R], state: &FilterState) -> CatalogView<'a, R> {
        let mut enabled = BTreeMap::new();
        let mut helper = BTreeMap::new();

        for filter in self.registry.iter() {
            enabled.insert(filter.id, is_enabled(&self.registry, filter.id, state));
            if let Some(text) = helper_text(&self.registry, filter.id, state) {
                helper.insert(filter.id, text.to_string());
            }
        }

        CatalogView {
            available_options: self.available_options(records, state),
            enabled,
            helper_text: helper,
            filtered_records: self.filtered(records, state),
            total_records: records.len(),
        }
    }
}

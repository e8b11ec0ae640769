//! Filter selections plus the free-text search query
//!
//! A `FilterState` is never edited in place by the engine: every transition
//! takes `&self` and returns a new, complete state.

use crate::error::{CatalogError, CatalogResult};
use crate::registry::{FilterId, FilterRegistry};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    selections: BTreeMap<FilterId, BTreeSet<String>>,
    search_query: String,
}

impl FilterState {
    /// Every registered filter mapped to an empty selection, empty search
    pub fn empty<R>(registry: &FilterRegistry<R>) -> Self {
        Self {
            selections: registry.ids().map(|id| (id, BTreeSet::new())).collect(),
            search_query: String::new(),
        }
    }

    /// Build a state from explicit selections, checking key completeness
    pub fn from_selections<R>(
        registry: &FilterRegistry<R>,
        selections: BTreeMap<FilterId, BTreeSet<String>>,
        search_query: &str,
    ) -> CatalogResult<Self> {
        let state = Self {
            selections,
            search_query: search_query.to_string(),
        };
        state.check_keys(registry)?;
        Ok(state)
    }

    /// Keys must be exactly the registry's filter ids
    pub fn check_keys<R>(&self, registry: &FilterRegistry<R>) -> CatalogResult<()> {
        if let Some(missing) = registry.ids().find(|id| !self.selections.contains_key(id)) {
            return Err(CatalogError::IncompleteState(missing));
        }
        if let Some(unknown) = self.selections.keys().find(|id| !registry.contains(**id)) {
            return Err(CatalogError::UnknownStateKey(*unknown));
        }
        Ok(())
    }

    /// Current selection for a filter; unknown ids read as empty
    pub fn selected(&self, id: FilterId) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.selections.get(&id).unwrap_or(&EMPTY)
    }

    pub fn is_selected(&self, id: FilterId, value: &str) -> bool {
        self.selected(id).contains(value)
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selections(&self) -> impl Iterator<Item = (FilterId, &BTreeSet<String>)> {
        self.selections.iter().map(|(id, values)| (*id, values))
    }

    /// True when no filter has a selection and the search query is empty
    pub fn is_empty(&self) -> bool {
        self.search_query.is_empty() && self.selections.values().all(BTreeSet::is_empty)
    }

    /// Add `value` to the filter's selection, or remove it if already present
    /// Ids outside the state's filters leave it unchanged
    pub fn toggle_value(&self, id: FilterId, value: &str) -> Self {
        let mut next = self.clone();
        if let Some(selection) = next.selections.get_mut(&id) {
            if !selection.remove(value) {
                selection.insert(value.to_string());
            }
        }
        next
    }

    pub fn set_search_query(&self, text: &str) -> Self {
        Self {
            selections: self.selections.clone(),
            search_query: text.to_string(),
        }
    }

    /// Clear every selection and the search query
    pub fn reset<R>(registry: &FilterRegistry<R>) -> Self {
        Self::empty(registry)
    }

    /// Clear every selection but keep the search query (the sidebar's reset button)
    pub fn reset_selections(&self) -> Self {
        Self {
            selections: self
                .selections
                .keys()
                .map(|id| (*id, BTreeSet::new()))
                .collect(),
            search_query: self.search_query.clone(),
        }
    }

    /// Bulk replacement; the new state must still cover exactly the registry's filters
    pub fn replace_all<R>(registry: &FilterRegistry<R>, new_state: FilterState) -> CatalogResult<Self> {
        new_state.check_keys(registry)?;
        Ok(new_state)
    }
}

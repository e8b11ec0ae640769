use crate::models::Searchable;
use crate::registry::{FilterDefinition, FilterId, FilterRegistry};
use crate::state::FilterState;
use std::collections::{BTreeMap, BTreeSet};

/// Parse filter strings in the format "id=value" into a selection map
/// Multiple values for the same id are collected into one set
/// Returns the parsed map and a warning for every string that was ignored
pub fn parse_filter_args(
    filter_strings: &[String],
) -> (BTreeMap<FilterId, BTreeSet<String>>, Vec<String>) {
    let mut selections: BTreeMap<FilterId, BTreeSet<String>> = BTreeMap::new();
    let mut warnings = Vec::new();

    for filter_str in filter_strings {
        let Some((key, value)) = filter_str.split_once('=') else {
            warnings.push(format!(
                "Invalid filter format '{}'. Expected 'id=value'",
                filter_str
            ));
            continue;
        };

        match key.parse::<FilterId>() {
            Ok(id) => {
                selections
                    .entry(id)
                    .or_default()
                    .insert(value.trim().to_string());
            }
            Err(e) => warnings.push(e),
        }
    }

    (selections, warnings)
}

/// Apply the search query and every active filter, preserving record order
pub fn apply_filters<'a, R: Searchable>(
    records: &'a [R],
    registry: &FilterRegistry<R>,
    state: &FilterState,
) -> Vec<&'a R> {
    let records: Vec<&R> = records
        .iter()
        .filter(|record| matches_filters(*record, registry, state))
        .collect();
    log::debug!("{} records match the current filters", records.len());
    records
}

/// Check if a record matches the given state
/// AND logic between the search query and every filter, OR within one filter's values
pub fn matches_filters<R: Searchable>(
    record: &R,
    registry: &FilterRegistry<R>,
    state: &FilterState,
) -> bool {
    if !matches_search(record, state.search_query()) {
        return false;
    }

    registry
        .iter()
        .all(|filter| matches_filter(record, filter, state.selected(filter.id)))
}

/// Check a single filter; an empty selection imposes no constraint
/// A record lacking the field fails any non-empty selection
pub fn matches_filter<R>(
    record: &R,
    filter: &FilterDefinition<R>,
    selected: &BTreeSet<String>,
) -> bool {
    if selected.is_empty() {
        return true;
    }

    filter
        .field
        .read(record)
        .is_some_and(|value| value.matches(selected))
}

/// Case-insensitive substring match on name or short description
/// No trimming or tokenizing: "dailyreport" does not match "Daily Report"
pub fn matches_search<R: Searchable>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    record.name().to_lowercase().contains(&needle)
        || record.short_description().to_lowercase().contains(&needle)
}

/// Check if the state restricts anything
pub fn has_filters(state: &FilterState) -> bool {
    !state.is_empty()
}

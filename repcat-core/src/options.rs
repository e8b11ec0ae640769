//! Option resolution: the selectable values offered for each filter
//!
//! Options are the sorted union of the configured baseline for the filter's
//! source key and the values observed in the filter's scope.

use crate::dependency::scope_for;
use crate::models::{BaselineConfig, BaselineEntry};
use crate::registry::{FilterDefinition, FilterId, FilterRegistry};
use crate::state::FilterState;
use std::collections::{BTreeMap, BTreeSet};

/// Baseline option names for a source key
///
/// Lists may hold plain strings or records with a `name`. The first entry
/// decides which shape the list is read as; entries of the other shape are
/// skipped. A missing or malformed source yields no values.
pub fn baseline_values(config: &BaselineConfig, source_key: &str) -> Vec<String> {
    let entries = config.entries(source_key);
    let Some(first) = entries.first() else {
        return Vec::new();
    };
    let plain = first.is_plain();

    let (kept, skipped): (Vec<&BaselineEntry>, Vec<&BaselineEntry>) =
        entries.iter().partition(|e| e.is_plain() == plain);

    if !skipped.is_empty() {
        log::warn!(
            "baseline source '{}' mixes strings and records; skipped {} entries",
            source_key,
            skipped.len()
        );
    }

    kept.into_iter().map(|e| e.name().to_string()).collect()
}

/// Every value the filter's field takes across `scope`
pub fn observed_values<R>(filter: &FilterDefinition<R>, scope: &[&R]) -> BTreeSet<String> {
    scope
        .iter()
        .filter_map(|record| filter.field.read(*record))
        .flat_map(|value| value.values())
        .map(str::to_string)
        .collect()
}

/// Sorted, deduplicated options for one filter over an already-scoped record set
pub fn resolve_options<R>(
    filter: &FilterDefinition<R>,
    config: &BaselineConfig,
    scope: &[&R],
) -> Vec<String> {
    let mut options = observed_values(filter, scope);
    options.extend(baseline_values(config, &filter.source_key));
    options.into_iter().collect()
}

/// Options for every filter, each computed over its dependency scope
pub fn available_options<R>(
    registry: &FilterRegistry<R>,
    config: &BaselineConfig,
    state: &FilterState,
    records: &[R],
) -> BTreeMap<FilterId, Vec<String>> {
    registry
        .iter()
        .map(|filter| {
            let scope = scope_for(registry, filter.id, state, records);
            (filter.id, resolve_options(filter, config, &scope))
        })
        .collect()
}

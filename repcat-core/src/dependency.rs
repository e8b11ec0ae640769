//! Dependency resolution between filters
//!
//! A dependent filter is enabled only while every filter up its `depends_on`
//! chain has a selection. Disabling never clears the dependent filter's own
//! selections: they stay in the state and keep constraining results.

use crate::filtering::matches_filter;
use crate::registry::{FilterId, FilterRegistry};
use crate::state::FilterState;

/// Whether a filter is currently interactive
///
/// Filters without a dependency, and filters whose parent is missing from the
/// registry, are always enabled.
pub fn is_enabled<R>(registry: &FilterRegistry<R>, id: FilterId, state: &FilterState) -> bool {
    registry
        .ancestors(id)
        .iter()
        .all(|parent| !state.selected(parent.id).is_empty())
}

/// Helper text to show for a filter while it is disabled
pub fn helper_text<'a, R>(
    registry: &'a FilterRegistry<R>,
    id: FilterId,
    state: &FilterState,
) -> Option<&'a str> {
    if is_enabled(registry, id, state) {
        return None;
    }
    registry
        .get(id)
        .and_then(|f| f.depends_on.as_ref())
        .map(|d| d.helper_text.as_str())
}

/// The records backing a filter's own option list
///
/// Narrowed by each ancestor that has a selection, using that ancestor's
/// matching rule. With no active ancestor this is every record, in order.
pub fn scope_for<'a, R>(
    registry: &FilterRegistry<R>,
    id: FilterId,
    state: &FilterState,
    records: &'a [R],
) -> Vec<&'a R> {
    let active: Vec<_> = registry
        .ancestors(id)
        .into_iter()
        .filter(|parent| !state.selected(parent.id).is_empty())
        .collect();

    records
        .iter()
        .filter(|record| {
            active
                .iter()
                .all(|parent| matches_filter(*record, parent, state.selected(parent.id)))
        })
        .collect()
}

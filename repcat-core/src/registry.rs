//! Filter registry: the static, ordered list of filter definitions
//!
//! Every filter reads its record field through a typed accessor rather than
//! a string-keyed lookup. A filter may depend on a parent filter, in which
//! case it stays inert until the parent has a selection.

use crate::models::Report;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// Identifies a filter within a [`FilterState`](crate::state::FilterState)
///
/// The id set is fixed to the report catalog's filters. Registries over other
/// record types pick a subset of these ids; a registry never needs all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterId {
    ReportingDomains,
    TeamTags,
    ProcessOwners,
    Teams,
    ReportCategories,
    ReportingFrequencies,
}

impl FilterId {
    pub const ALL: [FilterId; 6] = [
        FilterId::ReportingDomains,
        FilterId::TeamTags,
        FilterId::ProcessOwners,
        FilterId::Teams,
        FilterId::ReportCategories,
        FilterId::ReportingFrequencies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterId::ReportingDomains => "reportingDomains",
            FilterId::TeamTags => "teamTags",
            FilterId::ProcessOwners => "processOwners",
            FilterId::Teams => "teams",
            FilterId::ReportCategories => "reportCategories",
            FilterId::ReportingFrequencies => "reportingFrequencies",
        }
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown filter '{}'", s))
    }
}

/// A value read from a record for matching
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Scalar(&'a str),
    Array(&'a [String]),
}

impl<'a> FieldValue<'a> {
    /// Scalar: membership in `selected`. Array: at least one shared element.
    pub fn matches(&self, selected: &BTreeSet<String>) -> bool {
        match self {
            FieldValue::Scalar(s) => selected.contains(*s),
            FieldValue::Array(values) => values.iter().any(|v| selected.contains(v)),
        }
    }

    pub fn values(&self) -> Vec<&'a str> {
        match self {
            FieldValue::Scalar(s) => vec![*s],
            FieldValue::Array(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Typed accessor for the record field a filter matches against
pub enum FieldAccessor<R> {
    Scalar(fn(&R) -> Option<&str>),
    Array(fn(&R) -> Option<&[String]>),
}

impl<R> FieldAccessor<R> {
    pub fn is_array(&self) -> bool {
        matches!(self, FieldAccessor::Array(_))
    }

    /// `None` when the record lacks the field
    pub fn read<'a>(&self, record: &'a R) -> Option<FieldValue<'a>> {
        match self {
            FieldAccessor::Scalar(get) => get(record).map(FieldValue::Scalar),
            FieldAccessor::Array(get) => get(record).map(FieldValue::Array),
        }
    }
}

impl<R> Clone for FieldAccessor<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for FieldAccessor<R> {}

impl<R> fmt::Debug for FieldAccessor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldAccessor::Scalar(_) => f.write_str("FieldAccessor::Scalar"),
            FieldAccessor::Array(_) => f.write_str("FieldAccessor::Array"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub parent: FilterId,
    /// Shown while the dependent filter is inert
    pub helper_text: String,
}

#[derive(Debug, Clone)]
pub struct FilterDefinition<R> {
    pub id: FilterId,
    pub label: String,
    /// Key into the baseline configuration
    pub source_key: String,
    /// Name of the record field, for display and grouping
    pub record_field: &'static str,
    pub order: i32,
    pub field: FieldAccessor<R>,
    pub depends_on: Option<Dependency>,
}

impl<R> FilterDefinition<R> {
    pub fn new(
        id: FilterId,
        label: &str,
        record_field: &'static str,
        order: i32,
        field: FieldAccessor<R>,
    ) -> Self {
        Self {
            id,
            label: label.to_string(),
            source_key: id.as_str().to_string(),
            record_field,
            order,
            field,
            depends_on: None,
        }
    }

    pub fn source_key(mut self, key: &str) -> Self {
        self.source_key = key.to_string();
        self
    }

    pub fn depends_on(mut self, parent: FilterId, helper_text: &str) -> Self {
        self.depends_on = Some(Dependency {
            parent,
            helper_text: helper_text.to_string(),
        });
        self
    }

    pub fn is_array_field(&self) -> bool {
        self.field.is_array()
    }
}

/// Configuration defects found by [`FilterRegistry::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryIssue {
    #[error("Filter '{0}' is defined more than once")]
    DuplicateId(FilterId),

    #[error("Filter '{filter}' depends on '{parent}', which is not in the registry")]
    UnknownParent { filter: FilterId, parent: FilterId },

    #[error("Filter '{0}' depends on itself")]
    SelfDependency(FilterId),

    #[error("Dependency cycle: {}", .0.iter().map(|id| id.as_str()).collect::<Vec<_>>().join(" -> "))]
    Cycle(Vec<FilterId>),
}

/// Ordered filter definitions for one record type
#[derive(Debug, Clone)]
pub struct FilterRegistry<R> {
    filters: Vec<FilterDefinition<R>>,
}

impl<R> FilterRegistry<R> {
    /// Build a registry, ordering filters by ascending `order` (ties keep input order)
    pub fn new(mut filters: Vec<FilterDefinition<R>>) -> Self {
        filters.sort_by_key(|f| f.order);
        Self { filters }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterDefinition<R>> {
        self.filters.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = FilterId> + '_ {
        self.filters.iter().map(|f| f.id)
    }

    pub fn get(&self, id: FilterId) -> Option<&FilterDefinition<R>> {
        self.filters.iter().find(|f| f.id == id)
    }

    pub fn contains(&self, id: FilterId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Definition of the filter `id` depends on, if it exists in this registry
    pub fn parent_of(&self, id: FilterId) -> Option<&FilterDefinition<R>> {
        let dependency = self.get(id)?.depends_on.as_ref()?;
        self.get(dependency.parent)
    }

    /// Parent, grandparent, ... of `id`, nearest first
    ///
    /// Stops at an unknown parent or at the first repeated filter, so it
    /// terminates even on a registry that failed validation.
    pub fn ancestors(&self, id: FilterId) -> Vec<&FilterDefinition<R>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = id;

        while let Some(parent) = self.parent_of(current) {
            if !seen.insert(parent.id) {
                break;
            }
            chain.push(parent);
            current = parent.id;
        }

        chain
    }

    /// Check ids are unique and dependencies point at known filters without cycles
    pub fn validate(&self) -> Result<(), Vec<RegistryIssue>> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for filter in &self.filters {
            if !seen.insert(filter.id) {
                issues.push(RegistryIssue::DuplicateId(filter.id));
            }
        }

        for filter in &self.filters {
            let Some(dependency) = &filter.depends_on else {
                continue;
            };

            if dependency.parent == filter.id {
                issues.push(RegistryIssue::SelfDependency(filter.id));
            } else if !self.contains(dependency.parent) {
                issues.push(RegistryIssue::UnknownParent {
                    filter: filter.id,
                    parent: dependency.parent,
                });
            }
        }

        for cycle in self.find_cycles() {
            if !issues.contains(&cycle) {
                issues.push(cycle);
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(issues)
        }
    }

    fn find_cycles(&self) -> Vec<RegistryIssue> {
        let mut cycles: Vec<RegistryIssue> = Vec::new();
        let mut reported: HashSet<FilterId> = HashSet::new();

        for filter in &self.filters {
            let mut path = vec![filter.id];
            let mut current = filter.id;

            while let Some(parent) = self
                .get(current)
                .and_then(|f| f.depends_on.as_ref())
                .map(|d| d.parent)
            {
                if !self.contains(parent) {
                    break;
                }
                if let Some(start) = path.iter().position(|id| *id == parent) {
                    let mut cycle: Vec<FilterId> = path[start..].to_vec();
                    // Self dependencies are reported on their own
                    if cycle.len() > 1 && cycle.iter().all(|id| !reported.contains(id)) {
                        reported.extend(cycle.iter().copied());
                        cycle.push(parent);
                        cycles.push(RegistryIssue::Cycle(cycle));
                    }
                    break;
                }
                path.push(parent);
                current = parent;
            }
        }

        cycles
    }
}

fn reporting_domain(r: &Report) -> Option<&str> {
    Some(&r.reporting_domain)
}

fn team_tags(r: &Report) -> Option<&[String]> {
    r.team_tags.as_deref()
}

fn process_owner(r: &Report) -> Option<&str> {
    Some(&r.process_owner)
}

fn team(r: &Report) -> Option<&str> {
    r.team.as_deref()
}

fn category(r: &Report) -> Option<&str> {
    r.category.as_deref()
}

fn reporting_frequency(r: &Report) -> Option<&str> {
    Some(&r.reporting_frequency)
}

impl FilterRegistry<Report> {
    /// The catalog's sidebar filters
    pub fn default_reports() -> Self {
        Self::new(vec![
            FilterDefinition::new(
                FilterId::ReportingDomains,
                "Reporting Domain",
                "reportingDomain",
                1,
                FieldAccessor::Scalar(reporting_domain),
            ),
            FilterDefinition::new(
                FilterId::TeamTags,
                "Team Tags",
                "teamTags",
                2,
                FieldAccessor::Array(team_tags),
            )
            .depends_on(
                FilterId::ReportingDomains,
                "* Select a Reporting Domain to enable",
            ),
            FilterDefinition::new(
                FilterId::ProcessOwners,
                "Process Owner",
                "processOwner",
                3,
                FieldAccessor::Scalar(process_owner),
            ),
            FilterDefinition::new(
                FilterId::Teams,
                "Team",
                "team",
                4,
                FieldAccessor::Scalar(team),
            ),
            FilterDefinition::new(
                FilterId::ReportCategories,
                "Report Category",
                "category",
                5,
                FieldAccessor::Scalar(category),
            ),
            FilterDefinition::new(
                FilterId::ReportingFrequencies,
                "Reporting Frequency",
                "reportingFrequency",
                6,
                FieldAccessor::Scalar(reporting_frequency),
            ),
        ])
    }
}

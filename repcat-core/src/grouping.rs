use crate::models::ProcessOwner;
use crate::registry::FilterDefinition;
use std::collections::HashMap;

/// Group name for records lacking the grouping field
pub const UNSPECIFIED_GROUP: &str = "_unspecified_";

/// Group name for contacts without a team
pub const OTHER_TEAM: &str = "Other";

/// Group records by the field a filter reads
/// Records with multiple values for the field appear in multiple groups
/// Returns a HashMap where keys are group names and values keep the input order
pub fn group_records_by_filter<'a, R>(
    records: &[&'a R],
    filter: &FilterDefinition<R>,
) -> HashMap<String, Vec<&'a R>> {
    let mut groups: HashMap<String, Vec<&'a R>> = HashMap::new();

    for record in records {
        let values = filter
            .field
            .read(*record)
            .map(|v| v.values())
            .unwrap_or_default();

        if values.is_empty() {
            // Records without this field go to "unspecified" group
            groups
                .entry(UNSPECIFIED_GROUP.to_string())
                .or_default()
                .push(*record);
        } else {
            for value in values {
                groups.entry(value.to_string()).or_default().push(*record);
            }
        }
    }

    groups
}

/// Group contacts by team; a blank team goes to "Other"
pub fn group_owners_by_team<'a>(owners: &[&'a ProcessOwner]) -> HashMap<String, Vec<&'a ProcessOwner>> {
    let mut groups: HashMap<String, Vec<&'a ProcessOwner>> = HashMap::new();

    for owner in owners {
        let team = if owner.team.trim().is_empty() {
            OTHER_TEAM
        } else {
            owner.team.as_str()
        };
        groups.entry(team.to_string()).or_default().push(*owner);
    }

    groups
}

/// Get sorted group names from a grouped map
pub fn get_sorted_group_names<T>(groups: &HashMap<String, Vec<T>>) -> Vec<String> {
    let mut group_names: Vec<String> = groups.keys().cloned().collect();
    group_names.sort();
    group_names
}

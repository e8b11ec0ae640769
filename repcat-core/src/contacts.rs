//! Process owner directory: search and team selection over the contacts list

use crate::models::ProcessOwner;
use std::collections::BTreeSet;

/// Team selection meaning "no restriction"
pub const ALL_TEAMS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    pub search: String,
    pub team: String,
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            team: ALL_TEAMS.to_string(),
        }
    }
}

impl ContactQuery {
    pub fn matches(&self, owner: &ProcessOwner) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || owner.name.to_lowercase().contains(&needle)
            || owner.title.to_lowercase().contains(&needle)
            || owner.email.to_lowercase().contains(&needle);

        let matches_team = self.team == ALL_TEAMS || owner.team == self.team;

        matches_search && matches_team
    }
}

/// Contacts matching the query, in directory order
pub fn filter_contacts<'a>(owners: &'a [ProcessOwner], query: &ContactQuery) -> Vec<&'a ProcessOwner> {
    owners.iter().filter(|o| query.matches(o)).collect()
}

/// Distinct teams, sorted
pub fn all_teams(owners: &[ProcessOwner]) -> Vec<String> {
    owners
        .iter()
        .map(|o| o.team.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

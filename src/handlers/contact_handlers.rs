use colored::Colorize;
use repcat_core::{
    all_teams, filter_contacts, get_sorted_group_names, group_owners_by_team, ContactQuery,
    ALL_TEAMS,
};

use crate::state::BrowserState;
use crate::ui::format_contact;

const EMPTY_CONTACTS: &str = "No contacts found matching your criteria.";

/// Render the process owner directory, grouped by team
pub fn render_contacts(state: &BrowserState, query: &ContactQuery) -> String {
    let owners = state.owners();
    let matching = filter_contacts(&owners, query);
    let mut out = Vec::new();

    out.push("# Process Owner Directory".bold().to_string());
    let mut teams = vec![ALL_TEAMS.to_string()];
    teams.extend(all_teams(&owners));
    out.push(format!("{} {}", "Teams:".dimmed(), teams.join(", ")));
    out.push(format!("Showing {} of {} contacts", matching.len(), owners.len()));
    out.push(String::new());

    if matching.is_empty() {
        out.push(EMPTY_CONTACTS.italic().to_string());
        return out.join("\n");
    }

    let groups = group_owners_by_team(&matching);
    for team in get_sorted_group_names(&groups) {
        let Some(members) = groups.get(&team) else {
            continue;
        };
        out.push(format!("## {} ({})", team, members.len()).bold().to_string());
        out.extend(members.iter().map(|o| format_contact(o)));
        out.push(String::new());
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use repcat_core::CatalogData;
    use serde_json::json;
    use std::path::PathBuf;

    fn state() -> BrowserState {
        colored::control::set_override(false);
        let data = CatalogData {
            reports: Vec::new(),
            config: serde_json::from_value(json!({
                "processOwners": [
                    {"eid": "E1", "name": "John Doe", "title": "Finance Lead",
                     "email": "john@company.com", "team": "FDM Analytics"},
                    {"eid": "E2", "name": "Jane Smith", "title": "Ops Manager",
                     "email": "jane@company.com", "team": "Operations"},
                    {"eid": "E3", "name": "Sam Lee", "title": "Analyst",
                     "email": "sam@company.com", "team": ""}
                ]
            }))
            .unwrap(),
        };
        BrowserState::new(data, PathBuf::from("reports.json"), PathBuf::from("config.json"))
    }

    #[test]
    fn test_all_contacts_grouped() {
        let text = render_contacts(&state(), &ContactQuery::default());
        assert!(text.contains("Showing 3 of 3 contacts"));
        assert!(text.contains("## FDM Analytics (1)"));
        assert!(text.contains("## Other (1)"));

        let fdm = text.find("## FDM Analytics").unwrap();
        let ops = text.find("## Operations").unwrap();
        assert!(fdm < ops);
    }

    #[test]
    fn test_search_and_team() {
        let query = ContactQuery {
            search: "LEAD".to_string(),
            team: "Operations".to_string(),
        };
        let text = render_contacts(&state(), &query);
        assert!(text.contains("Showing 0 of 3 contacts"));
        assert!(text.contains(EMPTY_CONTACTS));
    }
}

use chrono::NaiveDate;
use colored::Colorize;
use repcat_core::{FilterDefinition, FilterState, Frequency, ProcessOwner, Report};

use crate::state::ViewMode;

/// Render an ISO date as "January 15, 2024"; anything else is shown as-is
pub fn format_last_updated(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// "Updated Daily" badge, colored by cadence
pub fn frequency_badge(report: &Report) -> String {
    let text = format!(" Updated {} ", report.reporting_frequency);
    let badge = match report.frequency() {
        Some(Frequency::Daily) => text.black().on_green(),
        Some(Frequency::Weekly) => text.black().on_blue(),
        Some(Frequency::Monthly) => text.black().on_magenta(),
        Some(Frequency::Quarterly) => text.black().on_yellow(),
        Some(Frequency::Annual) | None => text.normal().reversed(),
    };
    badge.to_string()
}

/// Tags rendered as "[Urgent] [Q1 Goal]"
fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("[{}]", t))
        .collect::<Vec<_>>()
        .join(" ")
}

fn labeled(label: &str, value: &str) -> String {
    format!("{} {}", format!("{}:", label).bold(), value)
}

/// Format a report for the results list
pub fn format_report_card(report: &Report, mode: ViewMode) -> String {
    let team = report.team.as_deref().unwrap_or("-");

    match mode {
        ViewMode::List => format!(
            "{}  {}\n  {}\n  {} | {} | {}\n",
            report.name.bold(),
            frequency_badge(report),
            report.short_description,
            labeled("Owner", &report.process_owner),
            labeled("Domain", &report.reporting_domain),
            labeled("Team", team),
        ),
        ViewMode::Gallery => {
            let mut badges = vec![
                format!("[{}]", report.reporting_domain).blue().to_string(),
                format!("[{}]", report.reporting_frequency),
            ];
            if let Some(tags) = &report.team_tags {
                if !tags.is_empty() {
                    badges.push(format_tags(tags).purple().to_string());
                }
            }

            format!(
                "{}\n### {}\n{}\n{}\n{}\n{}\n{}\n",
                "-".repeat(60).dimmed(),
                report.name.bold(),
                badges.join(" "),
                report.short_description,
                labeled("Owner", &report.process_owner),
                labeled("Domain", &report.reporting_domain),
                labeled("Team", team),
            )
        }
    }
}

/// Format the full detail page for one report
pub fn format_report_detail(report: &Report) -> String {
    let mut out = Vec::new();

    out.push(format!("# {}", report.name).bold().to_string());
    out.push(frequency_badge(report));
    out.push(String::new());

    out.push("## Overview".bold().to_string());
    out.push(if report.detailed_description.is_empty() {
        report.short_description.clone()
    } else {
        report.detailed_description.clone()
    });
    out.push(String::new());

    out.push("## Key Details".bold().to_string());
    out.push(labeled("Reporting Domain", &report.reporting_domain));
    out.push(labeled("Process Owner", &report.process_owner));
    out.push(labeled("Reporting Frequency", &report.reporting_frequency));
    if !report.last_updated.is_empty() {
        out.push(labeled("Last Updated", &format_last_updated(&report.last_updated)));
    }
    if let Some(team) = &report.team {
        out.push(labeled("Team", team));
    }
    if let Some(category) = &report.category {
        out.push(labeled("Category", category));
    }
    if let Some(tags) = report.team_tags.as_deref().filter(|t| !t.is_empty()) {
        out.push(labeled("Team Tags", &format_tags(tags)));
    }
    out.push(String::new());

    if !report.features.is_empty() {
        out.push("## Key Features".bold().to_string());
        out.extend(report.features.iter().map(|f| format!("  ✓ {}", f)));
        out.push(String::new());
    }

    if !report.source_tables.is_empty() {
        out.push("## Source Tables".bold().to_string());
        out.extend(report.source_tables.iter().map(|t| format!("  - {}", t)));
        out.push(String::new());
    }

    out.push("## Access & Contact".bold().to_string());
    if let Some(instructions) = &report.access_instructions {
        out.push(labeled("Access Instructions", instructions));
    }
    if let Some(access) = &report.access_needed {
        out.push(labeled("Access Needed", access));
    }
    if let Some(link) = &report.destination_link {
        out.push(labeled("Link", &link.underline().to_string()));
    }
    if let Some(email) = &report.contact_email {
        out.push(labeled("Contact", email));
    }

    out.join("\n")
}

/// Format one sidebar section: label, then a checkbox per option
/// Disabled filters are dimmed and followed by their helper text
pub fn format_sidebar_filter(
    filter: &FilterDefinition<Report>,
    options: &[String],
    state: &FilterState,
    enabled: bool,
    helper: Option<&str>,
) -> String {
    let mut lines = vec![filter.label.bold().to_string()];

    if options.is_empty() {
        lines.push("  (no options)".dimmed().to_string());
    }

    for option in options {
        let mark = if state.is_selected(filter.id, option) {
            "[x]"
        } else {
            "[ ]"
        };
        let line = format!("  {} {}", mark, option);
        lines.push(if enabled {
            line
        } else {
            line.dimmed().to_string()
        });
    }

    if let Some(text) = helper {
        lines.push(format!("  {}", text).italic().to_string());
    }

    lines.join("\n")
}

/// Format a contact directory entry
pub fn format_contact(owner: &ProcessOwner) -> String {
    format!(
        "{} ({})\n  {}\n  {} {}\n  {} {}",
        owner.name.bold(),
        owner.team,
        owner.title.cyan(),
        "EID:".dimmed(),
        owner.eid,
        "Email:".dimmed(),
        owner.email,
    )
}

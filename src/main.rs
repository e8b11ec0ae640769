mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use repcat_core::{ContactQuery, ALL_TEAMS};
use std::path::PathBuf;
use std::process;

use crate::errors::map_load_error;
use crate::operations::FileOperations;
use crate::state::{BrowserState, UiState, ViewMode};
use crate::ui::{set_status, show_error, StatusLevel};

/// Report Catalog - browse reports with dependent multi-select filters
///
/// Examples:
///   # All reports as cards
///   repcat list
///
///   # Finance reports tagged Urgent (OR within a filter, AND across filters)
///   repcat list --filter reportingDomains=Finance --filter teamTags=Urgent
///
///   # Compact rows, sorted by name, grouped by team
///   repcat list --view list --sort name --group-by teams
///
///   # Sidebar state after selecting a domain
///   repcat filters --filter reportingDomains=Operations
///
///   # One report in full
///   repcat show report-1
#[derive(Parser, Debug)]
#[command(name = "repcat")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Multiple values for the SAME filter are combined with OR\n  \
    - Different filters and the search text are combined with AND\n  \
    - Team Tags is enabled only once a Reporting Domain is selected\n\n\
Filter ids:\n  \
    reportingDomains, teamTags, processOwners, teams, reportCategories, reportingFrequencies")]
struct Cli {
    /// Path to the reports JSON file
    #[arg(long, value_name = "FILE", env = "REPCAT_REPORTS", default_value = "data/reports.json")]
    reports: PathBuf,

    /// Path to the baseline configuration JSON file
    #[arg(long, value_name = "FILE", env = "REPCAT_CONFIG", default_value = "data/config.json")]
    config: PathBuf,

    /// Check documents against the bundled schemas and treat data problems as fatal
    #[arg(long)]
    strict: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List reports matching the filters and search text
    List {
        /// Select a filter value (format: id=value, can be specified multiple times)
        #[arg(short, long = "filter", value_name = "ID=VALUE")]
        filters: Vec<String>,

        /// Case-insensitive text matched against name and short description
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Result layout
        #[arg(long = "view", value_enum, default_value_t = ViewMode::Gallery)]
        view_mode: ViewMode,

        /// Sort results by name or a filter id
        #[arg(short, long = "sort", value_name = "FIELD")]
        sort_by: Option<String>,

        /// Group results by a filter id
        #[arg(short = 'G', long = "group-by", value_name = "ID")]
        group_by: Option<String>,
    },

    /// Show one report in full
    Show {
        /// Report id
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Show the filter sidebar: options, selections and disabled filters
    Filters {
        /// Select a filter value (format: id=value, can be specified multiple times)
        #[arg(short, long = "filter", value_name = "ID=VALUE")]
        filters: Vec<String>,

        /// Search text applied before counting results
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Press the sidebar reset after applying --filter: selections clear, search text stays
        #[arg(long)]
        reset: bool,
    },

    /// Browse the process owner directory
    Contacts {
        /// Case-insensitive text matched against name, title and email
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Restrict to one team ("all" for every team)
        #[arg(short, long, default_value = ALL_TEAMS)]
        team: String,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Apply --filter and --search arguments, warning about anything ignored
fn apply_selection(state: &mut BrowserState, filters: &[String], search: Option<&str>) {
    for warning in state.apply_filter_args(filters) {
        set_status(format!("Warning: {}", warning), StatusLevel::Warning);
    }
    if let Some(text) = search {
        state.search(text);
    }
}

fn run(cli: Cli, mut state: BrowserState) -> Result<()> {
    let output = match cli.command {
        Command::List {
            filters,
            search,
            view_mode,
            sort_by,
            group_by,
        } => {
            apply_selection(&mut state, &filters, search.as_deref());
            let ui = UiState {
                view_mode,
                sort_by,
                group_by,
            };
            handlers::render_list(&state, &ui)?
        }
        Command::Show { id } => handlers::render_detail(&state, &id)?,
        Command::Filters {
            filters,
            search,
            reset,
        } => {
            apply_selection(&mut state, &filters, search.as_deref());
            if reset {
                state.reset_selections();
            }
            handlers::render_filters(&state)
        }
        Command::Contacts { search, team } => {
            let query = ContactQuery {
                search: search.unwrap_or_default(),
                team,
            };
            handlers::render_contacts(&state, &query)
        }
    };

    println!("{}", output);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let state = FileOperations::new(&cli.reports, &cli.config, cli.strict)
        .load()
        .unwrap_or_else(|err| {
            let (title, message, details) = map_load_error(&err);
            show_error(title, message, details);
            process::exit(1);
        });

    if let Err(err) = run(cli, state) {
        set_status(format!("Error: {:#}", err), StatusLevel::Error);
        process::exit(1);
    }
}

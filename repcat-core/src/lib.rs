// Public modules
pub mod contacts;
pub mod dependency;
pub mod engine;
pub mod error;
pub mod filtering;
pub mod grouping;
pub mod io;
pub mod models;
pub mod options;
pub mod registry;
pub mod schema;
pub mod schema_validation;
pub mod sorting;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use contacts::{all_teams, filter_contacts, ContactQuery, ALL_TEAMS};
pub use dependency::{helper_text, is_enabled, scope_for};
pub use engine::{CatalogEngine, CatalogView};
pub use error::{CatalogError, CatalogResult};
pub use filtering::{apply_filters, has_filters, matches_filters, matches_search, parse_filter_args};
pub use grouping::{get_sorted_group_names, group_owners_by_team, group_records_by_filter};
pub use io::{load_catalog, load_config, load_json, load_reports};
pub use models::{
    find_report, BaselineConfig, BaselineEntry, CatalogData, Frequency, ProcessOwner, Report,
    Searchable,
};
pub use options::{available_options, baseline_values, resolve_options};
pub use registry::{
    Dependency, FieldAccessor, FieldValue, FilterDefinition, FilterId, FilterRegistry,
    RegistryIssue,
};
pub use schema::{config_schema, reports_schema};
pub use schema_validation::{check_document, validate_against_schema};
pub use sorting::{normalize_for_sorting, sort_records, strip_leading_articles, SortKey};
pub use state::FilterState;
pub use validation::validate_catalog;

use repcat_core::{FilterDefinition, FilterId, FilterRegistry, Report, SortKey};

/// Validation error with field and message
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

fn known_filters(registry: &FilterRegistry<Report>) -> String {
    registry
        .ids()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve a filter id given on the command line
pub fn parse_filter_field<'r>(
    registry: &'r FilterRegistry<Report>,
    field: &str,
    value: &str,
) -> Result<&'r FilterDefinition<Report>, ValidationError> {
    value
        .parse::<FilterId>()
        .ok()
        .and_then(|id| registry.get(id))
        .ok_or_else(|| ValidationError {
            field: field.to_string(),
            message: format!(
                "unknown filter '{}' (expected one of: {})",
                value,
                known_filters(registry)
            ),
        })
}

/// Parse a sort field: "name" or a filter id
pub fn parse_sort_key<'r>(
    registry: &'r FilterRegistry<Report>,
    value: &str,
) -> Result<SortKey<'r, Report>, ValidationError> {
    if value.trim().eq_ignore_ascii_case("name") {
        return Ok(SortKey::Name);
    }

    parse_filter_field(registry, "sort", value)
        .map(SortKey::Field)
        .map_err(|e| ValidationError {
            message: format!("{}, or 'name'", e.message),
            ..e
        })
}

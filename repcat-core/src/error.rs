//! Error types for catalog loading and filter engine configuration

use crate::registry::{FilterId, RegistryIssue};
use std::path::PathBuf;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema violation in '{path}':\n{}", .errors.join("\n"))]
    Schema { path: PathBuf, errors: Vec<String> },

    #[error("Validation failed:\n{}", .errors.join("\n"))]
    Validation { errors: Vec<String> },

    #[error("Invalid filter registry:\n{}", format_issues(.issues))]
    Registry { issues: Vec<RegistryIssue> },

    #[error("Filter state is missing a selection set for '{0}'")]
    IncompleteState(FilterId),

    #[error("Filter state has a selection set for '{0}', which is not in the registry")]
    UnknownStateKey(FilterId),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

fn format_issues(issues: &[RegistryIssue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

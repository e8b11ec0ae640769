use repcat_core::*;
use std::path::{Path, PathBuf};

use crate::state::BrowserState;
use crate::ui::{set_status, StatusLevel};

/// File operations orchestration
/// Loads the catalog, runs data validation, and builds the browser state
pub struct FileOperations<'a> {
    reports_path: &'a Path,
    config_path: &'a Path,
    /// Schema and validation problems are fatal instead of warnings
    strict: bool,
}

impl<'a> FileOperations<'a> {
    pub fn new(reports_path: &'a Path, config_path: &'a Path, strict: bool) -> Self {
        Self {
            reports_path,
            config_path,
            strict,
        }
    }

    /// Load both documents and build the browser state
    pub fn load(&self) -> CatalogResult<BrowserState> {
        let data = load_catalog(self.reports_path, self.config_path, self.strict)?;

        if let Err(errors) = validate_catalog(&data, &FilterRegistry::default_reports()) {
            if self.strict {
                return Err(CatalogError::Validation { errors });
            }
            for error in &errors {
                set_status(format!("Warning: {}", error), StatusLevel::Warning);
            }
        }

        let state = BrowserState::new(
            data,
            PathBuf::from(self.reports_path),
            PathBuf::from(self.config_path),
        );
        log::info!("{} loaded", state.get_title());

        Ok(state)
    }
}

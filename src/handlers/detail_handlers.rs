use anyhow::{bail, Result};
use repcat_core::find_report;

use crate::state::BrowserState;
use crate::ui::format_report_detail;

/// Render the detail page for one report id
pub fn render_detail(state: &BrowserState, id: &str) -> Result<String> {
    let Some(report) = find_report(state.reports(), id) else {
        bail!("Report Not Found: no report with id '{}' in {}", id, state.reports_file.display());
    };

    log::debug!("showing report '{}'", report.id);
    Ok(format_report_detail(report))
}

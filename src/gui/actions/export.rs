// src/gui/actions/export.rs
use crate::{file, gui::app::App};

/// Write the last finished run as a CSV/TSV report into its destination folder.
pub fn export(app: &mut App) {
    let status_msg = match app.last_summary.as_ref() {
        None => {
            logd!("Export: Clicked, but there's no finished run");
            s!("Nothing to export")
        }
        Some(summary) => {
            let export = &app.state.options.export;
            logf!(
                "Export: Begin rows={}, format={:?}, headers={}",
                summary.total(),
                export.format,
                export.include_headers
            );

            match file::write_report(export, &summary.destination, &summary.results) {
                Ok(path) => {
                    logf!("Export: OK {}", path.display());
                    format!("Exported report: {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {e}");
                    format!("Export error: {e}")
                }
            }
        }
    };

    app.status(status_msg);
}

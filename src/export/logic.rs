// src/export/logic.rs

use crate::core::filter::filter_by_window;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_brews;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::preflight;
use crate::export::json_csv::write_rows;
use crate::export::model::BrewExport;
use crate::models::window::Window;
use crate::ui::messages::warning;
use chrono::{DateTime, Local};
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the brews visible in `window`, judged against `now`.
    /// The filtering happens client-side on the loaded list, exactly like
    /// the list view does it, so the two can never disagree.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        window: Window,
        now: DateTime<Local>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        preflight(path, force)?;

        let all = load_all_brews(&pool.conn)?;
        let visible = filter_by_window(&all, window, now);

        if visible.is_empty() {
            warning("No brews found for the selected window.");
            return Ok(());
        }

        let rows: Vec<BrewExport> = visible.iter().map(BrewExport::from_record).collect();

        write_rows(format, &rows, path)?;

        // Log interno (non bloccante)
        let _ = audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} brews exported as {}, window '{}'",
                rows.len(),
                format.as_str(),
                window.as_str()
            ),
        );

        Ok(())
    }
}

use crate::core::journal::{Journal, ScoreEntry};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::notify_export_success;
use crate::export::range::parse_range;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export journal entries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or a period expression (see
    ///   [`parse_range`](crate::export::range::parse_range))
    pub fn export(
        journal: &Journal,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let entries: Vec<ScoreEntry> = match range {
            None => journal.as_ascending().to_vec(),
            Some(r) if r.eq_ignore_ascii_case("all") => journal.as_ascending().to_vec(),
            Some(r) => {
                let (start, end) = parse_range(r)?;
                journal.between(start, end)
            }
        };

        if entries.is_empty() {
            warning("No scores found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                write_csv(path, &entries)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(path, &entries)?;
                notify_export_success("JSON", path);
            }
        }

        Ok(())
    }
}

use crate::core::journal::ScoreEntry;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write the entries as CSV, one row per date.
pub(crate) fn write_csv(path: &Path, entries: &[ScoreEntry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "score"])?;

    for entry in entries {
        wtr.write_record(&[entry.date_str(), entry.score.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}

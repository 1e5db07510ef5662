use crate::core::journal::ScoreEntry;
use crate::errors::AppResult;
use std::path::Path;

/// Write the entries as a pretty-printed JSON array.
pub(crate) fn write_json(path: &Path, entries: &[ScoreEntry]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
